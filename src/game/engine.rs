use super::geometry::{in_bounds, step};
use super::types::{CollisionKind, Direction, GameState, Party};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Moved { ate: bool },
  GameOver { loser: Party, winner: Party, cause: CollisionKind },
}

/// Advances one snake by a single cell against the current state.
///
/// Collisions are checked in order wall, self, opponent; the first hit ends
/// the game for `party` and leaves the state untouched so the caller can run
/// the termination path. On a clean move the head is appended and the tail
/// dropped unless the head landed on food.
pub fn advance(state: &mut GameState, party: Party, direction: Direction) -> Outcome {
  let snake = state.snake(party);
  let Some(&head) = snake.last() else {
    return game_over(party, CollisionKind::SelfBody);
  };
  let new_head = step(head, direction);

  if !in_bounds(new_head) {
    return game_over(party, CollisionKind::Wall);
  }
  if snake.contains(&new_head) {
    return game_over(party, CollisionKind::SelfBody);
  }
  if state.snake(party.opponent()).contains(&new_head) {
    return game_over(party, CollisionKind::Opponent);
  }

  let ate = new_head == state.food;
  let snake = state.snake_mut(party);
  snake.push(new_head);
  if !ate {
    snake.remove(0);
  }
  Outcome::Moved { ate }
}

fn game_over(loser: Party, cause: CollisionKind) -> Outcome {
  Outcome::GameOver {
    loser,
    winner: loser.opponent(),
    cause,
  }
}
