use super::constants::DIRECTIONS;
use super::geometry::{in_bounds, manhattan, step};
use super::types::{Direction, GameState};

/// Greedy food chaser. Candidate heads that leave the grid or land on either
/// body are discarded; the closest survivor by Manhattan distance wins, ties
/// going to the earlier entry in `DIRECTIONS`. With no survivor the previous
/// heading is kept. The choice is written back to `ai_direction`.
pub fn choose_move(state: &mut GameState) -> Direction {
  let Some(&head) = state.ai_snake.last() else {
    return state.ai_direction;
  };

  let mut best: Option<(i32, Direction)> = None;
  for direction in DIRECTIONS {
    let candidate = step(head, direction);
    if !in_bounds(candidate)
      || state.ai_snake.contains(&candidate)
      || state.player_snake.contains(&candidate)
    {
      continue;
    }
    let distance = manhattan(candidate, state.food);
    match best {
      Some((best_distance, _)) if distance >= best_distance => {}
      _ => best = Some((distance, direction)),
    }
  }

  if let Some((_, direction)) = best {
    state.ai_direction = direction;
  }
  state.ai_direction
}
