use super::ai::choose_move;
use super::engine::{advance, Outcome};
use super::layout::relocate_food;
use super::types::{CollisionKind, GameState, Party};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
  Continued,
  GameOver { loser: Party, winner: Party, cause: CollisionKind },
}

/// One simulation step. The player moves first; the AI then picks and makes
/// its move against the post-player state. A collision stops the step before
/// any later move or feeding. The caller owns the termination path.
pub fn run_tick<R: Rng>(state: &mut GameState, rng: &mut R) -> TickOutcome {
  let player_direction = state.player_direction;
  let player_ate = match advance(state, Party::Player, player_direction) {
    Outcome::Moved { ate } => ate,
    Outcome::GameOver { loser, winner, cause } => return TickOutcome::GameOver { loser, winner, cause },
  };

  let ai_direction = choose_move(state);
  let ai_ate = match advance(state, Party::Ai, ai_direction) {
    Outcome::Moved { ate } => ate,
    Outcome::GameOver { loser, winner, cause } => return TickOutcome::GameOver { loser, winner, cause },
  };

  // Growth already happened in `advance` by keeping the tail; here food only moves.
  if player_ate || ai_ate {
    relocate_food(state, rng);
  }
  TickOutcome::Continued
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::constants::GRID_SIZE;
  use crate::game::layout::canonical_state;
  use crate::game::types::{Cell, Direction};
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn make_state(player: Vec<Cell>, ai: Vec<Cell>, food: Cell) -> GameState {
    GameState {
      player_snake: player,
      ai_snake: ai,
      food,
      player_direction: Direction::Right,
      ai_direction: Direction::Left,
    }
  }

  fn assert_food_clear(state: &GameState) {
    assert!(!state.player_snake.contains(&state.food));
    assert!(!state.ai_snake.contains(&state.food));
  }

  #[test]
  fn player_eats_and_food_moves_off_both_snakes() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = make_state(vec![Cell(5, 5)], vec![Cell(10, 10)], Cell(6, 5));

    let outcome = run_tick(&mut state, &mut rng);

    assert_eq!(outcome, TickOutcome::Continued);
    assert_eq!(state.player_snake, vec![Cell(5, 5), Cell(6, 5)]);
    // Up and left tie on distance to (6,5); up comes first.
    assert_eq!(state.ai_snake, vec![Cell(10, 9)]);
    assert_eq!(state.ai_direction, Direction::Up);
    assert_ne!(state.food, Cell(6, 5));
    assert_food_clear(&state);
  }

  #[test]
  fn ai_eats_and_grows() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut state = make_state(vec![Cell(1, 1)], vec![Cell(10, 10)], Cell(9, 10));

    assert_eq!(run_tick(&mut state, &mut rng), TickOutcome::Continued);
    assert_eq!(state.ai_snake, vec![Cell(10, 10), Cell(9, 10)]);
    assert_eq!(state.player_snake, vec![Cell(2, 1)]);
    assert_food_clear(&state);
  }

  #[test]
  fn player_wall_hit_stops_the_tick_before_the_ai_moves() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = make_state(vec![Cell(0, 5)], vec![Cell(10, 10)], Cell(3, 3));
    state.player_direction = Direction::Left;

    let outcome = run_tick(&mut state, &mut rng);

    assert_eq!(
      outcome,
      TickOutcome::GameOver {
        loser: Party::Player,
        winner: Party::Ai,
        cause: CollisionKind::Wall,
      }
    );
    assert_eq!(state.ai_snake, vec![Cell(10, 10)]);
    assert_eq!(state.ai_direction, Direction::Left);
  }

  #[test]
  fn ai_plans_against_the_player_after_it_moved() {
    // Pre-tick, up is the AI's best move. The player steps into that cell
    // first, so the AI has to pick the next-best direction instead.
    let mut rng = StdRng::seed_from_u64(4);
    let mut state = make_state(vec![Cell(9, 9)], vec![Cell(10, 10)], Cell(10, 8));

    let mut preview = state.clone();
    assert_eq!(crate::game::ai::choose_move(&mut preview), Direction::Up);

    let outcome = run_tick(&mut state, &mut rng);

    assert_eq!(outcome, TickOutcome::Continued);
    assert_eq!(state.player_snake, vec![Cell(10, 9)]);
    assert_eq!(state.ai_direction, Direction::Down);
    assert_eq!(state.ai_snake, vec![Cell(10, 11)]);
  }

  #[test]
  fn ai_runs_into_the_cell_the_player_just_took() {
    // Cornered AI whose only exit is (1,0). The player takes (1,0) first, so
    // the AI finds no legal move, keeps heading right and hits the new head.
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = make_state(vec![Cell(2, 1), Cell(2, 0)], vec![Cell(0, 1), Cell(0, 0)], Cell(10, 10));
    state.player_direction = Direction::Left;
    state.ai_direction = Direction::Right;

    let mut preview = state.clone();
    assert_eq!(crate::game::ai::choose_move(&mut preview), Direction::Right);

    let outcome = run_tick(&mut state, &mut rng);

    assert_eq!(
      outcome,
      TickOutcome::GameOver {
        loser: Party::Ai,
        winner: Party::Player,
        cause: CollisionKind::Opponent,
      }
    );
    assert_eq!(state.player_snake, vec![Cell(2, 0), Cell(1, 0)]);
  }

  #[test]
  fn food_never_sits_on_a_snake_after_a_clean_tick() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut state = canonical_state(&mut rng);
    let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];
    for round in 0..(GRID_SIZE as usize * 4) {
      state.player_direction = turns[(round / 3) % turns.len()];
      match run_tick(&mut state, &mut rng) {
        TickOutcome::Continued => assert_food_clear(&state),
        TickOutcome::GameOver { .. } => {
          state = canonical_state(&mut rng);
        }
      }
    }
  }
}
