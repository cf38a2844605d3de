use super::constants::{
  AI_START, AI_START_DIRECTION, GRID_SIZE, MAX_FOOD_ATTEMPTS, PLAYER_START, PLAYER_START_DIRECTION,
};
use super::geometry::food_candidate_ok;
use super::types::{Cell, GameState};
use rand::Rng;

/// Picks a free cell for food. Random sampling first, then a row-major scan
/// so a crowded grid still terminates. `None` only when every cell is taken.
pub fn spawn_food<R: Rng>(rng: &mut R, player_snake: &[Cell], ai_snake: &[Cell]) -> Option<Cell> {
  for _ in 0..MAX_FOOD_ATTEMPTS {
    let cell = Cell(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
    if food_candidate_ok(cell, player_snake, ai_snake) {
      return Some(cell);
    }
  }

  let free: Vec<Cell> = (0..GRID_SIZE)
    .flat_map(|y| (0..GRID_SIZE).map(move |x| Cell(x, y)))
    .filter(|cell| food_candidate_ok(*cell, player_snake, ai_snake))
    .collect();
  if free.is_empty() {
    return None;
  }
  Some(free[rng.gen_range(0..free.len())])
}

pub fn canonical_state<R: Rng>(rng: &mut R) -> GameState {
  let player_snake = vec![PLAYER_START];
  let ai_snake = vec![AI_START];
  let food = spawn_food(rng, &player_snake, &ai_snake).unwrap_or(Cell(0, 0));
  GameState {
    player_snake,
    ai_snake,
    food,
    player_direction: PLAYER_START_DIRECTION,
    ai_direction: AI_START_DIRECTION,
  }
}

pub fn reset<R: Rng>(state: &mut GameState, rng: &mut R) {
  *state = canonical_state(rng);
}

/// Moves food off the snakes. Keeps the old cell if the grid is full.
pub fn relocate_food<R: Rng>(state: &mut GameState, rng: &mut R) {
  if let Some(cell) = spawn_food(rng, &state.player_snake, &state.ai_snake) {
    state.food = cell;
  }
}
