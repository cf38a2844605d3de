use super::types::{Cell, Direction};

pub const GRID_SIZE: i32 = 20;
pub const TICK_MS: u64 = 1000;

pub const PLAYER_START: Cell = Cell(5, 5);
pub const AI_START: Cell = Cell(10, 10);
pub const PLAYER_START_DIRECTION: Direction = Direction::Right;
pub const AI_START_DIRECTION: Direction = Direction::Left;

pub const MAX_FOOD_ATTEMPTS: usize = 64;

/// Canonical iteration order; the AI tie-break depends on it.
pub const DIRECTIONS: [Direction; 4] = [
  Direction::Up,
  Direction::Down,
  Direction::Left,
  Direction::Right,
];
