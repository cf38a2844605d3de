use super::constants::GRID_SIZE;
use super::types::{Cell, Direction};

pub fn in_bounds(cell: Cell) -> bool {
  (0..GRID_SIZE).contains(&cell.0) && (0..GRID_SIZE).contains(&cell.1)
}

pub fn step(cell: Cell, direction: Direction) -> Cell {
  let (dx, dy) = direction.delta();
  Cell(cell.0 + dx, cell.1 + dy)
}

pub fn manhattan(a: Cell, b: Cell) -> i32 {
  (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

pub fn food_candidate_ok(cell: Cell, player_snake: &[Cell], ai_snake: &[Cell]) -> bool {
  !player_snake.contains(&cell) && !ai_snake.contains(&cell)
}
