use super::types::Direction;

pub fn parse_direction(value: &str) -> Option<Direction> {
  match value {
    "up" => Some(Direction::Up),
    "down" => Some(Direction::Down),
    "left" => Some(Direction::Left),
    "right" => Some(Direction::Right),
    _ => None,
  }
}
