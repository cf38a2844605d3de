use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(pub i32, pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl Direction {
  pub fn delta(self) -> (i32, i32) {
    match self {
      Direction::Up => (0, -1),
      Direction::Down => (0, 1),
      Direction::Left => (-1, 0),
      Direction::Right => (1, 0),
    }
  }
}

/// Tail first, head last.
pub type Snake = Vec<Cell>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Party {
  Player,
  #[serde(rename = "AI")]
  Ai,
}

impl Party {
  pub fn opponent(self) -> Self {
    match self {
      Party::Player => Party::Ai,
      Party::Ai => Party::Player,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
  Wall,
  SelfBody,
  Opponent,
}

impl CollisionKind {
  pub fn as_str(self) -> &'static str {
    match self {
      CollisionKind::Wall => "wall",
      CollisionKind::SelfBody => "self",
      CollisionKind::Opponent => "opponent",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
  pub player_snake: Snake,
  pub ai_snake: Snake,
  pub food: Cell,
  pub player_direction: Direction,
  pub ai_direction: Direction,
}

impl GameState {
  pub fn snake(&self, party: Party) -> &Snake {
    match party {
      Party::Player => &self.player_snake,
      Party::Ai => &self.ai_snake,
    }
  }

  pub fn snake_mut(&mut self, party: Party) -> &mut Snake {
    match party {
      Party::Player => &mut self.player_snake,
      Party::Ai => &mut self.ai_snake,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStateSnapshot {
  pub player_snake: Snake,
  pub ai_snake: Snake,
  pub food: Cell,
  pub player_direction: Direction,
  pub ai_direction: Direction,
  pub running: bool,
}

impl GameStateSnapshot {
  pub fn capture(state: &GameState, running: bool) -> Self {
    Self {
      player_snake: state.player_snake.clone(),
      ai_snake: state.ai_snake.clone(),
      food: state.food,
      player_direction: state.player_direction,
      ai_direction: state.ai_direction,
      running,
    }
  }
}
