use crate::game::input::parse_direction;
use crate::game::types::{Direction, GameStateSnapshot, Party};
use serde::{Deserialize, Serialize};

pub const EVENT_PLAYER_MOVE: &str = "player_move";
pub const EVENT_RESET_GAME: &str = "reset_game";
pub const EVENT_START_GAME: &str = "start_game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEvent {
  PlayerMove { direction: Direction },
  ResetGame,
  StartGame,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
  GameUpdate(GameStateSnapshot),
  GameOver { winner: Party },
}

#[derive(Debug, Deserialize)]
struct Envelope {
  event: String,
  #[serde(default)]
  data: serde_json::Value,
}

/// Unknown events, bad JSON and illegal directions all decode to `None`.
pub fn decode_client_event(text: &str) -> Option<ClientEvent> {
  let envelope = serde_json::from_str::<Envelope>(text).ok()?;
  match envelope.event.as_str() {
    EVENT_PLAYER_MOVE => {
      let direction = envelope
        .data
        .get("direction")
        .and_then(|value| value.as_str())
        .and_then(parse_direction)?;
      Some(ClientEvent::PlayerMove { direction })
    }
    EVENT_RESET_GAME => Some(ClientEvent::ResetGame),
    EVENT_START_GAME => Some(ClientEvent::StartGame),
    _ => None,
  }
}

pub fn encode_server_event(event: &ServerEvent) -> Option<String> {
  serde_json::to_string(event).ok()
}
