use axum::{
  extract::{State, WebSocketUpgrade},
  http::Method,
  response::IntoResponse,
  routing::get,
  Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod app;
mod game;
mod protocol;
mod transport;

use app::config::AppConfig;
use game::session::SessionManager;
use transport::ws_session::handle_socket;

#[derive(Clone)]
struct AppState {
  sessions: Arc<SessionManager>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
  ok: bool,
  sessions: usize,
  running: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let config = AppConfig::from_env()?;
  let state = AppState {
    sessions: Arc::new(SessionManager::new(config.tick)),
  };

  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET])
    .allow_headers(Any);

  let app: Router = Router::new()
    .route("/api/health", get(health))
    .route("/snake_game", get(ws_handler))
    .layer(cors)
    .with_state(state);

  let address = config.address();
  tracing::info!(tick_ms = config.tick.as_millis() as u64, "listening on {address}");

  let listener = tokio::net::TcpListener::bind(&address).await?;
  axum::serve(listener, app).await?;

  Ok(())
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
  Json(HealthResponse {
    ok: true,
    sessions: state.sessions.session_count(),
    running: state.sessions.task_count(),
  })
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
  let sessions = Arc::clone(&state.sessions);
  ws.on_upgrade(move |socket| handle_socket(socket, sessions))
}
