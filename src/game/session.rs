use super::layout::{self, canonical_state};
use super::tick::{run_tick, TickOutcome};
use super::types::{Direction, GameState, GameStateSnapshot};
use crate::protocol::{ClientEvent, ServerEvent};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;

const MIN_JOIN_GRACE: Duration = Duration::from_millis(100);

tokio::task_local! {
  // Set for the lifetime of a tick task; identifies it to `disconnect`.
  static TICK_TASK: Arc<AtomicBool>;
}

pub type SessionId = String;

#[derive(Debug)]
struct Session {
  state: Mutex<GameState>,
  outbound: UnboundedSender<ServerEvent>,
}

impl Session {
  fn publish(&self, event: ServerEvent) {
    // A closed channel means the socket is going away; disconnect cleans up.
    let _ = self.outbound.send(event);
  }
}

#[derive(Debug)]
struct TickTask {
  running: Arc<AtomicBool>,
  stop: Arc<Notify>,
  handle: JoinHandle<()>,
}

/// Owns every live session and the tick task driving it.
///
/// Each session's game state sits behind its own mutex; the tick body, input
/// updates and lifecycle transitions for that session all take it, so
/// sessions never wait on each other. The task registry entry holds the only
/// `running` flag.
#[derive(Debug)]
pub struct SessionManager {
  sessions: DashMap<SessionId, Arc<Session>>,
  tasks: DashMap<SessionId, TickTask>,
  tick: Duration,
}

impl SessionManager {
  pub fn new(tick: Duration) -> Self {
    Self {
      sessions: DashMap::new(),
      tasks: DashMap::new(),
      tick,
    }
  }

  pub fn session_count(&self) -> usize {
    self.sessions.len()
  }

  pub fn task_count(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_running(&self, session_id: &str) -> bool {
    self
      .tasks
      .get(session_id)
      .map(|task| task.running.load(Ordering::SeqCst))
      .unwrap_or(false)
  }

  /// Registers a fresh idle session. Returns `false` if the id is taken.
  pub fn connect(&self, session_id: &str, outbound: UnboundedSender<ServerEvent>) -> bool {
    match self.sessions.entry(session_id.to_string()) {
      Entry::Occupied(_) => false,
      Entry::Vacant(entry) => {
        let state = canonical_state(&mut rand::thread_rng());
        entry.insert(Arc::new(Session {
          state: Mutex::new(state),
          outbound,
        }));
        tracing::info!(session_id, "player connected");
        true
      }
    }
  }

  pub async fn handle_event(self: &Arc<Self>, session_id: &str, event: ClientEvent) {
    match event {
      ClientEvent::PlayerMove { direction } => self.player_input(session_id, direction).await,
      ClientEvent::ResetGame => self.reset(session_id).await,
      ClientEvent::StartGame => self.start(session_id).await,
    }
  }

  pub async fn player_input(&self, session_id: &str, direction: Direction) {
    let Some(session) = self.session(session_id) else { return };
    let mut state = session.state.lock().await;
    state.player_direction = direction;
  }

  /// Restores the canonical layout. A running tick task is left alone and
  /// keeps stepping the fresh state.
  pub async fn reset(&self, session_id: &str) {
    let Some(session) = self.session(session_id) else { return };
    let mut state = session.state.lock().await;
    layout::reset(&mut state, &mut rand::thread_rng());
    tracing::info!(session_id, "game reset");
    session.publish(ServerEvent::GameUpdate(GameStateSnapshot::capture(
      &state,
      self.is_running(session_id),
    )));
  }

  pub async fn start(self: &Arc<Self>, session_id: &str) {
    let Some(session) = self.session(session_id) else { return };
    // Held until the task is registered; the new loop blocks on it first.
    let state = session.state.lock().await;
    if self.is_running(session_id) || !self.sessions.contains_key(session_id) {
      return;
    }

    let running = Arc::new(AtomicBool::new(true));
    let stop = Arc::new(Notify::new());
    let handle = tokio::spawn(TICK_TASK.scope(
      Arc::clone(&running),
      Arc::clone(self).tick_loop(session_id.to_string(), Arc::clone(&running), Arc::clone(&stop)),
    ));
    self.tasks.insert(
      session_id.to_string(),
      TickTask {
        running,
        stop,
        handle,
      },
    );

    tracing::info!(session_id, "game started");
    session.publish(ServerEvent::GameUpdate(GameStateSnapshot::capture(&state, true)));
  }

  pub async fn disconnect(&self, session_id: &str) {
    let session = self.sessions.remove(session_id).map(|(_, session)| session);
    let task = match &session {
      Some(session) => {
        let _state = session.state.lock().await;
        self.tasks.remove(session_id).map(|(_, task)| task)
      }
      None => self.tasks.remove(session_id).map(|(_, task)| task),
    };
    tracing::info!(session_id, "player disconnected");

    let Some(task) = task else { return };
    task.running.store(false, Ordering::SeqCst);
    task.stop.notify_one();

    let inside_own_task = TICK_TASK
      .try_with(|current| Arc::ptr_eq(current, &task.running))
      .unwrap_or(false);
    if inside_own_task {
      return;
    }
    let mut handle = task.handle;
    let grace = (self.tick * 2).max(MIN_JOIN_GRACE);
    if tokio::time::timeout(grace, &mut handle).await.is_err() {
      tracing::warn!(session_id, "tick task did not stop in time, aborting");
      handle.abort();
    }
  }

  fn session(&self, session_id: &str) -> Option<Arc<Session>> {
    self.sessions.get(session_id).map(|entry| Arc::clone(entry.value()))
  }

  fn owns_registration(&self, session_id: &str, running: &Arc<AtomicBool>) -> bool {
    self
      .tasks
      .get(session_id)
      .map(|task| Arc::ptr_eq(&task.running, running) && task.running.load(Ordering::SeqCst))
      .unwrap_or(false)
  }

  async fn tick_loop(self: Arc<Self>, session_id: SessionId, running: Arc<AtomicBool>, stop: Arc<Notify>) {
    loop {
      let Some(session) = self.session(&session_id) else { break };
      let mut state = session.state.lock().await;
      if !self.owns_registration(&session_id, &running) {
        break;
      }

      let outcome = run_tick(&mut state, &mut rand::thread_rng());
      match outcome {
        TickOutcome::Continued => {
          session.publish(ServerEvent::GameUpdate(GameStateSnapshot::capture(&state, true)));
        }
        TickOutcome::GameOver { loser, winner, cause } => {
          tracing::info!(
            session_id = %session_id,
            ?loser,
            ?winner,
            cause = cause.as_str(),
            "game over"
          );
          session.publish(ServerEvent::GameOver { winner });
          layout::reset(&mut state, &mut rand::thread_rng());
          running.store(false, Ordering::SeqCst);
          self
            .tasks
            .remove_if(&session_id, |_, task| Arc::ptr_eq(&task.running, &running));
          break;
        }
      }
      drop(state);
      drop(session);

      tokio::select! {
        _ = tokio::time::sleep(self.tick) => {}
        _ = stop.notified() => {}
      }
    }
    tracing::debug!(session_id = %session_id, "tick task stopped");
  }
}
