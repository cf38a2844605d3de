use crate::game::session::SessionManager;
use crate::protocol::{decode_client_event, encode_server_event, ServerEvent};
use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

pub async fn handle_socket(socket: WebSocket, sessions: Arc<SessionManager>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();
    let session_id = Uuid::new_v4().to_string();
    if !sessions.connect(&session_id, tx) {
        return;
    }

    let send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let Some(payload) = encode_server_event(&event) else { continue };
            if sender.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    });

    while let Some(result) = receiver.next().await {
        let Ok(message) = result else { break };
        match message {
            Message::Text(text) => {
                let Some(event) = decode_client_event(&text) else { continue };
                sessions.handle_event(&session_id, event).await;
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    sessions.disconnect(&session_id).await;
    send_task.abort();
}
