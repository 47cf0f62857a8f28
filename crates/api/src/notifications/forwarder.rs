//! Event-to-WebSocket forwarding.
//!
//! [`EventForwarder`] subscribes to the task event bus and pushes each
//! event to every connected WebSocket client. Handlers publish without
//! knowing whether anyone is listening; this task is the only consumer
//! that turns events into wire messages.

use std::sync::Arc;

use axum::extract::ws::Message;
use taskboard_events::TaskEvent;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Forwards task mutation events to all WebSocket connections.
pub struct EventForwarder {
    ws_manager: Arc<WsManager>,
}

impl EventForwarder {
    /// Create a forwarder that delivers through the given connection manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main forwarding loop.
    ///
    /// Subscribes to the event bus via `receiver` and broadcasts each event
    /// as a JSON text frame. The loop exits when the channel is closed
    /// (i.e. the [`EventBus`](taskboard_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<TaskEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.forward(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event forwarder lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, forwarder shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and push it to every connection.
    async fn forward(&self, event: &TaskEvent) {
        let text = match serde_json::to_string(event) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, event = %event.name, "Failed to serialize event");
                return;
            }
        };
        self.ws_manager.broadcast(Message::Text(text.into())).await;
    }
}
