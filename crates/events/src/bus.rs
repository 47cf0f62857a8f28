//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`TaskEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event name emitted when a task is created through the scoped path.
pub const TASK_ADDED: &str = "taskAdded";
/// Event name emitted when a task is replaced through the scoped path.
pub const TASK_UPDATED: &str = "taskUpdated";
/// Event name emitted when a task is deleted through the scoped path.
pub const TASK_DELETED: &str = "taskDeleted";

/// A task-mutation notification.
///
/// Purely a side channel: no acknowledgment, no ordering guarantee relative
/// to other clients' reads, never a consistency mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEvent {
    /// Wire event name: `"taskAdded"`, `"taskUpdated"`, or `"taskDeleted"`.
    pub name: String,
    /// The created/updated record, or the deleted id string.
    pub payload: serde_json::Value,
    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl TaskEvent {
    fn new(name: &str, payload: serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            payload,
            timestamp: Utc::now(),
        }
    }

    /// A `taskAdded` event carrying the created record.
    pub fn added(task: serde_json::Value) -> Self {
        Self::new(TASK_ADDED, task)
    }

    /// A `taskUpdated` event carrying the updated record.
    pub fn updated(task: serde_json::Value) -> Self {
        Self::new(TASK_UPDATED, task)
    }

    /// A `taskDeleted` event carrying the deleted id string.
    pub fn deleted(id: &str) -> Self {
        Self::new(TASK_DELETED, serde_json::Value::String(id.to_string()))
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`TaskEvent`].
pub struct EventBus {
    sender: broadcast::Sender<TaskEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: TaskEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<TaskEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
