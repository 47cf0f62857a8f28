//! Task-mutation event bus.
//!
//! The notification port for the Task service: handlers publish a
//! [`TaskEvent`] after each successful write, and any number of listeners
//! (currently the WebSocket forwarder in the api crate) subscribe
//! independently. Delivery is strictly best-effort.

pub mod bus;

pub use bus::{EventBus, TaskEvent, TASK_ADDED, TASK_DELETED, TASK_UPDATED};
