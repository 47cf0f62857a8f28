//! Delivery of task mutation events to connected WebSocket clients.

mod forwarder;

pub use forwarder::EventForwarder;
