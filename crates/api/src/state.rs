use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskboard_db::DbPool,
    /// Server configuration (accessed by the auth extractor and handlers).
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (event listeners).
    pub ws_manager: Arc<WsManager>,
    /// Notification port: task handlers publish mutation events here.
    pub event_bus: Arc<taskboard_events::EventBus>,
}
