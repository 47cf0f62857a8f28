//! Unit tests for `WsManager`.
//!
//! These tests exercise the WebSocket connection manager directly, without
//! performing any HTTP upgrades. They verify add/remove semantics, broadcast
//! delivery, and graceful shutdown behaviour.

use axum::extract::ws::Message;
use taskboard_api::ws::WsManager;

#[tokio::test]
async fn new_manager_has_zero_connections() {
    let manager = WsManager::new();

    assert_eq!(manager.connection_count().await, 0);
}

#[tokio::test]
async fn add_and_remove_track_connection_count() {
    let manager = WsManager::new();

    let _rx = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    manager.remove("conn-1").await;
    assert_eq!(manager.connection_count().await, 0);
}

#[tokio::test]
async fn remove_unknown_id_is_noop() {
    let manager = WsManager::new();

    let _rx = manager.add("conn-1".to_string()).await;
    manager.remove("nonexistent").await;

    assert_eq!(manager.connection_count().await, 1);
}

#[tokio::test]
async fn broadcast_sends_to_all_connections() {
    let manager = WsManager::new();

    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;

    manager
        .broadcast(Message::Text("hello everyone".into()))
        .await;

    let msg1 = rx1.recv().await.expect("rx1 should receive broadcast");
    let msg2 = rx2.recv().await.expect("rx2 should receive broadcast");

    assert!(matches!(&msg1, Message::Text(t) if *t == "hello everyone"));
    assert!(matches!(&msg2, Message::Text(t) if *t == "hello everyone"));
}

#[tokio::test]
async fn broadcast_skips_closed_channels() {
    let manager = WsManager::new();

    let rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;

    // Drop rx1 to close its channel.
    drop(rx1);

    manager.broadcast(Message::Text("still alive".into())).await;

    let msg = rx2.recv().await.expect("rx2 should receive broadcast");
    assert!(matches!(&msg, Message::Text(t) if *t == "still alive"));
}

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let manager = WsManager::new();

    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;
    assert_eq!(manager.connection_count().await, 2);

    manager.shutdown_all().await;

    assert_eq!(manager.connection_count().await, 0);

    let msg1 = rx1.recv().await.expect("rx1 should receive Close");
    assert!(matches!(msg1, Message::Close(None)));

    let msg2 = rx2.recv().await.expect("rx2 should receive Close");
    assert!(matches!(msg2, Message::Close(None)));

    // After Close, the channel should be closed (no more messages).
    assert!(rx1.recv().await.is_none());
}

#[tokio::test]
async fn duplicate_id_replaces_previous_connection() {
    let manager = WsManager::new();

    let _rx_old = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    // Re-add with the same ID -- should replace, not duplicate.
    let mut rx_new = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    manager.broadcast(Message::Text("replaced".into())).await;
    let msg = rx_new.recv().await.expect("New rx should receive message");
    assert!(matches!(&msg, Message::Text(t) if *t == "replaced"));
}
