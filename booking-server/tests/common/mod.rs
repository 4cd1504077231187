//! Shared test utilities for booking-server integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use booking_server::{AppState, BookingServer, ServerConfig};
use tokio::net::TcpListener;

/// Starts a server on an ephemeral port with in-memory notes
pub async fn create_test_server() -> (Arc<AppState>, SocketAddr) {
    let state = Arc::new(AppState::new_for_testing().unwrap());
    let server = BookingServer::with_state(ServerConfig::default(), Arc::clone(&state));
    let addr = spawn_server(server).await;
    (state, addr)
}

/// Spawns server in background task, returns bound address
pub async fn spawn_server(server: BookingServer) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run_with_listener(listener).await;
    });

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    addr
}
