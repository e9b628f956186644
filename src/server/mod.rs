//! HTTP API server for the vector store.

pub mod routes;

use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::storage::VectorStore;
use std::net::SocketAddr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Shared application state for the HTTP server.
///
/// The store carries its own lock, so handlers share it without wrapping.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: VectorStore,
    pub metrics: RwLock<MetricsCollector>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters are plain integers and a ring buffer; a panic mid-update
    /// leaves them usable, so poisoning is ignored.
    pub fn metrics(&self) -> RwLockReadGuard<'_, MetricsCollector> {
        self.metrics.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn metrics_mut(&self) -> RwLockWriteGuard<'_, MetricsCollector> {
        self.metrics.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Start the HTTP server on `addr` and serve until Ctrl-C.
pub async fn start(addr: SocketAddr) -> Result<()> {
    let state = Arc::new(AppState::new());

    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
