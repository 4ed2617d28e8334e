//! Per-test HTTP server fixture.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use users_api::{ApiConfig, ApiServer, AppState};
use users_core::InMemoryUserStore;

use crate::utils::init_logging;

/// A running API server on `127.0.0.1` with an OS-assigned port.
///
/// # Example
///
/// ```rust,ignore
/// let server = TestServer::start().await?;
/// let response = reqwest::get(server.url("/api/users")).await?;
/// server.stop().await?;
/// ```
pub struct TestServer {
    addr: SocketAddr,
    store: Arc<InMemoryUserStore>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<anyhow::Result<()>>>,
}

impl TestServer {
    /// Start a server over a freshly seeded store.
    pub async fn start() -> anyhow::Result<Self> {
        let store = InMemoryUserStore::seeded().context("Failed to seed user store")?;
        Self::start_with_store(Arc::new(store)).await
    }

    /// Start a server over the given store.
    pub async fn start_with_store(store: Arc<InMemoryUserStore>) -> anyhow::Result<Self> {
        init_logging();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;

        let config = ApiConfig {
            host: addr.ip().to_string(),
            port: addr.port(),
            ..ApiConfig::default()
        };
        let state = AppState::new(store.clone());
        let server = ApiServer::new(config, state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            server
                .serve_with_listener(listener, async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::debug!(%addr, "Test server started");

        Ok(Self {
            addr,
            store,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for a path such as `/api/users`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// The store behind this server, for direct inspection or reset.
    pub fn store(&self) -> &InMemoryUserStore {
        &self.store
    }

    /// Shut the server down and wait for it to finish.
    pub async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        match self.handle.take() {
            Some(handle) => handle.await.context("Test server task panicked")?,
            None => Ok(()),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
