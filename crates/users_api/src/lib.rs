//! Users REST API
//!
//! HTTP layer of the user resource service: CRUD endpoints for users under
//! `/api/users`, backed by any [`UserRepository`].
//!
//! # Architecture
//!
//! This crate handles:
//! - HTTP request/response translation
//! - Error mapping from domain to HTTP
//! - Request id and tracing middleware
//! - Routing and server configuration
//!
//! The dependency flows HTTP API → `users_core`, never the reverse.

use std::sync::Arc;

use users_core::{InMemoryUserStore, StoreResult, UserRepository};

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod translation;

// Re-export key types for convenience
pub use errors::{ApiError, ErrorResponse};
pub use models::{request, response};
pub use server::{ApiConfig, ApiServer, LogFormat};

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Store every handler reads from and writes to
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create application state around an existing store.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// State backed by a fresh, seeded in-memory store.
    pub fn seeded() -> StoreResult<Self> {
        Ok(Self::new(Arc::new(InMemoryUserStore::seeded()?)))
    }
}
