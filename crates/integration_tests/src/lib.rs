//! Integration testing library for the users API.
//!
//! Each test starts its own [`TestServer`]: a real HTTP server bound to a
//! random local port and backed by a freshly seeded store. Dropping the
//! server shuts it down, so no state leaks between tests.

pub mod client;
pub mod fixtures;
pub mod server;
pub mod utils;

// Re-export commonly used types for convenience
pub use client::UsersClient;
pub use server::TestServer;
pub use utils::init_logging;
