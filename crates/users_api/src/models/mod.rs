//! HTTP request and response models
//!
//! These types are distinct from domain types and exist only in the HTTP
//! layer. Translation to and from `users_core` types lives in
//! [`crate::translation`].

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{ListUsersQuery, UserRequest};
pub use response::{HealthCheckResponse, PageMetadata, UserPageResponse, UserResponse};
