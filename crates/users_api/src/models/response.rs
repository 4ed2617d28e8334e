//! HTTP response type definitions
//!
//! Response types are built from domain values in [`crate::translation`] and
//! serialize with camelCase field names.

use serde::{Deserialize, Serialize};

/// A single user as returned by every user endpoint.
///
/// # Example
///
/// ```json
/// {
///   "id": 1,
///   "firstName": "Ivan",
///   "lastName": "Petrov",
///   "dayOfBirth": "1985-03-14",
///   "email": "ivan.petrov@example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,

    /// `YYYY-MM-DD`
    pub day_of_birth: String,

    pub email: String,
}

/// Response of `GET /api/users`.
///
/// # Example
///
/// ```json
/// {
///   "_embedded": { "users": [ ... ] },
///   "page": { "size": 20, "totalElements": 20, "totalPages": 1, "number": 0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPageResponse {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedUsers,

    pub page: PageMetadata,
}

/// Collection wrapper inside [`UserPageResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedUsers {
    pub users: Vec<UserResponse>,
}

/// Paging counters of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Requested page size
    pub size: usize,

    /// Number of users in the whole store
    pub total_elements: usize,

    pub total_pages: usize,

    /// Zero-based page number
    pub number: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// API version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Timestamp of health check
    pub timestamp: String,

    /// Error message (if unhealthy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
