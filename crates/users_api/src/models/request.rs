//! HTTP request type definitions
//!
//! Request types accept flexible input: every field is optional and textual,
//! so a missing or badly formatted value surfaces as a field-level
//! validation error during translation instead of an opaque
//! deserialization failure.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
///
/// # Example
///
/// ```json
/// {
///   "firstName": "Ivan",
///   "lastName": "Ivanov",
///   "dayOfBirth": "2000-01-01",
///   "email": "asdas@asdas.tr"
/// }
/// ```
///
/// `id` is accepted so clients can send back a body they received. It is
/// ignored on create and must match the path id on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_birth: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Query string of `GET /api/users`.
///
/// `page` is zero-based. Both values stay textual until translation so a
/// non-numeric value is reported against its parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersQuery {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub size: Option<String>,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
