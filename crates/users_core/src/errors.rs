//! Domain error types for the user store.
//!
//! Errors are split into two layers:
//! - [`ValidationError`] for rejected input (field values, ids, paging)
//! - [`UserStoreError`] for failures of store operations
//!
//! Neither type knows about HTTP. The API crate maps them to status codes.

use thiserror::Error;

use crate::user::UserId;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Input rejected before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' is required and cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' is too long: {actual} characters (max: {max})")]
    TooLong {
        field: String,
        actual: usize,
        max: usize,
    },

    #[error("Field '{field}' is not a valid date (expected YYYY-MM-DD): '{value}'")]
    InvalidDate { field: String, value: String },

    #[error("Field '{field}' must not be in the future: '{value}'")]
    FutureDate { field: String, value: String },

    #[error("Field '{field}' is not a valid email address: '{value}'")]
    InvalidEmail { field: String, value: String },

    #[error("User id must be a positive integer, got '{value}'")]
    InvalidId { value: String },

    #[error("User id in body ({body}) does not match id in path ({path})")]
    IdMismatch { path: UserId, body: UserId },

    #[error("Invalid paging parameter '{parameter}': {reason}")]
    InvalidPaging { parameter: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn too_long(field: impl Into<String>, actual: usize, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            actual,
            max,
        }
    }

    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_email(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEmail {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_paging(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPaging {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input, when the error is tied to one field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::EmptyField { field }
            | Self::TooLong { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::FutureDate { field, .. }
            | Self::InvalidEmail { field, .. } => Some(field),
            Self::InvalidId { .. } | Self::IdMismatch { .. } => Some("id"),
            Self::InvalidPaging { parameter, .. } => Some(parameter),
        }
    }
}

/// Failure of a store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("User with id {id} not found")]
    NotFound { id: UserId },

    /// The id belonged to a user that has since been deleted.
    #[error("User id {id} belonged to a deleted user and cannot be reused")]
    IdRetired { id: UserId },

    /// An explicit id at the top of the range left nothing above it.
    #[error("No user ids remain above {last}")]
    IdsExhausted { last: UserId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

pub type StoreResult<T> = Result<T, UserStoreError>;
