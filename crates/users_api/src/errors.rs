//! Error handling and HTTP error conversion
//!
//! Domain errors from `users_core` are converted to HTTP responses here, at
//! the HTTP boundary. Every failure uses the same [`ErrorResponse`] body and
//! internal errors never expose their message to the client.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use users_core::{UserStoreError, ValidationError};

/// Standard error response for all API errors.
///
/// # Example
///
/// ```json
/// {
///   "error": {
///     "code": "NotFound",
///     "message": "User with id 21 not found",
///     "details": { "id": 21 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetails,
}

/// Error details structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional context (optional, type varies by error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error returned from handlers.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(State(state): State<AppState>) -> Result<Json<UserResponse>, ApiError> {
///     let user = state.users.get(id).await?; // UserStoreError -> ApiError
///     Ok(Json(user.into()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] UserStoreError),

    /// The body or query string could not be read into the expected shape.
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    /// No route matched the request path.
    #[error("No resource found at '{path}'")]
    RouteNotFound { path: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = convert_error(&self);

        // Log error server-side
        log_error(&self, status);

        (status, Json(error_response)).into_response()
    }
}

/// Map an API error to its status code and response body.
pub(crate) fn convert_error(error: &ApiError) -> (StatusCode, ErrorResponse) {
    let (status, code, message, details) = match error {
        ApiError::Validation(err) => convert_validation_error(err),
        ApiError::Store(err) => convert_store_error(err),
        ApiError::MalformedRequest { .. } => (
            StatusCode::BAD_REQUEST,
            "ValidationError",
            error.to_string(),
            None,
        ),
        ApiError::RouteNotFound { path } => (
            StatusCode::NOT_FOUND,
            "NotFound",
            error.to_string(),
            Some(json!({ "path": path })),
        ),
        ApiError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "An internal error occurred".to_string(),
            None,
        ),
    };

    (
        status,
        ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
                details,
            },
        },
    )
}

type Converted = (
    StatusCode,
    &'static str,
    String,
    Option<serde_json::Value>,
);

fn convert_validation_error(error: &ValidationError) -> Converted {
    let details = error.field().map(|field| json!({ "field": field }));
    (
        StatusCode::BAD_REQUEST,
        "ValidationError",
        error.to_string(),
        details,
    )
}

fn convert_store_error(error: &UserStoreError) -> Converted {
    match error {
        UserStoreError::NotFound { id } => (
            StatusCode::NOT_FOUND,
            "NotFound",
            error.to_string(),
            Some(json!({ "id": id })),
        ),
        UserStoreError::IdRetired { id } => (
            StatusCode::CONFLICT,
            "Conflict",
            error.to_string(),
            Some(json!({ "id": id })),
        ),
        UserStoreError::IdsExhausted { last } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            error.to_string(),
            Some(json!({ "lastId": last })),
        ),
        UserStoreError::Validation(inner) => convert_validation_error(inner),
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!("API error: {} - {:#}", status, error);
    } else if status.is_client_error() {
        tracing::warn!("API error: {} - {}", status, error);
    } else {
        tracing::info!("API error: {} - {}", status, error);
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
