//! HTTP request handlers
//!
//! Handlers translate HTTP requests to store operations and store results
//! to HTTP responses.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Extracts HTTP request data (path params, query params, body)
//! 2. Translates HTTP types to domain types
//! 3. Calls the [`UserRepository`](users_core::UserRepository) in [`AppState`]
//! 4. Translates domain results to HTTP responses
//!
//! Body and query rejections are taken as `Result` so they surface as the
//! standard 400 error body instead of axum's plain-text 415/422.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Extension,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;
use users_core::{UpsertOutcome, UserId};

use crate::{
    errors::ApiError,
    middleware::RequestId,
    models::{request::*, response::*},
    translation::*,
    AppState,
};

/// Path of a single user resource, used for `Location` headers.
fn user_location(id: UserId) -> String {
    format!("/api/users/{}", id)
}

/// GET /api/users
///
/// List users ordered by id. Supports `page` (zero-based) and `size`.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<UserPageResponse>, ApiError> {
    let Query(query) = query?;
    let page_request = http_list_query_to_domain(query)?;

    debug!(
        request_id = %request_id.0,
        page = page_request.number(),
        size = page_request.size(),
        "Listing users"
    );

    let page = state.users.list(page_request).await?;
    Ok(Json(domain_page_to_http(page)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = http_user_id_to_domain(&raw_id)?;

    debug!(request_id = %request_id.0, id = %id, "Fetching user");

    let user = state.users.get(id).await?;
    Ok(Json(domain_user_to_http(user)))
}

/// POST /api/users
///
/// Create a user under the next free id. Any `id` in the body is ignored.
/// Responds 201 Created with a `Location` header.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let details = http_user_request_to_domain(request)?;

    let user = state.users.create(details).await?;

    debug!(request_id = %request_id.0, id = %user.id, "User created via POST");

    let location = user_location(user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(domain_user_to_http(user)),
    )
        .into_response())
}

/// PUT /api/users/{id}
///
/// Replace the user at `id`, or create it there if it does not exist.
///
/// # Response
///
/// - `200 OK` - existing user replaced
/// - `201 Created` - new user created at `id`, with `Location` header
/// - `400 Bad Request` - invalid body, or body `id` differs from path
/// - `409 Conflict` - `id` belonged to a deleted user
pub async fn update_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = http_user_id_to_domain(&raw_id)?;
    let Json(request) = payload?;
    check_body_id(id, &request)?;
    let details = http_user_request_to_domain(request)?;

    let outcome = state.users.upsert(id, details).await?;

    debug!(
        request_id = %request_id.0,
        id = %id,
        created = outcome.is_created(),
        "User upserted"
    );

    let response = match outcome {
        UpsertOutcome::Created(user) => (
            StatusCode::CREATED,
            [(header::LOCATION, user_location(user.id))],
            Json(domain_user_to_http(user)),
        )
            .into_response(),
        UpsertOutcome::Updated(user) => {
            (StatusCode::OK, Json(domain_user_to_http(user))).into_response()
        }
    };

    Ok(response)
}

/// DELETE /api/users/{id}
///
/// Responds 204 No Content with an empty body, or 404 if no such user.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = http_user_id_to_domain(&raw_id)?;

    state.users.delete(id).await?;

    debug!(request_id = %request_id.0, id = %id, "User deleted via DELETE");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/health
///
/// Returns service health status with version and timestamp.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
        error: None,
    })
}

/// Fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
