//! HTTP routing configuration
//!
//! # Route Structure
//!
//! - GET    /api/users       - List users (paged)
//! - POST   /api/users       - Create user
//! - GET    /api/users/:id   - Get user
//! - PUT    /api/users/:id   - Replace or create user
//! - DELETE /api/users/:id   - Delete user
//! - GET    /api/health      - Health check
//!
//! Any other path answers 404 with the standard error body.

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, server::ApiConfig, AppState};

/// Create the API router with the default configuration.
pub fn create_router(state: AppState) -> Router {
    create_router_with_config(state, &ApiConfig::default())
}

/// Create the complete API router.
///
/// This function sets up:
/// - All endpoint routes and the JSON 404 fallback
/// - Request id and logging middleware
/// - CORS configuration
/// - Request tracing
/// - Timeout handling
pub fn create_router_with_config(state: AppState, config: &ApiConfig) -> Router {
    // Configure CORS for web UI support
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION])
        .allow_credentials(false)
        // Cache preflight responses for 1 hour
        .max_age(Duration::from_secs(3600));

    // Configure request tracing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    let timeout_layer = TimeoutLayer::new(config.request_timeout);

    Router::new()
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route("/api/health", get(handlers::health_check))
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
