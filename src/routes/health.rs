// src/routes/health.rs
//! Liveness/readiness endpoint for the Platform Engineering API.
//!
//! This module defines the `/api/v1/health` route polled by container
//! orchestrators (e.g., Kubernetes probes). It is a sibling module in the
//! `routes` directory and follows the Explicit Module Boundary Pattern (EMBP):
//! - Internal to this file: the endpoint handler
//! - Exports to the gateway (`mod.rs`): a subrouter containing the route
//!
//! The gateway merges this subrouter into the top-level API router so that
//! `main.rs` does not need to know about individual endpoints.

use axum::{http::StatusCode, response::Response, routing::get, Router};

use super::not_found;
use crate::error::{json_response, ApiResult};
use crate::models::{HealthResponse, HEALTH_PATH};

/// Handle `GET /api/v1/health`.
///
/// Always answers `200` with `status: "up"`. The `checks` block is static;
/// no database, memory or disk probe is performed.
async fn health() -> ApiResult<Response> {
    json_response(StatusCode::OK, &HealthResponse::up())
}

/// Create a subrouter containing the health route.
///
/// This router is generic over the application state so it can merge cleanly
/// with the gateway router, regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(HEALTH_PATH, get(health).fallback(not_found))
}
