// src/routes/details.rs
//! Details endpoint for the Platform Engineering API.
//!
//! `GET /api/v1/details` reports the application block (name, version,
//! environment, compiler version, hostname), a hardcoded sample user and a
//! system block whose `uptime` and `memory_usage` are the `"N/A"` sentinel.
//! Unlike `root` and `health` this subrouter needs the [`Config`] state, so it
//! is typed `Router<Config>` rather than generic.

use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use tracing::debug;

use super::not_found;
use crate::error::{json_response, ApiResult};
use crate::models::{DetailsResponse, DETAILS_PATH};
use crate::Config;

// ---

/// Create a subrouter containing the `/api/v1/details` route.
pub fn router() -> Router<Config> {
    // ---
    Router::new().route(DETAILS_PATH, get(handler).fallback(not_found))
}

/// Application, sample user and system blocks. Environment and hostname
/// come from the configuration loaded at startup.
async fn handler(State(config): State<Config>) -> ApiResult<Response> {
    // ---
    debug!(
        "GET {} - environment={} hostname={}",
        DETAILS_PATH, config.environment, config.hostname
    );
    json_response(StatusCode::OK, &DetailsResponse::from_config(&config))
}
