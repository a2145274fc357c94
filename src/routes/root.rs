// src/routes/root.rs
//! Discovery endpoint for the Platform Engineering API.
//!
//! `GET /` is the entry point a client hits first: it names the service,
//! reports its version and lists the paths of the other endpoints. Like its
//! siblings it follows the Explicit Module Boundary Pattern (EMBP):
//! - Internal to this file: the endpoint handler
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/` route

use axum::{http::StatusCode, response::Response, routing::get, Router};

use super::not_found;
use crate::error::{json_response, ApiResult};
use crate::models::RootResponse;

/// Handle `GET /`.
///
/// Returns the welcome message, version, current timestamp, the
/// `endpoints` map (`health`, `details`) and the static documentation block.
async fn root() -> ApiResult<Response> {
    json_response(StatusCode::OK, &RootResponse::welcome())
}

/// Create a subrouter containing the `/` route.
///
/// Generic over the application state so it merges with the gateway router.
/// Methods other than GET fall through to the JSON 404.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root).fallback(not_found))
}
