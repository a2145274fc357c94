use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::{panic_response, ApiError};
use crate::Config;

mod details;
mod health;
mod root;

// ---

pub fn router(config: Config) -> Router {
    // ---
    let app = Router::new()
        .merge(root::router())
        .merge(health::router())
        .merge(details::router())
        .fallback(not_found)
        .with_state(config);

    with_fault_boundary(app)
}

/// Convert a panic in any handler into the 500 JSON body, and trace every
/// request including the ones that panicked.
fn with_fault_boundary(app: Router) -> Router {
    // ---
    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Unknown paths, and unsupported methods on known paths.
async fn not_found() -> ApiError {
    ApiError::NotFound
}
