//! Request-path errors and the JSON bodies they turn into.
//!
//! Only two failures are visible to clients: an unknown route and an
//! internal fault. Both render as [`ErrorResponse`] with `status_code`
//! mirroring the HTTP status line.

use std::any::Any;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::models::{now_iso8601, ErrorResponse};

// ---

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no route matches the requested path")]
    NotFound,

    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("handler panicked: {0}")]
    Panic(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Serialize(_) | ApiError::Panic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        // ---
        let status = self.status();
        let message = match self {
            ApiError::NotFound => "The requested endpoint was not found",
            _ => "An internal server error occurred",
        };

        ErrorResponse {
            error: status.canonical_reason().unwrap_or("Unknown Error"),
            message,
            status_code: status.as_u16(),
            timestamp: now_iso8601(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        // The error body has no fallible fields, but avoid recursing into
        // ApiError if serialization ever does fail.
        match json_bytes(&self.body()) {
            Ok(bytes) => with_json_header(status, bytes),
            Err(e) => {
                tracing::error!("Failed to serialize error body: {}", e);
                with_json_header(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    br#"{"error":"Internal Server Error","status_code":500}"#.to_vec(),
                )
            }
        }
    }
}

/// Serialize a payload into a pretty-printed JSON response.
///
/// This is the fallible step every handler goes through, so a payload that
/// cannot be encoded becomes a 500 instead of a truncated body.
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> ApiResult<Response> {
    Ok(with_json_header(status, json_bytes(payload)?))
}

fn json_bytes<T: Serialize>(payload: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut bytes = serde_json::to_vec_pretty(payload)?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn with_json_header(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        bytes,
    )
        .into_response()
}

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    // ---
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Panic(detail).into_response()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_not_found_body() {
        // ---
        let body = ApiError::NotFound.body();

        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "The requested endpoint was not found");
        assert_eq!(body.status_code, 404);
    }

    #[test]
    fn test_internal_body() {
        // ---
        let body = ApiError::Panic("boom".to_string()).body();

        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.message, "An internal server error occurred");
        assert_eq!(body.status_code, 500);
    }

    #[test]
    fn test_status_matches_embedded_code() {
        // ---
        for err in [ApiError::NotFound, ApiError::Panic(String::new())] {
            assert_eq!(err.status().as_u16(), err.body().status_code);
        }
    }

    #[test]
    fn test_panic_renders_json_500() {
        // ---
        let response = panic_response(Box::new("secret detail"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }
}
