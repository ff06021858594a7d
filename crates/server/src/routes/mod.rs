//! API route handlers
//!
//! Routes are organized by tool:
//!
//! - `health`: Liveness, readiness and server metadata
//! - `text`: Rewriter, rephraser, reverser and similarity scoring
//! - `humanize`: AI humanizer

pub mod health;
pub mod humanize;
pub mod text;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "retext server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "retext server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/text/rewrite",
            "/api/text/rephrase",
            "/api/text/reverse",
            "/api/text/similarity",
            "/api/ai/humanize",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
