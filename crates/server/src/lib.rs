//! retext server: HTTP REST API for the retext text tools
//!
//! This crate exposes the rewriter, humanizer, rephraser, reverser and
//! similarity estimator of the `retext` crate as JSON endpoints. Request and
//! response fields are camelCase.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /api/metadata` - Server version and uptime
//! - `POST /api/text/rewrite` - Two-pass article rewriter
//! - `POST /api/text/rephrase` - Single transform pass with a full config
//! - `POST /api/text/reverse` - Reverse characters, words, sentences or paragraphs
//! - `POST /api/text/similarity` - Score two texts
//! - `POST /api/ai/humanize` - Casual rewrite with contractions
//!
//! Empty `text` is answered with 400, text over `max_text_chars` with 413,
//! and an unknown mode or invalid config with 422.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
