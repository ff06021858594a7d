use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use retext::SimilarityEstimator;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Handlers never mutate it; every request runs against its own RNG and
/// result values.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Estimator used by the similarity endpoint
    pub estimator: SimilarityEstimator,

    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        config
            .validate()
            .map_err(|err| ServerError::Config(err.to_string()))?;

        // Forces the rule table so a bad built-in rule fails at startup
        let rules = retext::rule_table().len();
        tracing::debug!(rules, "rule table ready");

        Ok(Self {
            config: Arc::new(config),
            estimator: SimilarityEstimator::default(),
            started_at: Instant::now(),
        })
    }

    /// Reject empty or oversized tool input.
    pub fn check_text(&self, text: &str) -> ServerResult<()> {
        if text.trim().is_empty() {
            return Err(ServerError::EmptyText);
        }
        self.check_length(text)
    }

    /// Reject oversized input, allowing empty text.
    pub fn check_length(&self, text: &str) -> ServerResult<()> {
        let len = text.chars().count();
        let max = self.config.max_text_chars;
        if len > max {
            return Err(ServerError::TextTooLarge { len, max });
        }
        Ok(())
    }

    /// Sleep for the configured artificial latency, if any.
    pub async fn simulate_latency(&self) {
        if let Some(delay) = self.config.simulated_delay() {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
