use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use retext::Intensity;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request for the AI humanizer
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeRequest {
    pub text: String,
    /// `light`, `medium`, `heavy` or a level from 0 to 100
    #[serde(default)]
    pub level: Intensity,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeResponse {
    pub original_text: String,
    pub humanized_text: String,
    pub level: Intensity,
    /// Number of rule applications
    pub changes: usize,
    pub similarity: f64,
}

/// Rewrite text in a casual register with contractions.
pub async fn humanize_text(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<HumanizeRequest>,
) -> ServerResult<impl IntoResponse> {
    state.check_text(&request.text)?;

    let result = retext::humanize(&request.text, request.level, request.seed)?;

    tracing::info!(
        level = %request.level,
        changes = result.applied_rule_count,
        "humanize_complete"
    );

    state.simulate_latency().await;
    Ok(Json(HumanizeResponse {
        humanized_text: result.output_text,
        original_text: request.text,
        level: request.level,
        changes: result.applied_rule_count,
        similarity: result.similarity_score,
    }))
}
