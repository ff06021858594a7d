use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use retext::{
    AppliedRule, Intensity, ReverseOptions, RewriteOptions, SimilarityMethod, Style,
    TransformConfig,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request for the article/essay rewriter
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub text: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub intensity: Intensity,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    pub rewritten_text: String,
    pub original_length: usize,
    pub rewritten_length: usize,
    pub applied_rules: Vec<AppliedRule>,
    pub similarity: f64,
}

/// Rewrite text with a word pass followed by a sentence pass.
///
/// # Example
/// ```json
/// // Request
/// { "text": "Hello, the plan is good.", "style": "formal", "intensity": 100, "seed": 7 }
///
/// // Response
/// {
///   "rewrittenText": "Greetings, the plan is excellent.",
///   "originalLength": 24,
///   "rewrittenLength": 33,
///   "appliedRules": [ { "ruleId": "word:hello", "unitIndex": 0, ... } ],
///   "similarity": 0.43
/// }
/// ```
pub async fn rewrite_text(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<RewriteRequest>,
) -> ServerResult<impl IntoResponse> {
    state.check_text(&request.text)?;

    let mut opts = RewriteOptions::default()
        .with_style(request.style)
        .with_intensity(request.intensity);
    opts.seed = request.seed;
    let result = retext::rewrite(&request.text, &opts)?;

    tracing::info!(
        style = %request.style,
        applied = result.applied_rule_count,
        similarity = result.similarity_score,
        "rewrite_complete"
    );

    state.simulate_latency().await;
    Ok(Json(RewriteResponse {
        rewritten_text: result.output_text,
        original_length: result.original_chars,
        rewritten_length: result.output_chars,
        applied_rules: result.applied_rules,
        similarity: result.similarity_score,
    }))
}

/// Request for the sentence rephraser: a full transform config
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RephraseRequest {
    pub text: String,
    #[serde(default)]
    pub config: TransformConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Run one transform pass and return the full `TransformResult`.
pub async fn rephrase_text(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<RephraseRequest>,
) -> ServerResult<impl IntoResponse> {
    state.check_text(&request.text)?;

    let result = retext::run_transform(&request.text, &request.config, request.seed)?;

    tracing::info!(
        granularity = %request.config.granularity,
        applied = result.applied_rule_count,
        unique = result.is_sufficiently_unique,
        "rephrase_complete"
    );

    state.simulate_latency().await;
    Ok(Json(result))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseRequest {
    pub text: String,
    /// `characters`, `words`, `sentences` or `paragraphs` (singular accepted)
    pub mode: String,
    #[serde(default)]
    pub options: ReverseOptions,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseResponse {
    pub reversed_text: String,
    pub mode: String,
}

/// Reverse text. An unknown mode is rejected with 422.
pub async fn reverse_text(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ReverseRequest>,
) -> ServerResult<impl IntoResponse> {
    state.check_text(&request.text)?;

    let reversed = retext::run_reversal(&request.text, &request.mode, &request.options)?;

    state.simulate_latency().await;
    Ok(Json(ReverseResponse {
        reversed_text: reversed,
        mode: request.mode,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityRequest {
    pub a: String,
    pub b: String,
    #[serde(default)]
    pub method: SimilarityMethod,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResponse {
    pub score: f64,
    /// Method actually used, after any fallback
    pub method: SimilarityMethod,
}

/// Score two texts. Oversized Levenshtein input falls back to Jaccard.
pub async fn compare_texts(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SimilarityRequest>,
) -> ServerResult<impl IntoResponse> {
    state.check_length(&request.a)?;
    state.check_length(&request.b)?;

    let estimate =
        retext::estimate_similarity_with(&state.estimator, &request.a, &request.b, request.method);

    state.simulate_latency().await;
    Ok(Json(SimilarityResponse {
        score: estimate.score,
        method: estimate.method,
    }))
}
