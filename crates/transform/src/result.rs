use serde::{Deserialize, Serialize};
use similarity::SimilarityMethod;

/// One rule application, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRule {
    pub rule_id: String,
    /// Paragraph the unit belongs to, when paragraphs were processed one by one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<usize>,
    pub unit_index: usize,
    pub before: String,
    pub after: String,
}

/// Outcome of a transform run. Built fresh for every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    pub output_text: String,
    pub applied_rule_count: usize,
    pub applied_rules: Vec<AppliedRule>,
    pub similarity_score: f64,
    /// The method actually used, after any fallback.
    pub similarity_method: SimilarityMethod,
    pub is_sufficiently_unique: bool,
    pub original_chars: usize,
    pub output_chars: usize,
}

impl TransformResult {
    pub fn is_unchanged(&self) -> bool {
        self.applied_rule_count == 0
    }

    /// Share of the text that changed, as `1 - similarity_score`.
    pub fn change_ratio(&self) -> f64 {
        1.0 - self.similarity_score
    }
}
