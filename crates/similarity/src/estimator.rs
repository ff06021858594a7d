use serde::{Deserialize, Serialize};

use crate::config::{SimilarityConfig, SimilarityError, SimilarityMethod};
use crate::jaccard::jaccard;
use crate::levenshtein::levenshtein_similarity;
use crate::shingle::shingle_similarity_seeded;

/// A similarity score and the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub score: f64,
    pub method: SimilarityMethod,
}

/// Scores how close two texts are, in `[0, 1]`.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEstimator {
    config: SimilarityConfig,
}

impl SimilarityEstimator {
    pub fn new(config: SimilarityConfig) -> Result<Self, SimilarityError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Score `a` against `b` with `method`.
    ///
    /// Only [`SimilarityMethod::Levenshtein`] can fail, when an input exceeds
    /// the configured character cap.
    pub fn estimate(&self, a: &str, b: &str, method: SimilarityMethod) -> Result<f64, SimilarityError> {
        let score = match method {
            SimilarityMethod::Jaccard => jaccard(a, b),
            SimilarityMethod::Levenshtein => {
                levenshtein_similarity(a, b, self.config.max_edit_distance_chars)?
            }
            SimilarityMethod::Shingle => {
                shingle_similarity_seeded(a, b, self.config.shingle_k, self.config.seed)
            }
        };
        Ok(score)
    }

    /// Like [`estimate`](Self::estimate), but falls back to Jaccard when the
    /// requested method refuses the input. The returned method is the one
    /// actually used.
    pub fn estimate_or_fallback(&self, a: &str, b: &str, method: SimilarityMethod) -> Estimate {
        match self.estimate(a, b, method) {
            Ok(score) => Estimate { score, method },
            Err(_) => Estimate {
                score: jaccard(a, b),
                method: SimilarityMethod::Jaccard,
            },
        }
    }
}
