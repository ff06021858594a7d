//! Configuration and error types for the similarity estimator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scoring method used to compare an input with its transformed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMethod {
    /// Word-set overlap. Cheap and order-insensitive.
    #[default]
    Jaccard,
    /// Normalised character edit distance. Quadratic, capped by
    /// [`SimilarityConfig::max_edit_distance_chars`].
    Levenshtein,
    /// Overlap of hashed word k-shingles. Order-sensitive.
    #[serde(alias = "shingles")]
    Shingle,
}

impl SimilarityMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SimilarityMethod::Jaccard => "jaccard",
            SimilarityMethod::Levenshtein => "levenshtein",
            SimilarityMethod::Shingle => "shingle",
        }
    }
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMethod {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jaccard" => Ok(SimilarityMethod::Jaccard),
            "levenshtein" | "edit" => Ok(SimilarityMethod::Levenshtein),
            "shingle" | "shingles" => Ok(SimilarityMethod::Shingle),
            other => Err(SimilarityError::UnknownMethod(other.to_string())),
        }
    }
}

/// Tunables for [`crate::SimilarityEstimator`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Longest input, in characters, accepted by the Levenshtein method.
    pub max_edit_distance_chars: usize,
    /// Words per shingle for [`SimilarityMethod::Shingle`].
    pub shingle_k: usize,
    /// Seed for shingle hashing.
    pub seed: u64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_edit_distance_chars: 50_000,
            shingle_k: 3,
            seed: 0,
        }
    }
}

impl SimilarityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_edit_distance_chars(mut self, max: usize) -> Self {
        self.max_edit_distance_chars = max;
        self
    }

    pub fn with_shingle_k(mut self, k: usize) -> Self {
        self.shingle_k = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.max_edit_distance_chars == 0 {
            return Err(SimilarityError::InvalidConfig(
                "max_edit_distance_chars must be greater than zero".into(),
            ));
        }
        if self.shingle_k == 0 {
            return Err(SimilarityError::InvalidConfig(
                "shingle_k must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("input of {len} characters exceeds the edit-distance limit of {max}")]
    InputTooLarge { len: usize, max: usize },
    #[error("invalid similarity config: {0}")]
    InvalidConfig(String),
    #[error("unknown similarity method '{0}'")]
    UnknownMethod(String),
}
