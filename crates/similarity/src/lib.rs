//! Similarity scores between an input text and its rewrite.
//!
//! Three methods are available, all deterministic and bounded to `[0, 1]`:
//!
//! * [`jaccard`] over lowercased word sets,
//! * [`levenshtein_similarity`], normalised character edit distance with an
//!   input cap,
//! * [`shingle_similarity`] over hashed word k-shingles.
//!
//! [`SimilarityEstimator`] dispatches on [`SimilarityMethod`] and can fall
//! back to Jaccard when Levenshtein refuses an oversized input.

mod config;
mod estimator;
mod jaccard;
mod levenshtein;
mod shingle;

pub use config::{SimilarityConfig, SimilarityError, SimilarityMethod};
pub use estimator::{Estimate, SimilarityEstimator};
pub use jaccard::{jaccard, words};
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
pub use shingle::{shingle_similarity, word_shingles};
