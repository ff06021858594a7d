//! Configuration for a single transform run.
//!
//! [`TransformConfig`] is a small `Copy` value. The engine takes it by
//! reference and never mutates it, so one config can drive any number of
//! concurrent runs.
//!
//! # Examples
//!
//! ```rust
//! use transform::{Granularity, Intensity, Style, TransformConfig};
//!
//! let cfg = TransformConfig::default()
//!     .with_style(Style::Formal)
//!     .with_intensity(Intensity::Significant)
//!     .with_granularity(Granularity::Sentence);
//! assert!(cfg.validate().is_ok());
//! assert_eq!(cfg.uniqueness_threshold, 0.3);
//! ```
//!
//! The same config deserializes from JSON or YAML; omitted fields take their
//! defaults:
//!
//! ```rust
//! use transform::{Intensity, TransformConfig};
//!
//! let cfg: TransformConfig =
//!     serde_json::from_str(r#"{"style": "casual", "intensity": 70}"#).unwrap();
//! assert_eq!(cfg.intensity, Intensity::Level(70));
//! assert!(cfg.maintain_case);
//! ```

use rules::{Intensity, Style};
use segment::Granularity;
use serde::{Deserialize, Serialize};
use similarity::SimilarityMethod;

use crate::error::TransformError;

/// Everything a transform run needs to know besides the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Register the replacements are drawn from.
    pub style: Style,

    /// Probability that an eligible unit is rewritten.
    pub intensity: Intensity,

    /// Unit size rules are looked up and applied at.
    pub granularity: Granularity,

    /// Keep the original whitespace between units instead of joining them
    /// with the granularity's default separator.
    pub preserve_spaces: bool,

    /// Carry the letter case of each matched span over to its replacement.
    pub maintain_case: bool,

    /// Leave character and word units that contain digits untouched.
    pub preserve_numbers: bool,

    /// Transform each paragraph on its own and keep the original paragraph
    /// breaks. Has no effect at paragraph granularity.
    pub preserve_paragraphs: bool,

    /// Outputs whose similarity to the input falls below this value are
    /// reported as sufficiently unique. Must lie in `[0, 1]`.
    pub uniqueness_threshold: f64,

    /// Method used to score the output against the input.
    pub similarity_method: SimilarityMethod,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            style: Style::Standard,
            intensity: Intensity::Moderate,
            granularity: Granularity::Word,
            preserve_spaces: true,
            maintain_case: true,
            preserve_numbers: true,
            preserve_paragraphs: true,
            uniqueness_threshold: 0.3,
            similarity_method: SimilarityMethod::Jaccard,
        }
    }
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_preserve_spaces(mut self, on: bool) -> Self {
        self.preserve_spaces = on;
        self
    }

    pub fn with_maintain_case(mut self, on: bool) -> Self {
        self.maintain_case = on;
        self
    }

    pub fn with_preserve_numbers(mut self, on: bool) -> Self {
        self.preserve_numbers = on;
        self
    }

    pub fn with_preserve_paragraphs(mut self, on: bool) -> Self {
        self.preserve_paragraphs = on;
        self
    }

    pub fn with_uniqueness_threshold(mut self, threshold: f64) -> Self {
        self.uniqueness_threshold = threshold;
        self
    }

    pub fn with_similarity_method(mut self, method: SimilarityMethod) -> Self {
        self.similarity_method = method;
        self
    }

    /// Reject settings no run could honour.
    pub fn validate(&self) -> Result<(), TransformError> {
        if !(0.0..=1.0).contains(&self.uniqueness_threshold) {
            return Err(TransformError::InvalidConfig(format!(
                "uniqueness_threshold must be within [0, 1] (got {})",
                self.uniqueness_threshold
            )));
        }
        self.intensity
            .validate()
            .map_err(|err| TransformError::InvalidConfig(err.to_string()))
    }

    /// True when units are rewritten paragraph by paragraph.
    pub(crate) fn splits_paragraphs(&self) -> bool {
        self.preserve_paragraphs && self.granularity.is_finer_than(Granularity::Paragraph)
    }
}
