//! YAML configuration file support for retext.
//!
//! One file describes the defaults for every tool: the transform engine, the
//! reverser and the similarity estimator. The CLI loads it with `--config`;
//! embedding applications call [`RetextConfig::from_file`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "blog rewriter"
//!
//! transform:
//!   style: formal
//!   intensity: significant
//!   granularity: word
//!   preserve_spaces: true
//!   maintain_case: true
//!   preserve_numbers: true
//!   preserve_paragraphs: true
//!   uniqueness_threshold: 0.3
//!   similarity_method: jaccard
//!   seed: 42
//!
//! reverse:
//!   mode: sentence
//!   maintain_case: true
//!
//! similarity:
//!   method: levenshtein
//!   max_edit_distance_chars: 50000
//!   shingle_k: 3
//! ```

use std::fs;
use std::path::Path;

use rules::{Intensity, Style};
use segment::Granularity;
use serde::{Deserialize, Serialize};
use similarity::{SimilarityConfig, SimilarityMethod};
use thiserror::Error;
use transform::{ReverseOptions, TransformConfig};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for every retext tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetextConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub transform: TransformSection,

    #[serde(default)]
    pub reverse: ReverseSection,

    #[serde(default)]
    pub similarity: SimilaritySection,
}

impl RetextConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: RetextConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.transform.validate()?;
        self.reverse.validate()?;
        self.similarity.validate()?;
        Ok(())
    }
}

impl Default for RetextConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            transform: TransformSection::default(),
            reverse: ReverseSection::default(),
            similarity: SimilaritySection::default(),
        }
    }
}

/// Transform engine defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSection {
    #[serde(default)]
    pub style: Style,

    #[serde(default)]
    pub intensity: Intensity,

    #[serde(default)]
    pub granularity: Granularity,

    #[serde(default = "true_value")]
    pub preserve_spaces: bool,

    #[serde(default = "true_value")]
    pub maintain_case: bool,

    #[serde(default = "true_value")]
    pub preserve_numbers: bool,

    #[serde(default = "true_value")]
    pub preserve_paragraphs: bool,

    #[serde(default = "default_uniqueness_threshold")]
    pub uniqueness_threshold: f64,

    #[serde(default)]
    pub similarity_method: SimilarityMethod,

    /// Fixed seed for reproducible runs; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TransformSection {
    pub fn to_transform_config(&self) -> TransformConfig {
        TransformConfig::default()
            .with_style(self.style)
            .with_intensity(self.intensity)
            .with_granularity(self.granularity)
            .with_preserve_spaces(self.preserve_spaces)
            .with_maintain_case(self.maintain_case)
            .with_preserve_numbers(self.preserve_numbers)
            .with_preserve_paragraphs(self.preserve_paragraphs)
            .with_uniqueness_threshold(self.uniqueness_threshold)
            .with_similarity_method(self.similarity_method)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_transform_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("transform: {err}")))
    }
}

impl Default for TransformSection {
    fn default() -> Self {
        let base = TransformConfig::default();
        Self {
            style: base.style,
            intensity: base.intensity,
            granularity: base.granularity,
            preserve_spaces: base.preserve_spaces,
            maintain_case: base.maintain_case,
            preserve_numbers: base.preserve_numbers,
            preserve_paragraphs: base.preserve_paragraphs,
            uniqueness_threshold: base.uniqueness_threshold,
            similarity_method: base.similarity_method,
            seed: None,
        }
    }
}

/// Reverser defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseSection {
    #[serde(default = "default_reverse_mode")]
    pub mode: String,

    #[serde(default)]
    pub preserve_spaces: bool,

    #[serde(default)]
    pub maintain_case: bool,

    #[serde(default)]
    pub preserve_numbers: bool,

    #[serde(default)]
    pub preserve_paragraphs: bool,

    #[serde(default)]
    pub mirror_words: bool,
}

impl ReverseSection {
    pub fn to_reverse_options(&self) -> ReverseOptions {
        ReverseOptions::default()
            .with_preserve_spaces(self.preserve_spaces)
            .with_maintain_case(self.maintain_case)
            .with_preserve_numbers(self.preserve_numbers)
            .with_preserve_paragraphs(self.preserve_paragraphs)
            .with_mirror_words(self.mirror_words)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.mode
            .parse::<Granularity>()
            .map(|_| ())
            .map_err(|err| ConfigLoadError::Validation(format!("reverse.mode: {err}")))
    }
}

impl Default for ReverseSection {
    fn default() -> Self {
        Self {
            mode: default_reverse_mode(),
            preserve_spaces: false,
            maintain_case: false,
            preserve_numbers: false,
            preserve_paragraphs: false,
            mirror_words: false,
        }
    }
}

/// Similarity estimator defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilaritySection {
    #[serde(default)]
    pub method: SimilarityMethod,

    #[serde(default = "default_max_edit_distance_chars")]
    pub max_edit_distance_chars: usize,

    #[serde(default = "default_shingle_k")]
    pub shingle_k: usize,

    #[serde(default)]
    pub seed: u64,
}

impl SimilaritySection {
    pub fn to_similarity_config(&self) -> SimilarityConfig {
        SimilarityConfig::new()
            .with_max_edit_distance_chars(self.max_edit_distance_chars)
            .with_shingle_k(self.shingle_k)
            .with_seed(self.seed)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_similarity_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("similarity: {err}")))
    }
}

impl Default for SimilaritySection {
    fn default() -> Self {
        Self {
            method: SimilarityMethod::default(),
            max_edit_distance_chars: default_max_edit_distance_chars(),
            shingle_k: default_shingle_k(),
            seed: 0,
        }
    }
}

fn true_value() -> bool {
    true
}
fn default_uniqueness_threshold() -> f64 {
    0.3
}
fn default_reverse_mode() -> String {
    "word".to_string()
}
fn default_max_edit_distance_chars() -> usize {
    50_000
}
fn default_shingle_k() -> usize {
    3
}
