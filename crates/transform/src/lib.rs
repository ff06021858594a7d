//! Rule-driven rewriting and reversal.
//!
//! [`TransformEngine`] segments text at the configured [`Granularity`], looks
//! up candidate rules for each unit, rewrites a random share of eligible
//! units according to the [`Intensity`], reassembles the text and scores the
//! result against the input. [`reverse`] reorders units (or characters) under
//! the same granularity model.
//!
//! ```rust
//! use transform::{Intensity, Style, TransformConfig, TransformEngine};
//!
//! let engine = TransformEngine::new();
//! let cfg = TransformConfig::default()
//!     .with_style(Style::Formal)
//!     .with_intensity(Intensity::Level(100));
//! let result = engine.transform_seeded("HELLO there", &cfg, Some(7)).unwrap();
//! assert_eq!(result.output_text, "GREETINGS there");
//! assert_eq!(result.applied_rule_count, 1);
//! ```

mod config;
mod engine;
mod error;
mod result;
mod reverse;

pub use crate::config::TransformConfig;
pub use crate::engine::TransformEngine;
pub use crate::error::TransformError;
pub use crate::result::{AppliedRule, TransformResult};
pub use crate::reverse::{reverse, ReverseOptions};

pub use rules::{Intensity, Style};
pub use segment::Granularity;
pub use similarity::SimilarityMethod;
