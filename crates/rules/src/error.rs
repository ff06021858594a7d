use thiserror::Error;

use crate::style::Style;

/// Errors raised while building rules.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule '{0}' has an empty trigger")]
    EmptyTrigger(String),
    #[error("rule '{id}' lists no replacements for style {style}")]
    EmptyReplacements { id: String, style: Style },
    #[error("rule '{id}' has an invalid pattern: {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },
    #[error("duplicate rule id '{0}'")]
    DuplicateId(String),
}
