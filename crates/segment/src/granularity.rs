use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit size a transform or reversal operates on.
///
/// Every tool (rephraser, rewriter, reverser) shares this one enum instead of
/// passing ad hoc mode strings around. Parsing accepts the singular and plural
/// spellings used by the tool front-ends:
///
/// ```rust
/// use segment::Granularity;
///
/// assert_eq!("words".parse::<Granularity>().unwrap(), Granularity::Word);
/// assert_eq!("Sentence".parse::<Granularity>().unwrap(), Granularity::Sentence);
/// assert!("lines".parse::<Granularity>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[serde(alias = "characters", alias = "char", alias = "chars")]
    Character,
    #[default]
    #[serde(alias = "words")]
    Word,
    #[serde(alias = "sentences")]
    Sentence,
    #[serde(alias = "paragraphs")]
    Paragraph,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Granularity; 4] = [
        Granularity::Character,
        Granularity::Word,
        Granularity::Sentence,
        Granularity::Paragraph,
    ];

    /// Separator placed between units when original spacing is not preserved.
    pub fn joiner(self) -> &'static str {
        match self {
            Granularity::Character => "",
            Granularity::Word | Granularity::Sentence => " ",
            Granularity::Paragraph => "\n\n",
        }
    }

    /// Lowercase singular name, as used in configs and responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Character => "character",
            Granularity::Word => "word",
            Granularity::Sentence => "sentence",
            Granularity::Paragraph => "paragraph",
        }
    }

    /// True for granularities strictly finer than `other`.
    pub fn is_finer_than(self, other: Granularity) -> bool {
        self.rank() < other.rank()
    }

    fn rank(self) -> u8 {
        match self {
            Granularity::Character => 0,
            Granularity::Word => 1,
            Granularity::Sentence => 2,
            Granularity::Paragraph => 3,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode string names no known granularity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown granularity '{0}'; expected characters, words, sentences or paragraphs")]
pub struct ParseGranularityError(pub String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "characters" | "char" | "chars" => Ok(Granularity::Character),
            "word" | "words" => Ok(Granularity::Word),
            "sentence" | "sentences" => Ok(Granularity::Sentence),
            "paragraph" | "paragraphs" => Ok(Granularity::Paragraph),
            _ => Err(ParseGranularityError(s.to_string())),
        }
    }
}
