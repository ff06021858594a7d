//! Rewrite styles and the intensity dial.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Register a rewrite aims for. Every rule lists its replacements per style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Standard,
    Formal,
    Casual,
    Simplified,
    Creative,
    Academic,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Standard,
        Style::Formal,
        Style::Casual,
        Style::Simplified,
        Style::Creative,
        Style::Academic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Standard => "standard",
            Style::Formal => "formal",
            Style::Casual => "casual",
            Style::Simplified => "simplified",
            Style::Creative => "creative",
            Style::Academic => "academic",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown style '{0}'")]
pub struct ParseStyleError(pub String);

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

/// How likely an eligible unit is to be rewritten.
///
/// The named settings map to fixed probabilities; `Level(n)` is a 0–100 dial
/// mapped linearly onto `n / 100`. `Level(0)` never fires a rule.
///
/// Accepted serde forms are the names (`"slight"`, `"moderate"`,
/// `"significant"`), the aliases `light`/`low`, `medium`,
/// `heavy`/`high`/`aggressive`, or an integer level:
///
/// ```rust
/// use rules::Intensity;
///
/// let named: Intensity = serde_json::from_str("\"heavy\"").unwrap();
/// assert_eq!(named, Intensity::Significant);
/// let level: Intensity = serde_json::from_str("40").unwrap();
/// assert_eq!(level, Intensity::Level(40));
/// assert!(serde_json::from_str::<Intensity>("140").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "IntensityRepr", into = "IntensityRepr")]
pub enum Intensity {
    Slight,
    #[default]
    Moderate,
    Significant,
    Level(u8),
}

impl Intensity {
    pub const MAX_LEVEL: u8 = 100;

    /// Checked constructor for the numeric dial.
    pub fn level(level: u8) -> Result<Self, IntensityError> {
        if level > Self::MAX_LEVEL {
            return Err(IntensityError::LevelOutOfRange(u64::from(level)));
        }
        Ok(Intensity::Level(level))
    }

    /// Probability that an eligible unit gets a rule applied.
    pub fn probability(self) -> f64 {
        match self {
            Intensity::Slight => 0.25,
            Intensity::Moderate => 0.55,
            Intensity::Significant => 0.85,
            Intensity::Level(n) => f64::from(n.min(Self::MAX_LEVEL)) / 100.0,
        }
    }

    pub fn validate(self) -> Result<(), IntensityError> {
        match self {
            Intensity::Level(n) if n > Self::MAX_LEVEL => {
                Err(IntensityError::LevelOutOfRange(u64::from(n)))
            }
            _ => Ok(()),
        }
    }

    pub fn label(self) -> String {
        match self {
            Intensity::Slight => "slight".into(),
            Intensity::Moderate => "moderate".into(),
            Intensity::Significant => "significant".into(),
            Intensity::Level(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntensityError {
    #[error("intensity level must be within 0..=100 (got {0})")]
    LevelOutOfRange(u64),
    #[error("unknown intensity '{0}'")]
    UnknownName(String),
}

impl FromStr for Intensity {
    type Err = IntensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<u64>() {
            return Intensity::try_from(IntensityRepr::Level(level));
        }
        Intensity::try_from(IntensityRepr::Named(trimmed.to_string()))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IntensityRepr {
    Level(u64),
    Named(String),
}

impl TryFrom<IntensityRepr> for Intensity {
    type Error = IntensityError;

    fn try_from(value: IntensityRepr) -> Result<Self, Self::Error> {
        match value {
            IntensityRepr::Level(level) => match u8::try_from(level) {
                Ok(n) if n <= Intensity::MAX_LEVEL => Ok(Intensity::Level(n)),
                _ => Err(IntensityError::LevelOutOfRange(level)),
            },
            IntensityRepr::Named(name) => match name.to_ascii_lowercase().as_str() {
                "slight" | "light" | "low" => Ok(Intensity::Slight),
                "moderate" | "medium" => Ok(Intensity::Moderate),
                "significant" | "heavy" | "high" | "aggressive" => Ok(Intensity::Significant),
                _ => Err(IntensityError::UnknownName(name)),
            },
        }
    }
}

impl From<Intensity> for IntensityRepr {
    fn from(value: Intensity) -> Self {
        match value {
            Intensity::Level(n) => IntensityRepr::Level(u64::from(n)),
            named => IntensityRepr::Named(named.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities_increase_with_intensity() {
        let ladder = [
            Intensity::Level(0),
            Intensity::Slight,
            Intensity::Moderate,
            Intensity::Significant,
            Intensity::Level(100),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0].probability() < pair[1].probability());
        }
        assert_eq!(Intensity::Level(0).probability(), 0.0);
        assert_eq!(Intensity::Level(100).probability(), 1.0);
    }

    #[test]
    fn parses_names_aliases_and_levels() {
        assert_eq!("light".parse::<Intensity>().unwrap(), Intensity::Slight);
        assert_eq!("Medium".parse::<Intensity>().unwrap(), Intensity::Moderate);
        assert_eq!("75".parse::<Intensity>().unwrap(), Intensity::Level(75));
        assert_eq!(
            "300".parse::<Intensity>(),
            Err(IntensityError::LevelOutOfRange(300))
        );
        assert!(matches!(
            "wild".parse::<Intensity>(),
            Err(IntensityError::UnknownName(_))
        ));
    }

    #[test]
    fn serde_round_trips_named_and_numeric() {
        assert_eq!(
            serde_json::to_string(&Intensity::Significant).unwrap(),
            "\"significant\""
        );
        assert_eq!(serde_json::to_string(&Intensity::Level(12)).unwrap(), "12");
    }

    #[test]
    fn level_constructor_checks_range() {
        assert!(Intensity::level(100).is_ok());
        assert!(Intensity::level(101).is_err());
        assert!(Intensity::Level(101).validate().is_err());
    }

    #[test]
    fn style_parsing() {
        assert_eq!("ACADEMIC".parse::<Style>().unwrap(), Style::Academic);
        assert!("pirate".parse::<Style>().is_err());
        let style: Style = serde_json::from_str("\"creative\"").unwrap();
        assert_eq!(style, Style::Creative);
    }
}
