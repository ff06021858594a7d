use serde::{Deserialize, Serialize};

use crate::granularity::Granularity;

/// A segment of the parent text with its UTF-8 byte offsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextUnit {
    /// Position of the unit in its segmentation.
    pub index: usize,
    /// The unit content.
    pub text: String,
    /// Byte offset (inclusive) in the parent text.
    pub start: usize,
    /// Byte offset (exclusive) in the parent text.
    pub end: usize,
    /// Exact text between this unit and the next one (or the tail of the
    /// parent text for the last unit).
    pub separator: String,
    pub granularity: Granularity,
}

impl TextUnit {
    /// True when any character is an ASCII or Unicode decimal digit.
    pub fn has_digits(&self) -> bool {
        self.text.chars().any(|c| c.is_numeric())
    }

    /// True when every non-punctuation character is a digit, e.g. `123` or `42,`.
    pub fn is_numeric(&self) -> bool {
        let mut saw_digit = false;
        for c in self.text.chars() {
            if c.is_numeric() {
                saw_digit = true;
            } else if c.is_alphabetic() {
                return false;
            }
        }
        saw_digit
    }

    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

impl AsRef<str> for TextUnit {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Ordered units plus the boundary text needed to rebuild the input.
///
/// `leading + Σ(unit.text + unit.separator)` is byte-identical to the text
/// that was segmented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segmentation {
    pub granularity: Granularity,
    /// Text before the first unit (leading whitespace).
    pub leading: String,
    pub units: Vec<TextUnit>,
}

impl Segmentation {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextUnit> {
        self.units.iter()
    }

    /// Rebuild the original text from units and recorded separators.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(
            self.leading.len()
                + self
                    .units
                    .iter()
                    .map(|u| u.text.len() + u.separator.len())
                    .sum::<usize>(),
        );
        out.push_str(&self.leading);
        for unit in &self.units {
            out.push_str(&unit.text);
            out.push_str(&unit.separator);
        }
        out
    }

    /// Reassemble replacement texts, one per unit slot.
    ///
    /// Character segmentations always keep their recorded boundaries. For
    /// the other granularities `preserve_spaces` keeps the original leading
    /// text and separators slot by slot; otherwise units are joined with
    /// [`Granularity::joiner`] and edge whitespace is dropped.
    pub fn assemble<S: AsRef<str>>(&self, texts: &[S], preserve_spaces: bool) -> String {
        debug_assert_eq!(texts.len(), self.units.len());
        if self.granularity == Granularity::Character || preserve_spaces {
            let mut out = String::with_capacity(self.leading.len() + texts.len() * 8);
            out.push_str(&self.leading);
            for (text, unit) in texts.iter().zip(&self.units) {
                out.push_str(text.as_ref());
                out.push_str(&unit.separator);
            }
            return out;
        }

        let joiner = self.granularity.joiner();
        let mut out = String::new();
        for (i, text) in texts.iter().enumerate() {
            if i > 0 {
                out.push_str(joiner);
            }
            out.push_str(text.as_ref());
        }
        out
    }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a TextUnit;
    type IntoIter = std::slice::Iter<'a, TextUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(text: &str) -> TextUnit {
        TextUnit {
            index: 0,
            text: text.into(),
            start: 0,
            end: text.len(),
            separator: String::new(),
            granularity: Granularity::Word,
        }
    }

    #[test]
    fn numeric_detection() {
        assert!(unit("123").is_numeric());
        assert!(unit("42,").is_numeric());
        assert!(!unit("abc123").is_numeric());
        assert!(unit("abc123").has_digits());
        assert!(!unit("...").is_numeric());
    }

    #[test]
    fn whitespace_detection() {
        assert!(unit(" ").is_whitespace());
        assert!(!unit("").is_whitespace());
        assert!(!unit("a").is_whitespace());
    }
}
