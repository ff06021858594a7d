//! Lossless text segmentation.
//!
//! Splits text into characters (grapheme clusters), words, sentences or
//! paragraphs and records every byte of boundary text, so the units can be
//! rewritten or reordered and then reassembled.
//!
//! ## Guarantees
//!
//! - Pure function of `(text, granularity)`: no I/O, no locale dependence.
//! - Never fails. Stray punctuation or mixed scripts only make boundaries
//!   coarser; nothing is dropped.
//! - `segment(s, g).reconstruct() == s` for every input and granularity.
//!
//! ```rust
//! use segment::{segment, Granularity};
//!
//! let seg = segment("Hello World 123", Granularity::Word);
//! let reversed: Vec<&str> = seg.iter().rev().map(|u| u.text.as_str()).collect();
//! assert_eq!(seg.assemble(&reversed, false), "123 World Hello");
//! ```

mod granularity;
mod segmenter;
mod unit;
mod whitespace;

pub use crate::granularity::{Granularity, ParseGranularityError};
pub use crate::segmenter::segment;
pub use crate::unit::{Segmentation, TextUnit};
pub use crate::whitespace::{collapse_whitespace, is_blank};
