//! Style-keyed rewrite rules.
//!
//! A [`RuleTable`] maps words, phrases, regex patterns and sentence shapes to
//! per-[`Style`] replacement lists. The table is immutable once built; the
//! built-in table is shared process-wide through [`rule_table`].
//!
//! ```rust
//! use rules::{rule_table, Style};
//! use segment::{segment, Granularity};
//!
//! let seg = segment("Hello there", Granularity::Word);
//! let hits = rule_table().lookup(&seg.units[0], Style::Formal);
//! assert_eq!(hits[0].id(), "word:hello");
//! ```

mod builtin;
mod case;
mod entry;
mod error;
mod structural;
mod style;
mod table;

pub use builtin::builtin_entries;
pub use case::{
    capitalize_first, is_all_caps, lowercase_first, lowercase_initial, match_case, split_affixes,
};
pub use entry::{RuleEntry, Specificity, Trigger};
pub use error::RuleError;
pub use structural::{
    flip_voice, insert_connective, invert_clauses, starts_with_connective, Structural,
};
pub use style::{Intensity, IntensityError, ParseStyleError, Style};
pub use table::{choose_rule, rule_table, RuleTable};
