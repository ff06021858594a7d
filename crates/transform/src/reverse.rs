//! Reversal at any granularity.

use rules::{capitalize_first, lowercase_initial};
use segment::{segment, Granularity, TextUnit};
use serde::{Deserialize, Serialize};

/// Toggles for [`reverse`]. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseOptions {
    /// Keep whitespace where it is. In character mode the other characters
    /// are reversed around it; in unit modes the recorded separators are
    /// kept slot by slot.
    pub preserve_spaces: bool,
    /// Re-apply the case of each slot from the original text.
    pub maintain_case: bool,
    /// Keep digit runs (character mode) or any word containing a digit
    /// (word mode) in place.
    pub preserve_numbers: bool,
    /// Reverse each paragraph on its own.
    pub preserve_paragraphs: bool,
    /// Word mode only: reverse the characters of each word, keeping word order.
    pub mirror_words: bool,
}

impl ReverseOptions {
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

    pub fn with_mirror_words(mut self, on: bool) -> Self {
        self.mirror_words = on;
        self
    }
}

/// Reverse `text` at `granularity`.
///
/// ```rust
/// use transform::{reverse, Granularity, ReverseOptions};
///
/// let opts = ReverseOptions::default();
/// assert_eq!(reverse("Hello World 123", Granularity::Word, &opts), "123 World Hello");
///
/// let numbers = opts.with_preserve_numbers(true);
/// assert_eq!(reverse("abc123def", Granularity::Character, &numbers), "cba123fed");
/// ```
pub fn reverse(text: &str, granularity: Granularity, opts: &ReverseOptions) -> String {
    if opts.preserve_paragraphs && granularity.is_finer_than(Granularity::Paragraph) {
        let paragraphs = segment(text, Granularity::Paragraph);
        let texts: Vec<String> = paragraphs
            .iter()
            .map(|para| reverse_span(&para.text, granularity, opts))
            .collect();
        return paragraphs.assemble(&texts, true);
    }
    reverse_span(text, granularity, opts)
}

fn reverse_span(text: &str, granularity: Granularity, opts: &ReverseOptions) -> String {
    match granularity {
        Granularity::Character => reverse_chars(text, opts),
        Granularity::Word if opts.mirror_words => mirror_words(text, opts),
        _ => reverse_units(text, granularity, opts),
    }
}

fn is_space(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

fn is_digit(g: &str) -> bool {
    g.chars().next().is_some_and(char::is_numeric)
}

/// Reverses scalar values, not grapheme clusters, so reversing twice always
/// restores the input.
fn reverse_chars(text: &str, opts: &ReverseOptions) -> String {
    let chars: Vec<&str> = text
        .char_indices()
        .map(|(i, c)| &text[i..i + c.len_utf8()])
        .collect();

    let reversed: Vec<&str> = if opts.preserve_numbers {
        let mut out = Vec::with_capacity(chars.len());
        for run in chars.chunk_by(|a, b| is_digit(a) == is_digit(b)) {
            if is_digit(run[0]) {
                out.extend_from_slice(run);
            } else {
                out.extend(reverse_around_spaces(run, opts.preserve_spaces));
            }
        }
        out
    } else {
        reverse_around_spaces(&chars, opts.preserve_spaces)
    };

    if !opts.maintain_case {
        return reversed.concat();
    }
    chars
        .iter()
        .zip(&reversed)
        .map(|(slot, g)| slot_case(slot, g))
        .collect()
}

fn reverse_around_spaces<'a>(units: &[&'a str], pin_spaces: bool) -> Vec<&'a str> {
    if !pin_spaces {
        return units.iter().rev().copied().collect();
    }
    let mut movable = units.iter().rev().filter(|g| !is_space(g));
    units
        .iter()
        .map(|&g| {
            if is_space(g) {
                g
            } else {
                movable.next().copied().unwrap_or(g)
            }
        })
        .collect()
}

fn slot_case(slot: &str, g: &str) -> String {
    match slot.chars().next() {
        Some(c) if c.is_uppercase() => g.to_uppercase(),
        Some(c) if c.is_lowercase() => g.to_lowercase(),
        _ => g.to_string(),
    }
}

fn initial_case(slot: &str, text: &str) -> String {
    match slot.chars().find(|c| c.is_alphabetic()) {
        Some(c) if c.is_uppercase() => capitalize_first(text),
        Some(_) => lowercase_initial(text),
        None => text.to_string(),
    }
}

fn mirror_words(text: &str, opts: &ReverseOptions) -> String {
    let seg = segment(text, Granularity::Word);
    let per_word = ReverseOptions {
        preserve_spaces: false,
        ..*opts
    };
    let texts: Vec<String> = seg
        .iter()
        .map(|unit| reverse_chars(&unit.text, &per_word))
        .collect();
    seg.assemble(&texts, opts.preserve_spaces)
}

fn reverse_units(text: &str, granularity: Granularity, opts: &ReverseOptions) -> String {
    let seg = segment(text, granularity);
    let pinned =
        |unit: &TextUnit| opts.preserve_numbers && granularity == Granularity::Word && unit.has_digits();
    let mut movable = seg.iter().rev().filter(|unit| !pinned(unit));
    let texts: Vec<String> = seg
        .iter()
        .map(|slot| {
            let unit = if pinned(slot) {
                slot
            } else {
                movable.next().unwrap_or(slot)
            };
            if opts.maintain_case {
                initial_case(&slot.text, &unit.text)
            } else {
                unit.text.clone()
            }
        })
        .collect();
    seg.assemble(&texts, opts.preserve_spaces)
}
