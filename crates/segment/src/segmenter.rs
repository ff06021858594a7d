use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::granularity::Granularity;
use crate::unit::{Segmentation, TextUnit};

/// A run of terminators followed by whitespace ends a sentence.
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+").expect("sentence break pattern is valid"));

/// One or more blank lines end a paragraph.
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid"));

/// Split `text` into ordered units at the requested granularity.
///
/// Segmentation never fails and never drops input: the returned
/// [`Segmentation`] reconstructs `text` exactly. Empty input yields no units;
/// whitespace-only input yields no units and keeps the whitespace in
/// [`Segmentation::leading`].
///
/// ```rust
/// use segment::{segment, Granularity};
///
/// let seg = segment("First one. Second!  Third", Granularity::Sentence);
/// let texts: Vec<&str> = seg.iter().map(|u| u.text.as_str()).collect();
/// assert_eq!(texts, ["First one.", "Second!", "Third"]);
/// assert_eq!(seg.reconstruct(), "First one. Second!  Third");
/// ```
pub fn segment(text: &str, granularity: Granularity) -> Segmentation {
    match granularity {
        Granularity::Character => segment_graphemes(text),
        Granularity::Word => split_at_breaks(text, granularity, whitespace_breaks(text)),
        Granularity::Sentence => {
            let breaks = SENTENCE_BREAK.find_iter(text).map(|m| {
                // Terminators are ASCII, so the first whitespace byte ends them.
                let term_len = m
                    .as_str()
                    .find(char::is_whitespace)
                    .unwrap_or(m.as_str().len());
                (m.start() + term_len, m.end())
            });
            split_at_breaks(text, granularity, breaks)
        }
        Granularity::Paragraph => {
            let breaks = PARAGRAPH_BREAK.find_iter(text).map(|m| (m.start(), m.end()));
            split_at_breaks(text, granularity, breaks)
        }
    }
}

fn segment_graphemes(text: &str) -> Segmentation {
    let units = text
        .grapheme_indices(true)
        .enumerate()
        .map(|(index, (start, g))| TextUnit {
            index,
            text: g.to_string(),
            start,
            end: start + g.len(),
            separator: String::new(),
            granularity: Granularity::Character,
        })
        .collect();
    Segmentation {
        granularity: Granularity::Character,
        leading: String::new(),
        units,
    }
}

/// Byte ranges of whitespace runs as `(run_start, run_end)`.
fn whitespace_breaks(text: &str) -> Vec<(usize, usize)> {
    let mut breaks = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(idx);
            }
        } else if let Some(start) = run_start.take() {
            breaks.push((start, idx));
        }
    }
    if let Some(start) = run_start {
        breaks.push((start, text.len()));
    }
    breaks
}

/// Build units from `(unit_end, next_start)` break points.
///
/// Text between `unit_end` and `next_start` becomes the unit's separator.
/// Trailing whitespace inside a unit is moved into its separator so units
/// never end with whitespace.
fn split_at_breaks<I>(text: &str, granularity: Granularity, breaks: I) -> Segmentation
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let content_start = text.len() - text.trim_start().len();
    let mut seg = Segmentation {
        granularity,
        leading: text[..content_start].to_string(),
        units: Vec::new(),
    };
    if content_start == text.len() {
        return seg;
    }

    let mut cursor = content_start;
    for (end, next) in breaks {
        if end <= cursor || next > text.len() {
            continue;
        }
        push_unit(&mut seg, text, cursor, end, next);
        cursor = next;
    }
    if cursor < text.len() {
        push_unit(&mut seg, text, cursor, text.len(), text.len());
    }
    seg
}

fn push_unit(seg: &mut Segmentation, text: &str, start: usize, end: usize, next: usize) {
    let body = &text[start..end];
    let lead = body.len() - body.trim_start().len();
    if lead == body.len() {
        // Nothing but whitespace: fold it into the previous boundary.
        extend_boundary(seg, &text[start..next]);
        return;
    }
    if lead > 0 {
        extend_boundary(seg, &text[start..start + lead]);
    }
    let start = start + lead;
    let trimmed_end = start + text[start..end].trim_end().len();
    seg.units.push(TextUnit {
        index: seg.units.len(),
        text: text[start..trimmed_end].to_string(),
        start,
        end: trimmed_end,
        separator: text[trimmed_end..next].to_string(),
        granularity: seg.granularity,
    });
}

fn extend_boundary(seg: &mut Segmentation, boundary: &str) {
    match seg.units.last_mut() {
        Some(prev) => prev.separator.push_str(boundary),
        None => seg.leading.push_str(boundary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(seg: &Segmentation) -> Vec<&str> {
        seg.iter().map(|u| u.text.as_str()).collect()
    }

    #[test]
    fn empty_input_has_no_units() {
        for g in Granularity::ALL {
            let seg = segment("", g);
            assert!(seg.is_empty());
            assert_eq!(seg.reconstruct(), "");
        }
    }

    #[test]
    fn whitespace_only_is_kept_as_leading() {
        let seg = segment(" \n\t ", Granularity::Word);
        assert!(seg.is_empty());
        assert_eq!(seg.leading, " \n\t ");
        assert_eq!(seg.reconstruct(), " \n\t ");
    }

    #[test]
    fn words_keep_attached_punctuation() {
        let seg = segment("  Hello, world!  How are\tyou? ", Granularity::Word);
        assert_eq!(texts(&seg), ["Hello,", "world!", "How", "are", "you?"]);
        assert_eq!(seg.leading, "  ");
        assert_eq!(seg.units[1].separator, "  ");
        assert_eq!(seg.units[3].separator, "\t");
        assert_eq!(seg.units[4].separator, " ");
    }

    #[test]
    fn word_offsets_point_into_parent() {
        let text = " a\u{10348}b  c ";
        let seg = segment(text, Granularity::Word);
        for unit in &seg {
            assert_eq!(&text[unit.start..unit.end], unit.text);
        }
        assert_eq!(seg.units[1].index, 1);
    }

    #[test]
    fn sentences_keep_their_terminators() {
        let seg = segment(
            "First sentence. Second sentence. Third.",
            Granularity::Sentence,
        );
        assert_eq!(texts(&seg), ["First sentence.", "Second sentence.", "Third."]);
        assert_eq!(seg.units[0].separator, " ");
        assert_eq!(seg.units[2].separator, "");
    }

    #[test]
    fn runs_of_terminators_stay_together() {
        let seg = segment("Really?! Yes... ok", Granularity::Sentence);
        assert_eq!(texts(&seg), ["Really?!", "Yes...", "ok"]);
    }

    #[test]
    fn no_terminator_is_one_sentence() {
        let seg = segment("no punctuation at all here", Granularity::Sentence);
        assert_eq!(texts(&seg), ["no punctuation at all here"]);
    }

    #[test]
    fn decimals_do_not_split_sentences() {
        let seg = segment("Pi is 3.14 roughly. Done.", Granularity::Sentence);
        assert_eq!(texts(&seg), ["Pi is 3.14 roughly.", "Done."]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "One line\nsame para.  \n\n  \nSecond para.\n\nThird\n";
        let seg = segment(text, Granularity::Paragraph);
        assert_eq!(texts(&seg), ["One line\nsame para.", "Second para.", "Third"]);
        assert_eq!(seg.units[0].separator, "  \n\n  \n");
        assert_eq!(seg.units[2].separator, "\n");
        assert_eq!(seg.reconstruct(), text);
    }

    #[test]
    fn characters_are_graphemes() {
        let text = "e\u{301}a\u{1F44D}\u{1F3FD}";
        let seg = segment(text, Granularity::Character);
        assert_eq!(texts(&seg), ["e\u{301}", "a", "\u{1F44D}\u{1F3FD}"]);
        assert_eq!(seg.reconstruct(), text);
    }

    #[test]
    fn assemble_with_default_joiners() {
        let seg = segment("  a   b\n c ", Granularity::Word);
        let replaced = ["x", "y", "z"];
        assert_eq!(seg.assemble(&replaced, false), "x y z");
        assert_eq!(seg.assemble(&replaced, true), "  x   y\n z ");

        let paras = segment("p1\n\n\np2", Granularity::Paragraph);
        assert_eq!(paras.assemble(&["q1", "q2"], false), "q1\n\nq2");
    }
}
