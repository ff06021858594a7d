//! Sentence-level rewrites that reorder or extend a sentence instead of
//! swapping words.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::case::{capitalize_first, lowercase_first};

/// Kinds of structural rewrite. Each applies to whole sentences only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Structural {
    /// Swap the two clauses around a single comma.
    InvertClauses,
    /// Flip a simple pronoun-verb-object sentence between active and passive.
    FlipVoice,
    /// Open a non-initial sentence with a connective phrase.
    InsertConnective,
}

impl Structural {
    pub fn as_str(self) -> &'static str {
        match self {
            Structural::InvertClauses => "invert_clauses",
            Structural::FlipVoice => "flip_voice",
            Structural::InsertConnective => "insert_connective",
        }
    }

    /// Whether this rewrite can apply to the sentence at `index`.
    pub fn matches(self, sentence: &str, index: usize) -> bool {
        match self {
            Structural::InvertClauses => invert_clauses(sentence).is_some(),
            Structural::FlipVoice => ACTIVE.is_match(sentence.trim()) || PASSIVE.is_match(sentence.trim()),
            Structural::InsertConnective => {
                index > 0
                    && sentence.split_whitespace().count() >= 4
                    && sentence.trim_start().starts_with(char::is_alphabetic)
                    && !starts_with_connective(sentence)
            }
        }
    }

    /// Produce the rewritten sentence. `phrase` is the style's chosen
    /// replacement, used by rewrites that insert text.
    pub fn rewrite(self, sentence: &str, phrase: Option<&str>) -> Option<String> {
        match self {
            Structural::InvertClauses => invert_clauses(sentence),
            Structural::FlipVoice => flip_voice(sentence),
            Structural::InsertConnective => insert_connective(sentence, phrase?),
        }
    }
}

impl fmt::Display for Structural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn split_terminator(sentence: &str) -> (&str, &str) {
    let body = sentence.trim_end_matches(['.', '!', '?']);
    (body, &sentence[body.len()..])
}

fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// `"When it rains, we stay inside."` becomes `"We stay inside, when it rains."`.
///
/// Requires exactly one comma with at least two words on each side.
pub fn invert_clauses(sentence: &str) -> Option<String> {
    let (body, terminator) = split_terminator(sentence.trim());
    if body.matches(',').count() != 1 {
        return None;
    }
    let (first, second) = body.split_once(',')?;
    let (first, second) = (first.trim(), second.trim());
    if word_count(first) < 2 || word_count(second) < 2 {
        return None;
    }
    Some(format!(
        "{}, {}{}",
        capitalize_first(second),
        lowercase_first(first),
        terminator
    ))
}

const DETERMINERS: &str = "the|a|an|this|that|these|those|my|our|their|his|her|your";

static ACTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<subj>i|we|they|he|she|you)\s+(?P<verb>[a-z]+ed)\s+(?P<det>{DETERMINERS})\s+(?P<obj>[^,;]+?)(?P<term>[.!?]*)$"
    ))
    .expect("active voice pattern is valid")
});

static PASSIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<det>{DETERMINERS})\s+(?P<obj>[^,;]+?)\s+(?:was|were)\s+(?P<verb>[a-z]+ed)\s+by\s+(?P<agent>me|us|them|him|her|you)(?P<term>[.!?]*)$"
    ))
    .expect("passive voice pattern is valid")
});

fn object_pronoun(subject: &str) -> &'static str {
    match subject.to_lowercase().as_str() {
        "i" => "me",
        "we" => "us",
        "they" => "them",
        "he" => "him",
        "she" => "her",
        _ => "you",
    }
}

fn subject_pronoun(object: &str) -> &'static str {
    match object.to_lowercase().as_str() {
        "me" => "I",
        "us" => "We",
        "them" => "They",
        "him" => "He",
        "her" => "She",
        _ => "You",
    }
}

fn passive_auxiliary(det: &str, object: &str) -> &'static str {
    let det = det.to_lowercase();
    let head = object.split_whitespace().last().unwrap_or(object);
    if det == "these" || det == "those" || (head.ends_with('s') && !head.ends_with("ss")) {
        "were"
    } else {
        "was"
    }
}

/// Flip `"They painted the fence."` to `"The fence was painted by them."`
/// and back.
pub fn flip_voice(sentence: &str) -> Option<String> {
    let trimmed = sentence.trim();
    if let Some(caps) = ACTIVE.captures(trimmed) {
        return Some(to_passive(&caps));
    }
    PASSIVE.captures(trimmed).map(|caps| to_active(&caps))
}

fn to_passive(caps: &Captures<'_>) -> String {
    let det = &caps["det"];
    let obj = &caps["obj"];
    format!(
        "{} {} {} {} by {}{}",
        capitalize_first(&det.to_lowercase()),
        obj,
        passive_auxiliary(det, obj),
        caps["verb"].to_lowercase(),
        object_pronoun(&caps["subj"]),
        &caps["term"],
    )
}

fn to_active(caps: &Captures<'_>) -> String {
    format!(
        "{} {} {} {}{}",
        subject_pronoun(&caps["agent"]),
        caps["verb"].to_lowercase(),
        caps["det"].to_lowercase(),
        &caps["obj"],
        &caps["term"],
    )
}

/// Phrases treated as an existing connective at the start of a sentence.
const KNOWN_CONNECTIVES: &[&str] = &[
    "additionally",
    "also",
    "besides",
    "consequently",
    "furthermore",
    "however",
    "in addition",
    "interestingly",
    "it is worth noting",
    "meanwhile",
    "moreover",
    "notably",
    "on top of that",
    "plus",
    "remarkably",
    "still",
    "therefore",
    "thus",
    "what's more",
];

pub fn starts_with_connective(sentence: &str) -> bool {
    let lowered = sentence.trim_start().to_lowercase();
    KNOWN_CONNECTIVES.iter().any(|c| {
        lowered
            .strip_prefix(c)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with([',', ' ']))
    })
}

/// Prefix `sentence` with `connective`, lower-casing a common opening word.
pub fn insert_connective(sentence: &str, connective: &str) -> Option<String> {
    let trimmed = sentence.trim_start();
    if trimmed.is_empty() || starts_with_connective(trimmed) {
        return None;
    }
    Some(format!("{} {}", connective.trim(), lowercase_first(trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverts_two_clause_sentences() {
        assert_eq!(
            invert_clauses("When it rains, we stay inside.").as_deref(),
            Some("We stay inside, when it rains.")
        );
        assert_eq!(invert_clauses("Yes, we can."), None);
        assert_eq!(invert_clauses("One, two, three and four."), None);
        assert_eq!(invert_clauses("No comma here at all."), None);
    }

    #[test]
    fn voice_flips_both_ways() {
        let passive = flip_voice("They painted the fence.").unwrap();
        assert_eq!(passive, "The fence was painted by them.");
        assert_eq!(flip_voice(&passive).as_deref(), Some("They painted the fence."));

        assert_eq!(
            flip_voice("We delivered these boxes!").as_deref(),
            Some("These boxes were delivered by us!")
        );
        assert_eq!(flip_voice("I wanted to leave."), None);
    }

    #[test]
    fn connective_rules() {
        let s = "The results were quite clear.";
        assert!(Structural::InsertConnective.matches(s, 1));
        assert!(!Structural::InsertConnective.matches(s, 0));
        assert!(!Structural::InsertConnective.matches("Too short here.", 2));
        assert!(!Structural::InsertConnective.matches("However, the results were clear.", 1));
        assert_eq!(
            insert_connective(s, "Moreover,").as_deref(),
            Some("Moreover, the results were quite clear.")
        );
        assert_eq!(Structural::InsertConnective.rewrite(s, None), None);
    }

    #[test]
    fn connective_prefix_detection_needs_word_boundary() {
        assert!(starts_with_connective("Also the cat"));
        assert!(!starts_with_connective("Almost there"));
        assert!(!starts_with_connective("Plush toys are soft"));
    }
}
