use rand::seq::IndexedRandom;
use rand::Rng;
use regex::{Captures, Regex};

use crate::case::match_case;
use crate::error::RuleError;
use crate::structural::Structural;
use crate::style::Style;

/// How a rule recognises the text it rewrites.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// A lowercase word or phrase matched case-insensitively on word
    /// boundaries.
    Literal(String),
    /// A regular expression; replacements are expansion templates (`$1`).
    Pattern(Regex),
    /// A sentence-level rewrite.
    Structural(Structural),
}

/// Rank used to order candidates; lower ranks are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    Exact,
    Pattern,
    Structural,
}

/// One rewrite rule with its per-style alternatives.
///
/// A style without a replacement list is not eligible for the rule. Structural
/// rules may carry an empty list for a style, meaning "eligible, no phrase
/// needed".
#[derive(Debug, Clone)]
pub struct RuleEntry {
    id: String,
    trigger: Trigger,
    matcher: Option<Regex>,
    replacements: Vec<(Style, Vec<String>)>,
}

impl RuleEntry {
    /// Literal word or phrase rule.
    pub fn literal<I, C, S>(id: impl Into<String>, phrase: &str, replacements: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (Style, C)>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return Err(RuleError::EmptyTrigger(id));
        }
        let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
        let matcher = Regex::new(&format!(r"(?i)\b{}\b", words.join(r"\s+")))
            .map_err(|source| RuleError::InvalidPattern { id: id.clone(), source })?;
        Self::checked(id, Trigger::Literal(phrase), Some(matcher), replacements)
    }

    /// Regex rule; each replacement is an expansion template.
    pub fn pattern<I, C, S>(id: impl Into<String>, pattern: &str, replacements: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (Style, C)>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        let regex = Regex::new(pattern)
            .map_err(|source| RuleError::InvalidPattern { id: id.clone(), source })?;
        Self::checked(id, Trigger::Pattern(regex), None, replacements)
    }

    pub fn structural<I, C, S>(
        id: impl Into<String>,
        kind: Structural,
        replacements: I,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (Style, C)>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::checked(id.into(), Trigger::Structural(kind), None, replacements)
    }

    fn checked<I, C, S>(
        id: String,
        trigger: Trigger,
        matcher: Option<Regex>,
        replacements: I,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (Style, C)>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let needs_text = !matches!(trigger, Trigger::Structural(_));
        let mut lists: Vec<(Style, Vec<String>)> = Vec::new();
        for (style, choices) in replacements {
            let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
            if needs_text && choices.is_empty() {
                return Err(RuleError::EmptyReplacements { id, style });
            }
            match lists.iter_mut().find(|(s, _)| *s == style) {
                Some((_, existing)) => existing.extend(choices),
                None => lists.push((style, choices)),
            }
        }
        Ok(Self {
            id,
            trigger,
            matcher,
            replacements: lists,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn specificity(&self) -> Specificity {
        match self.trigger {
            Trigger::Literal(_) => Specificity::Exact,
            Trigger::Pattern(_) => Specificity::Pattern,
            Trigger::Structural(_) => Specificity::Structural,
        }
    }

    /// Single-word literal trigger, used for the word index.
    pub fn literal_word(&self) -> Option<&str> {
        match &self.trigger {
            Trigger::Literal(phrase) if !phrase.contains(' ') => Some(phrase),
            _ => None,
        }
    }

    pub fn replacements_for(&self, style: Style) -> Option<&[String]> {
        self.replacements
            .iter()
            .find(|(s, _)| *s == style)
            .map(|(_, list)| list.as_slice())
    }

    pub fn supports(&self, style: Style) -> bool {
        self.replacements_for(style).is_some()
    }

    /// Whether the trigger occurs in `text`. `index` is the unit position,
    /// consulted by structural rules.
    pub fn matches(&self, text: &str, index: usize) -> bool {
        match &self.trigger {
            Trigger::Literal(_) => self.matcher.as_ref().is_some_and(|m| m.is_match(text)),
            Trigger::Pattern(regex) => regex.is_match(text),
            Trigger::Structural(kind) => kind.matches(text, index),
        }
    }

    /// Rewrite `text` with one randomly chosen alternative for `style`.
    ///
    /// Returns `None` when the style is not eligible or the rewrite leaves
    /// the text unchanged.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        text: &str,
        style: Style,
        maintain_case: bool,
        rng: &mut R,
    ) -> Option<String> {
        let choices = self.replacements_for(style)?;
        let cased = |original: &str, replacement: &str| {
            if maintain_case {
                match_case(original, replacement)
            } else {
                replacement.to_string()
            }
        };

        let rewritten = match &self.trigger {
            Trigger::Literal(_) => {
                let replacement = choices.choose(rng)?;
                self.matcher
                    .as_ref()?
                    .replace_all(text, |caps: &Captures<'_>| cased(&caps[0], replacement))
                    .into_owned()
            }
            Trigger::Pattern(regex) => {
                let template = choices.choose(rng)?;
                regex
                    .replace_all(text, |caps: &Captures<'_>| {
                        let mut expanded = String::new();
                        caps.expand(template, &mut expanded);
                        cased(&caps[0], &expanded)
                    })
                    .into_owned()
            }
            Trigger::Structural(kind) => {
                let phrase = choices.choose(rng).map(String::as_str);
                kind.rewrite(text, phrase)?
            }
        };
        (rewritten != text).then_some(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn literal_keeps_case_and_punctuation() {
        let rule = RuleEntry::literal("hello", "hello", [(Style::Formal, ["greetings"])]).unwrap();
        let out = rule.apply("Hello, world", Style::Formal, true, &mut rng());
        assert_eq!(out.as_deref(), Some("Greetings, world"));
        let out = rule.apply("HELLO!", Style::Formal, true, &mut rng());
        assert_eq!(out.as_deref(), Some("GREETINGS!"));
        assert_eq!(rule.apply("Hello", Style::Casual, true, &mut rng()), None);
    }

    #[test]
    fn literal_matches_whole_words_only() {
        let rule = RuleEntry::literal("use", "use", [(Style::Formal, ["employ"])]).unwrap();
        assert!(!rule.matches("because users", 0));
        assert!(rule.matches("we use it", 0));
    }

    #[test]
    fn phrase_literal_spans_whitespace() {
        let rule =
            RuleEntry::literal("in-order-to", "in order to", [(Style::Simplified, ["to"])]).unwrap();
        let out = rule.apply("We left in  order to rest.", Style::Simplified, true, &mut rng());
        assert_eq!(out.as_deref(), Some("We left to rest."));
        assert_eq!(rule.literal_word(), None);
    }

    #[test]
    fn pattern_templates_expand_groups() {
        let rule = RuleEntry::pattern(
            "expand-nt",
            r"(?i)\b(do|does|did)n't\b",
            [(Style::Formal, ["$1 not"])],
        )
        .unwrap();
        let out = rule.apply("Don't stop, it doesn't hurt", Style::Formal, true, &mut rng());
        assert_eq!(out.as_deref(), Some("Do not stop, it does not hurt"));
        assert_eq!(rule.specificity(), Specificity::Pattern);
    }

    #[test]
    fn case_matching_can_be_disabled() {
        let rule = RuleEntry::literal("big", "big", [(Style::Standard, ["large"])]).unwrap();
        let out = rule.apply("BIG", Style::Standard, false, &mut rng());
        assert_eq!(out.as_deref(), Some("large"));
    }

    #[test]
    fn invalid_definitions_are_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            RuleEntry::literal("x", "  ", [(Style::Formal, ["y"])]),
            Err(RuleError::EmptyTrigger(_))
        ));
        assert!(matches!(
            RuleEntry::literal("x", "x", [(Style::Formal, empty)]),
            Err(RuleError::EmptyReplacements { .. })
        ));
        assert!(matches!(
            RuleEntry::pattern("x", "(", [(Style::Formal, ["y"])]),
            Err(RuleError::InvalidPattern { .. })
        ));
        assert!(RuleEntry::structural("inv", Structural::InvertClauses, [(Style::Formal, empty)]).is_ok());
    }
}
