use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use rand::Rng;
use segment::{Granularity, TextUnit};

use crate::builtin;
use crate::case::split_affixes;
use crate::entry::{RuleEntry, Trigger};
use crate::error::RuleError;
use crate::style::Style;

static BUILTIN: Lazy<RuleTable> =
    Lazy::new(|| builtin::builtin_table().expect("built-in rule definitions are valid"));

/// The shared built-in rule table. Built once, read-only afterwards.
pub fn rule_table() -> &'static RuleTable {
    &BUILTIN
}

/// Immutable set of rules with a lowercase word index for fast word lookup.
#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
    by_word: FxHashMap<String, Vec<usize>>,
    by_id: FxHashMap<String, usize>,
}

impl RuleTable {
    pub fn new(entries: Vec<RuleEntry>) -> Result<Self, RuleError> {
        let mut by_word: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut by_id = FxHashMap::default();
        for (idx, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id().to_string(), idx).is_some() {
                return Err(RuleError::DuplicateId(entry.id().to_string()));
            }
            if let Some(word) = entry.literal_word() {
                by_word.entry(word.to_string()).or_default().push(idx);
            }
        }
        Ok(Self {
            entries,
            by_word,
            by_id,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&RuleEntry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// Rules that can rewrite `unit` in `style`, most specific first.
    ///
    /// Exact literal matches rank before pattern matches, which rank before
    /// structural rewrites. Character units never have candidates.
    pub fn lookup(&self, unit: &TextUnit, style: Style) -> Vec<&RuleEntry> {
        self.lookup_text(&unit.text, unit.index, unit.granularity, style)
    }

    pub fn lookup_text(
        &self,
        text: &str,
        index: usize,
        granularity: Granularity,
        style: Style,
    ) -> Vec<&RuleEntry> {
        let mut found: Vec<&RuleEntry> = match granularity {
            Granularity::Character => return Vec::new(),
            Granularity::Word => self.word_candidates(text, style),
            Granularity::Sentence | Granularity::Paragraph => self
                .entries
                .iter()
                .filter(|entry| entry.supports(style))
                .filter(|entry| match entry.trigger() {
                    Trigger::Structural(_) => granularity == Granularity::Sentence,
                    _ => true,
                })
                .filter(|entry| entry.matches(text, index))
                .collect(),
        };
        found.sort_by_key(|entry| entry.specificity());
        found
    }

    fn word_candidates(&self, token: &str, style: Style) -> Vec<&RuleEntry> {
        let (_, core, _) = split_affixes(token);
        if core.is_empty() {
            return Vec::new();
        }
        let mut found: Vec<&RuleEntry> = self
            .by_word
            .get(&core.to_lowercase())
            .into_iter()
            .flatten()
            .map(|&idx| &self.entries[idx])
            .filter(|entry| entry.supports(style))
            .collect();
        found.extend(self.entries.iter().filter(|entry| {
            matches!(entry.trigger(), Trigger::Pattern(_))
                && entry.supports(style)
                && entry.matches(core, 0)
        }));
        found
    }
}

/// Pick uniformly among the top-ranked candidates of a sorted lookup result.
pub fn choose_rule<'a, R: Rng + ?Sized>(
    candidates: &[&'a RuleEntry],
    rng: &mut R,
) -> Option<&'a RuleEntry> {
    let best = candidates.first()?.specificity();
    let ties = candidates
        .iter()
        .take_while(|entry| entry.specificity() == best)
        .count();
    candidates[..ties].choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Specificity;
    use crate::structural::Structural;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use segment::segment;

    fn word(text: &str) -> TextUnit {
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
    fn word_lookup_ignores_case_and_punctuation() {
        let table = rule_table();
        let hits = table.lookup(&word("\"Hello!\""), Style::Formal);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].specificity(), Specificity::Exact);
    }

    #[test]
    fn unknown_words_and_characters_have_no_candidates() {
        let table = rule_table();
        assert!(table.lookup(&word("zyxwvut"), Style::Formal).is_empty());
        let chars = segment("good", Granularity::Character);
        assert!(table.lookup(&chars.units[0], Style::Formal).is_empty());
    }

    #[test]
    fn results_are_ranked_by_specificity() {
        let table = rule_table();
        let seg = segment(
            "We did this. However, I can't say it was good, it was fine.",
            Granularity::Sentence,
        );
        let hits = table.lookup(&seg.units[1], Style::Formal);
        assert!(hits.len() >= 2);
        for pair in hits.windows(2) {
            assert!(pair[0].specificity() <= pair[1].specificity());
        }
    }

    #[test]
    fn structural_rules_only_on_sentences() {
        let table = RuleTable::new(vec![RuleEntry::structural(
            "invert",
            Structural::InvertClauses,
            [(Style::Standard, Vec::<String>::new())],
        )
        .unwrap()])
        .unwrap();
        let text = "When it rains, we stay inside.";
        assert_eq!(
            table
                .lookup_text(text, 0, Granularity::Sentence, Style::Standard)
                .len(),
            1
        );
        assert!(table
            .lookup_text(text, 0, Granularity::Paragraph, Style::Standard)
            .is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let make = || RuleEntry::literal("dup", "cat", [(Style::Casual, ["kitty"])]).unwrap();
        assert!(matches!(
            RuleTable::new(vec![make(), make()]),
            Err(RuleError::DuplicateId(_))
        ));
    }

    #[test]
    fn choose_rule_only_picks_top_rank() {
        let table = RuleTable::new(vec![
            RuleEntry::literal("a", "fast", [(Style::Standard, ["quick"])]).unwrap(),
            RuleEntry::literal("b", "fast", [(Style::Standard, ["rapid"])]).unwrap(),
            RuleEntry::pattern("c", r"(?i)\bfast\b", [(Style::Standard, ["speedy"])]).unwrap(),
        ])
        .unwrap();
        let hits = table.lookup(&word("fast"), Style::Standard);
        assert_eq!(hits.len(), 3);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..32 {
            let pick = choose_rule(&hits, &mut rng).unwrap();
            assert_ne!(pick.id(), "c");
        }
        assert!(choose_rule(&[], &mut rng).is_none());
    }
}
