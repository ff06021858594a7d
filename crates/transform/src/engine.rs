use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rules::{choose_rule, rule_table, RuleTable};
use segment::{is_blank, segment, Granularity, TextUnit};
use similarity::{Estimate, SimilarityEstimator};
use tracing::{debug, warn};

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::result::{AppliedRule, TransformResult};

/// Applies rules from a [`RuleTable`] to text under a [`TransformConfig`].
///
/// The engine holds no per-run state; a single instance can serve concurrent
/// calls. Randomness is injected per call so runs are reproducible.
#[derive(Debug, Clone)]
pub struct TransformEngine<'t> {
    table: &'t RuleTable,
    estimator: SimilarityEstimator,
}

impl Default for TransformEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine<'static> {
    /// Engine over the built-in rule table.
    pub fn new() -> Self {
        Self::with_table(rule_table())
    }
}

impl<'t> TransformEngine<'t> {
    pub fn with_table(table: &'t RuleTable) -> Self {
        Self {
            table,
            estimator: SimilarityEstimator::default(),
        }
    }

    pub fn with_estimator(mut self, estimator: SimilarityEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn table(&self) -> &RuleTable {
        self.table
    }

    pub fn estimator(&self) -> &SimilarityEstimator {
        &self.estimator
    }

    /// Transform with an RNG seeded from `seed`, or from the OS when `None`.
    pub fn transform_seeded(
        &self,
        text: &str,
        cfg: &TransformConfig,
        seed: Option<u64>,
    ) -> Result<TransformResult, TransformError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.transform(text, cfg, &mut rng)
    }

    /// Rewrite `text` unit by unit.
    ///
    /// Each unit with at least one candidate rule is rewritten with
    /// probability `cfg.intensity.probability()`. When no rule fires the
    /// output is `text` byte for byte.
    pub fn transform<R: Rng + ?Sized>(
        &self,
        text: &str,
        cfg: &TransformConfig,
        rng: &mut R,
    ) -> Result<TransformResult, TransformError> {
        cfg.validate()?;
        let span = tracing::debug_span!(
            "transform",
            style = %cfg.style,
            intensity = %cfg.intensity,
            granularity = %cfg.granularity,
            input_chars = text.chars().count(),
        );
        let _guard = span.enter();

        let mut applied = Vec::new();
        let rewritten = if is_blank(text) {
            None
        } else if cfg.splits_paragraphs() {
            let paragraphs = segment(text, Granularity::Paragraph);
            let texts: Vec<String> = paragraphs
                .iter()
                .map(|para| self.rewrite_span(&para.text, Some(para.index), cfg, rng, &mut applied))
                .collect();
            Some(paragraphs.assemble(&texts, true))
        } else {
            Some(self.rewrite_span(text, None, cfg, rng, &mut applied))
        };

        let output_text = match rewritten {
            Some(out) if !applied.is_empty() => out,
            _ => text.to_string(),
        };

        let estimate = self.score(text, &output_text, cfg);
        debug!(
            applied = applied.len(),
            similarity = estimate.score,
            method = %estimate.method,
            "transform_complete"
        );

        Ok(TransformResult {
            applied_rule_count: applied.len(),
            applied_rules: applied,
            similarity_score: estimate.score,
            similarity_method: estimate.method,
            is_sufficiently_unique: estimate.score < cfg.uniqueness_threshold,
            original_chars: text.chars().count(),
            output_chars: output_text.chars().count(),
            output_text,
        })
    }

    fn score(&self, original: &str, output: &str, cfg: &TransformConfig) -> Estimate {
        let estimate = self
            .estimator
            .estimate_or_fallback(original, output, cfg.similarity_method);
        if estimate.method != cfg.similarity_method {
            warn!(
                requested = %cfg.similarity_method,
                used = %estimate.method,
                max_chars = self.estimator.config().max_edit_distance_chars,
                "similarity_fallback"
            );
        }
        estimate
    }

    fn rewrite_span<R: Rng + ?Sized>(
        &self,
        text: &str,
        paragraph: Option<usize>,
        cfg: &TransformConfig,
        rng: &mut R,
        applied: &mut Vec<AppliedRule>,
    ) -> String {
        let seg = segment(text, cfg.granularity);
        let p = cfg.intensity.probability().clamp(0.0, 1.0);
        let mut texts: Vec<String> = Vec::with_capacity(seg.len());
        for unit in &seg {
            match self.rewrite_unit(unit, cfg, p, rng) {
                Some((rule_id, after)) => {
                    applied.push(AppliedRule {
                        rule_id,
                        paragraph,
                        unit_index: unit.index,
                        before: unit.text.clone(),
                        after: after.clone(),
                    });
                    texts.push(after);
                }
                None => texts.push(unit.text.clone()),
            }
        }
        seg.assemble(&texts, cfg.preserve_spaces)
    }

    fn rewrite_unit<R: Rng + ?Sized>(
        &self,
        unit: &TextUnit,
        cfg: &TransformConfig,
        p: f64,
        rng: &mut R,
    ) -> Option<(String, String)> {
        let protected = cfg.preserve_numbers
            && unit.has_digits()
            && matches!(unit.granularity, Granularity::Character | Granularity::Word);
        if protected {
            return None;
        }
        let candidates = self.table.lookup(unit, cfg.style);
        if candidates.is_empty() || !rng.random_bool(p) {
            return None;
        }
        let rule = choose_rule(&candidates, rng)?;
        let after = rule.apply(&unit.text, cfg.style, cfg.maintain_case, rng)?;
        Some((rule.id().to_string(), after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::{Intensity, RuleEntry, Style};
    use similarity::{SimilarityConfig, SimilarityMethod};

    fn always(style: Style) -> TransformConfig {
        TransformConfig::default()
            .with_style(style)
            .with_intensity(Intensity::Level(100))
    }

    #[test]
    fn blank_input_is_returned_unchanged() {
        let engine = TransformEngine::new();
        let res = engine.transform_seeded("  \n ", &always(Style::Formal), Some(1)).unwrap();
        assert_eq!(res.output_text, "  \n ");
        assert_eq!(res.applied_rule_count, 0);
        assert_eq!(res.similarity_score, 1.0);
    }

    #[test]
    fn invalid_config_is_reported() {
        let engine = TransformEngine::new();
        let cfg = TransformConfig::default().with_uniqueness_threshold(2.0);
        assert!(engine.transform_seeded("text", &cfg, Some(0)).is_err());
    }

    #[test]
    fn rules_record_unit_positions() {
        let table = RuleTable::new(vec![
            RuleEntry::literal("cat", "cat", [(Style::Casual, ["kitty"])]).unwrap(),
        ])
        .unwrap();
        let engine = TransformEngine::with_table(&table);
        let res = engine
            .transform_seeded("The cat sat.", &always(Style::Casual), Some(9))
            .unwrap();
        assert_eq!(res.output_text, "The kitty sat.");
        assert_eq!(res.applied_rules.len(), 1);
        let rule = &res.applied_rules[0];
        assert_eq!((rule.rule_id.as_str(), rule.unit_index), ("cat", 1));
        assert_eq!(rule.paragraph, Some(0));
        assert_eq!((rule.before.as_str(), rule.after.as_str()), ("cat", "kitty"));
    }

    #[test]
    fn protected_numbers_are_skipped() {
        let table = RuleTable::new(vec![
            RuleEntry::pattern("digits", r"\d+", [(Style::Standard, ["N"])]).unwrap(),
        ])
        .unwrap();
        let engine = TransformEngine::with_table(&table);
        let cfg = always(Style::Standard);
        let kept = engine.transform_seeded("call 555 now", &cfg, Some(2)).unwrap();
        assert_eq!(kept.output_text, "call 555 now");

        let cfg = cfg.with_preserve_numbers(false);
        let changed = engine.transform_seeded("call 555 now", &cfg, Some(2)).unwrap();
        assert_eq!(changed.output_text, "call N now");
    }

    #[test]
    fn levenshtein_over_cap_falls_back() {
        let estimator =
            SimilarityEstimator::new(SimilarityConfig::default().with_max_edit_distance_chars(4))
                .unwrap();
        let engine = TransformEngine::new().with_estimator(estimator);
        let cfg = TransformConfig::default()
            .with_intensity(Intensity::Level(0))
            .with_similarity_method(SimilarityMethod::Levenshtein);
        let res = engine.transform_seeded("long enough text", &cfg, Some(0)).unwrap();
        assert_eq!(res.similarity_method, SimilarityMethod::Jaccard);
        assert_eq!(res.similarity_score, 1.0);
    }

    #[test]
    fn uniqueness_uses_threshold() {
        let table = RuleTable::new(vec![
            RuleEntry::literal("a", "alpha", [(Style::Standard, ["one"])]).unwrap(),
            RuleEntry::literal("b", "beta", [(Style::Standard, ["two"])]).unwrap(),
        ])
        .unwrap();
        let engine = TransformEngine::with_table(&table);
        let res = engine
            .transform_seeded("alpha beta", &always(Style::Standard), Some(4))
            .unwrap();
        assert_eq!(res.output_text, "one two");
        assert_eq!(res.similarity_score, 0.0);
        assert!(res.is_sufficiently_unique);
    }
}
