//! Workspace umbrella crate for retext.
//!
//! This crate stitches together segmentation, the rule table, the transform
//! engine and the similarity estimator so callers (the CLI, the HTTP server,
//! embedding applications) can drive every text tool through one API.

mod config;

pub use config::{
    ConfigLoadError, RetextConfig, ReverseSection, SimilaritySection, TransformSection,
};
pub use rules::{Intensity, IntensityError, ParseStyleError, RuleEntry, RuleTable, Style, rule_table};
pub use segment::{Granularity, ParseGranularityError, Segmentation, TextUnit, segment};
pub use similarity::{
    Estimate, SimilarityConfig, SimilarityError, SimilarityEstimator, SimilarityMethod,
};
pub use transform::{
    AppliedRule, ReverseOptions, TransformConfig, TransformEngine, TransformError,
    TransformResult, reverse,
};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};
use tracing::debug;

/// Errors that can occur while running a text tool through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    InvalidConfig(String),
    Transform(TransformError),
    Similarity(SimilarityError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            PipelineError::Transform(err) => write!(f, "transform failure: {err}"),
            PipelineError::Similarity(err) => write!(f, "similarity estimation failed: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Transform(err) => Some(err),
            PipelineError::Similarity(err) => Some(err),
            PipelineError::InvalidConfig(_) => None,
        }
    }
}

impl From<TransformError> for PipelineError {
    fn from(value: TransformError) -> Self {
        PipelineError::Transform(value)
    }
}

impl From<SimilarityError> for PipelineError {
    fn from(value: SimilarityError) -> Self {
        PipelineError::Similarity(value)
    }
}

impl From<ParseGranularityError> for PipelineError {
    fn from(value: ParseGranularityError) -> Self {
        PipelineError::InvalidConfig(value.to_string())
    }
}

/// Metrics observer for pipeline calls.
pub trait PipelineMetrics: Send + Sync {
    fn record_transform(&self, latency: Duration, result: Result<(), PipelineError>);
    fn record_reversal(&self, latency: Duration, result: Result<(), PipelineError>);
    fn record_similarity(&self, latency: Duration, result: Result<(), SimilarityError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_transform(self, result: Result<(), PipelineError>) {
        self.recorder.record_transform(self.start.elapsed(), result);
    }

    fn record_reversal(self, result: Result<(), PipelineError>) {
        self.recorder.record_reversal(self.start.elapsed(), result);
    }

    fn record_similarity(self, result: Result<(), SimilarityError>) {
        self.recorder
            .record_similarity(self.start.elapsed(), result);
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Rewrite `text` with the built-in rule table.
///
/// A fixed `seed` makes the run reproducible; `None` draws one from the OS.
pub fn run_transform(
    text: &str,
    cfg: &TransformConfig,
    seed: Option<u64>,
) -> Result<TransformResult, PipelineError> {
    let mut metrics = MetricsSpan::start();
    match TransformEngine::new().transform_seeded(text, cfg, seed) {
        Ok(result) => {
            if let Some(span) = metrics.take() {
                span.record_transform(Ok(()));
            }
            Ok(result)
        }
        Err(err) => {
            let pipeline_err = PipelineError::Transform(err);
            if let Some(span) = metrics.take() {
                span.record_transform(Err(pipeline_err.clone()));
            }
            Err(pipeline_err)
        }
    }
}

/// Reverse `text` at the granularity named by `mode` (`"word"`, `"sentences"`, ...).
///
/// An unknown mode yields [`PipelineError::InvalidConfig`].
pub fn run_reversal(
    text: &str,
    mode: &str,
    opts: &ReverseOptions,
) -> Result<String, PipelineError> {
    let mut metrics = MetricsSpan::start();
    match mode.parse::<Granularity>() {
        Ok(granularity) => {
            let reversed = reverse(text, granularity, opts);
            if let Some(span) = metrics.take() {
                span.record_reversal(Ok(()));
            }
            debug!(mode = %granularity, chars = reversed.chars().count(), "reversal_complete");
            Ok(reversed)
        }
        Err(err) => {
            let pipeline_err = PipelineError::from(err);
            if let Some(span) = metrics.take() {
                span.record_reversal(Err(pipeline_err.clone()));
            }
            Err(pipeline_err)
        }
    }
}

/// Score `a` against `b`, falling back to Jaccard when the requested method
/// refuses the input.
pub fn estimate_similarity(a: &str, b: &str, method: SimilarityMethod) -> f64 {
    estimate_similarity_with(&SimilarityEstimator::default(), a, b, method).score
}

/// Like [`estimate_similarity`], with an explicit estimator, reporting the
/// method actually used.
pub fn estimate_similarity_with(
    estimator: &SimilarityEstimator,
    a: &str,
    b: &str,
    method: SimilarityMethod,
) -> Estimate {
    let mut metrics = MetricsSpan::start();
    let strict = estimator.estimate(a, b, method);
    if let Some(span) = metrics.take() {
        span.record_similarity(strict.as_ref().map(|_| ()).map_err(Clone::clone));
    }
    match strict {
        Ok(score) => Estimate { score, method },
        Err(err) => {
            let fallback = estimator.estimate_or_fallback(a, b, method);
            tracing::warn!(
                requested = %method,
                used = %fallback.method,
                error = %err,
                "similarity_fallback"
            );
            fallback
        }
    }
}

/// Score `a` against `b` without fallback.
pub fn try_estimate_similarity(
    a: &str,
    b: &str,
    method: SimilarityMethod,
) -> Result<f64, PipelineError> {
    let mut metrics = MetricsSpan::start();
    let result = SimilarityEstimator::default().estimate(a, b, method);
    if let Some(span) = metrics.take() {
        span.record_similarity(result.as_ref().map(|_| ()).map_err(Clone::clone));
    }
    Ok(result?)
}

/// Options for the multi-pass [`rewrite`] preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteOptions {
    pub style: Style,
    pub intensity: Intensity,
    pub seed: Option<u64>,
    pub preserve_spaces: bool,
    pub maintain_case: bool,
    pub preserve_numbers: bool,
    pub uniqueness_threshold: f64,
    pub similarity_method: SimilarityMethod,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        let base = TransformConfig::default();
        Self {
            style: base.style,
            intensity: base.intensity,
            seed: None,
            preserve_spaces: base.preserve_spaces,
            maintain_case: base.maintain_case,
            preserve_numbers: base.preserve_numbers,
            uniqueness_threshold: base.uniqueness_threshold,
            similarity_method: base.similarity_method,
        }
    }
}

impl RewriteOptions {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn pass(&self, granularity: Granularity) -> TransformConfig {
        TransformConfig::default()
            .with_style(self.style)
            .with_intensity(self.intensity)
            .with_granularity(granularity)
            .with_preserve_spaces(self.preserve_spaces)
            .with_maintain_case(self.maintain_case)
            .with_preserve_numbers(self.preserve_numbers)
            .with_uniqueness_threshold(self.uniqueness_threshold)
            .with_similarity_method(self.similarity_method)
    }
}

/// Article and essay rewriter: a word pass followed by a sentence pass, both
/// in the same style and intensity.
///
/// The returned similarity compares the original input with the final output.
pub fn rewrite(text: &str, opts: &RewriteOptions) -> Result<TransformResult, PipelineError> {
    let passes = [
        opts.pass(Granularity::Word),
        opts.pass(Granularity::Sentence),
    ];
    run_passes(text, &passes, opts.seed)
}

/// AI humanizer: casual style with contractions, a sentence pass followed by
/// a word pass.
pub fn humanize(
    text: &str,
    intensity: Intensity,
    seed: Option<u64>,
) -> Result<TransformResult, PipelineError> {
    let casual = RewriteOptions::default()
        .with_style(Style::Casual)
        .with_intensity(intensity);
    let passes = [
        casual.pass(Granularity::Sentence),
        casual.pass(Granularity::Word),
    ];
    run_passes(text, &passes, seed)
}

fn run_passes(
    text: &str,
    passes: &[TransformConfig],
    seed: Option<u64>,
) -> Result<TransformResult, PipelineError> {
    let mut metrics = MetricsSpan::start();
    let outcome = chain_passes(text, passes, seed);
    if let Some(span) = metrics.take() {
        span.record_transform(outcome.as_ref().map(|_| ()).map_err(Clone::clone));
    }
    outcome
}

fn chain_passes(
    text: &str,
    passes: &[TransformConfig],
    seed: Option<u64>,
) -> Result<TransformResult, PipelineError> {
    let Some(last) = passes.last() else {
        return Err(PipelineError::InvalidConfig(
            "at least one pass is required".into(),
        ));
    };
    let engine = TransformEngine::new();
    let mut rng = seeded_rng(seed);
    let mut current = text.to_string();
    let mut applied = Vec::new();
    for cfg in passes {
        let pass = engine.transform(&current, cfg, &mut rng)?;
        applied.extend(pass.applied_rules);
        current = pass.output_text;
    }

    let estimate = engine
        .estimator()
        .estimate_or_fallback(text, &current, last.similarity_method);
    if estimate.method != last.similarity_method {
        tracing::warn!(
            requested = %last.similarity_method,
            used = %estimate.method,
            "similarity_fallback"
        );
    }
    debug!(
        passes = passes.len(),
        applied = applied.len(),
        similarity = estimate.score,
        "multi_pass_complete"
    );
    Ok(TransformResult {
        applied_rule_count: applied.len(),
        applied_rules: applied,
        similarity_score: estimate.score,
        similarity_method: estimate.method,
        is_sufficiently_unique: estimate.score < last.uniqueness_threshold,
        original_chars: text.chars().count(),
        output_chars: current.chars().count(),
        output_text: current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex, RwLock};
    use std::thread::{self, ThreadId};
    use std::time::Duration;

    // The metrics recorder is process-global.
    static METRICS_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn run_transform_rewrites_known_words() {
        let cfg = TransformConfig::default()
            .with_style(Style::Formal)
            .with_intensity(Intensity::Level(100));
        let result = run_transform("Hello there", &cfg, Some(1)).expect("transform");
        assert_eq!(result.output_text, "Greetings there");
        assert_eq!(result.applied_rule_count, 1);
    }

    #[test]
    fn run_transform_rejects_bad_threshold() {
        let cfg = TransformConfig::default().with_uniqueness_threshold(-0.5);
        let err = run_transform("text", &cfg, Some(1)).unwrap_err();
        assert!(matches!(err, PipelineError::Transform(TransformError::InvalidConfig(_))));
    }

    #[test]
    fn run_reversal_parses_mode() {
        let opts = ReverseOptions::default();
        assert_eq!(
            run_reversal("Hello World 123", "words", &opts).unwrap(),
            "123 World Hello"
        );
        let err = run_reversal("text", "lines", &opts).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig(_)));
    }

    #[test]
    fn estimate_similarity_falls_back() {
        let long = "a".repeat(60_000);
        let score = estimate_similarity(&long, &long, SimilarityMethod::Levenshtein);
        assert_eq!(score, 1.0);
        assert!(matches!(
            try_estimate_similarity(&long, &long, SimilarityMethod::Levenshtein),
            Err(PipelineError::Similarity(SimilarityError::InputTooLarge { .. }))
        ));
    }

    #[test]
    fn rewrite_scores_against_original() {
        let opts = RewriteOptions::default()
            .with_style(Style::Formal)
            .with_intensity(Intensity::Level(100))
            .with_seed(3);
        let text = "Hello friend. We need a lot of help, but the plan is good.";
        let result = rewrite(text, &opts).expect("rewrite");
        assert!(result.applied_rule_count >= 2);
        assert_ne!(result.output_text, text);
        let direct = estimate_similarity(text, &result.output_text, SimilarityMethod::Jaccard);
        assert_eq!(result.similarity_score, direct);
    }

    #[test]
    fn rewrite_is_deterministic() {
        let opts = RewriteOptions::default()
            .with_intensity(Intensity::Significant)
            .with_seed(42);
        let text = "The big dog is very happy. It is a good day.";
        assert_eq!(rewrite(text, &opts).unwrap(), rewrite(text, &opts).unwrap());
    }

    #[test]
    fn humanize_contracts_formal_phrasing() {
        let result = humanize("I do not think it is ready.", Intensity::Level(100), Some(8))
            .expect("humanize");
        assert!(result.applied_rule_count >= 1);
        assert_ne!(result.output_text, "I do not think it is ready.");
    }

    #[test]
    fn humanize_zero_intensity_is_identity() {
        let text = "We do not know yet.";
        let result = humanize(text, Intensity::Level(0), Some(8)).unwrap();
        assert_eq!(result.output_text, text);
        assert!(result.is_unchanged());
    }

    // Only calls made on the creating thread are counted; other tests run
    // concurrently against the same global recorder.
    struct CountingMetrics {
        owner: ThreadId,
        events: Arc<RwLock<Vec<&'static str>>>,
    }

    impl CountingMetrics {
        fn new() -> Self {
            Self {
                owner: thread::current().id(),
                events: Arc::new(RwLock::new(Vec::new())),
            }
        }

        fn push(&self, label: &'static str) {
            if thread::current().id() == self.owner {
                self.events.write().unwrap().push(label);
            }
        }

        fn snapshot(&self) -> Vec<&'static str> {
            self.events.read().unwrap().clone()
        }
    }

    impl PipelineMetrics for CountingMetrics {
        fn record_transform(&self, _latency: Duration, result: Result<(), PipelineError>) {
            self.push(if result.is_ok() {
                "transform_ok"
            } else {
                "transform_err"
            });
        }

        fn record_reversal(&self, _latency: Duration, result: Result<(), PipelineError>) {
            self.push(if result.is_ok() {
                "reversal_ok"
            } else {
                "reversal_err"
            });
        }

        fn record_similarity(&self, _latency: Duration, result: Result<(), SimilarityError>) {
            self.push(if result.is_ok() {
                "similarity_ok"
            } else {
                "similarity_err"
            });
        }
    }

    #[test]
    fn metrics_recorder_tracks_pipeline_outcome() {
        let _guard = METRICS_GUARD.lock().unwrap_or_else(|p| p.into_inner());
        let metrics = Arc::new(CountingMetrics::new());
        set_pipeline_metrics(Some(metrics.clone()));

        let cfg = TransformConfig::default();
        assert!(run_transform("This is a metrics payload", &cfg, Some(0)).is_ok());
        assert!(run_reversal("a b", "word", &ReverseOptions::default()).is_ok());
        assert!(run_reversal("a b", "bogus", &ReverseOptions::default()).is_err());
        let _ = estimate_similarity("a b", "a c", SimilarityMethod::Jaccard);

        set_pipeline_metrics(None);

        let events = metrics.snapshot();
        assert!(events.contains(&"transform_ok"));
        assert!(events.contains(&"reversal_ok"));
        assert!(events.contains(&"reversal_err"));
        assert!(events.contains(&"similarity_ok"));
    }

    #[test]
    fn presets_record_one_transform_each() {
        let _guard = METRICS_GUARD.lock().unwrap_or_else(|p| p.into_inner());
        let metrics = Arc::new(CountingMetrics::new());
        set_pipeline_metrics(Some(metrics.clone()));

        let opts = RewriteOptions::default().with_seed(3);
        assert!(rewrite("We need a lot of help to start.", &opts).is_ok());
        assert!(humanize("I do not think it is ready.", Intensity::Significant, Some(3)).is_ok());

        set_pipeline_metrics(None);

        assert_eq!(metrics.snapshot(), vec!["transform_ok", "transform_ok"]);
    }
}
