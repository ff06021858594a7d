use retext::{
    Intensity, PipelineError, RetextConfig, ReverseOptions, RewriteOptions, SimilarityMethod,
    Style, TransformConfig, estimate_similarity, humanize, rewrite, run_reversal, run_transform,
};

const SAMPLE: &str = include_str!("../crates/transform/examples/sample.txt");

#[test]
fn sample_article_rewrite_integration() -> Result<(), PipelineError> {
    let opts = RewriteOptions::default()
        .with_style(Style::Formal)
        .with_intensity(Intensity::Significant)
        .with_seed(2024);

    let result = rewrite(SAMPLE, &opts)?;

    assert!(result.applied_rule_count > 0, "rules should fire on the sample");
    assert_ne!(result.output_text, SAMPLE);
    assert!((0.0..=1.0).contains(&result.similarity_score));
    assert_eq!(result.original_chars, SAMPLE.chars().count());
    assert_eq!(result.output_chars, result.output_text.chars().count());
    assert_eq!(
        result.output_text.matches("\n\n").count(),
        SAMPLE.matches("\n\n").count(),
        "paragraph breaks should survive both passes"
    );

    Ok(())
}

#[test]
fn fixed_seed_runs_are_reproducible() -> Result<(), PipelineError> {
    let cfg = TransformConfig::default()
        .with_style(Style::Creative)
        .with_intensity(Intensity::Level(70));

    let a = run_transform(SAMPLE, &cfg, Some(99))?;
    let b = run_transform(SAMPLE, &cfg, Some(99))?;
    assert_eq!(a, b);

    let humanized_a = humanize(SAMPLE, Intensity::Moderate, Some(5))?;
    let humanized_b = humanize(SAMPLE, Intensity::Moderate, Some(5))?;
    assert_eq!(humanized_a.output_text, humanized_b.output_text);

    Ok(())
}

#[test]
fn zero_intensity_leaves_sample_untouched() -> Result<(), PipelineError> {
    let cfg = TransformConfig::default().with_intensity(Intensity::Level(0));
    let result = run_transform(SAMPLE, &cfg, None)?;
    assert_eq!(result.output_text, SAMPLE);
    assert_eq!(result.similarity_score, 1.0);
    assert!(!result.is_sufficiently_unique);
    Ok(())
}

#[test]
fn reversal_round_trips_through_the_pipeline() -> Result<(), PipelineError> {
    let opts = ReverseOptions::default().with_preserve_paragraphs(true);
    let once = run_reversal(SAMPLE, "sentence", &opts)?;
    assert_ne!(once, SAMPLE);
    assert_eq!(run_reversal(&once, "sentences", &opts)?, SAMPLE);
    Ok(())
}

#[test]
fn unknown_reversal_mode_is_invalid_config() {
    let err = run_reversal("abc", "backwards", &ReverseOptions::default()).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidConfig(_)));
    assert!(err.to_string().contains("backwards"));
}

#[test]
fn similarity_methods_agree_on_identity() {
    for method in [
        SimilarityMethod::Jaccard,
        SimilarityMethod::Levenshtein,
        SimilarityMethod::Shingle,
    ] {
        assert_eq!(estimate_similarity(SAMPLE, SAMPLE, method), 1.0, "{method}");
    }
}

#[test]
fn yaml_config_drives_a_transform() -> Result<(), Box<dyn std::error::Error>> {
    let config = RetextConfig::from_yaml(
        r#"
version: "1.0"
transform:
  style: formal
  intensity: 100
  seed: 11
"#,
    )?;
    let cfg = config.transform.to_transform_config();
    let result = run_transform("hello world", &cfg, config.transform.seed)?;
    assert_eq!(result.output_text, "greetings world");
    Ok(())
}
