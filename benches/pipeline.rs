use criterion::{Criterion, black_box, criterion_group, criterion_main};
use retext::{
    Granularity, Intensity, ReverseOptions, RewriteOptions, SimilarityMethod, Style,
    TransformConfig, TransformEngine, estimate_similarity, reverse, rewrite, segment,
};

const SAMPLE: &str = include_str!("../crates/transform/examples/sample.txt");

fn segment_bench(c: &mut Criterion) {
    for granularity in [Granularity::Word, Granularity::Sentence] {
        c.bench_function(&format!("segment_{granularity}"), |b| {
            b.iter(|| black_box(segment(black_box(SAMPLE), granularity)));
        });
    }
}

fn transform_bench(c: &mut Criterion) {
    let engine = TransformEngine::new();
    let cfg = TransformConfig::default()
        .with_style(Style::Formal)
        .with_intensity(Intensity::Significant);

    c.bench_function("transform_word_sample", |b| {
        b.iter(|| {
            let result = engine
                .transform_seeded(black_box(SAMPLE), &cfg, Some(7))
                .expect("bench transform");
            black_box(result);
        });
    });

    let sentence_cfg = cfg.with_granularity(Granularity::Sentence);
    c.bench_function("transform_sentence_sample", |b| {
        b.iter(|| {
            let result = engine
                .transform_seeded(black_box(SAMPLE), &sentence_cfg, Some(7))
                .expect("bench transform");
            black_box(result);
        });
    });
}

fn rewrite_bench(c: &mut Criterion) {
    let opts = RewriteOptions::default()
        .with_intensity(Intensity::Moderate)
        .with_seed(1);
    c.bench_function("rewrite_two_pass_sample", |b| {
        b.iter(|| black_box(rewrite(black_box(SAMPLE), &opts).expect("bench rewrite")));
    });
}

fn reverse_bench(c: &mut Criterion) {
    let opts = ReverseOptions::default()
        .with_preserve_spaces(true)
        .with_preserve_numbers(true);
    c.bench_function("reverse_characters_sample", |b| {
        b.iter(|| black_box(reverse(black_box(SAMPLE), Granularity::Character, &opts)));
    });
}

fn similarity_bench(c: &mut Criterion) {
    let engine = TransformEngine::new();
    let cfg = TransformConfig::default().with_intensity(Intensity::Significant);
    let rewritten = engine
        .transform_seeded(SAMPLE, &cfg, Some(3))
        .expect("transform for similarity bench")
        .output_text;

    for method in [
        SimilarityMethod::Jaccard,
        SimilarityMethod::Levenshtein,
        SimilarityMethod::Shingle,
    ] {
        c.bench_function(&format!("similarity_{method}"), |b| {
            b.iter(|| black_box(estimate_similarity(SAMPLE, black_box(&rewritten), method)));
        });
    }
}

criterion_group!(
    benches,
    segment_bench,
    transform_bench,
    rewrite_bench,
    reverse_bench,
    similarity_bench
);
criterion_main!(benches);
