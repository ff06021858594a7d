use proptest::prelude::*;
use similarity::{
    jaccard, levenshtein_distance, levenshtein_similarity, shingle_similarity, SimilarityEstimator,
    SimilarityMethod,
};

const METHODS: [SimilarityMethod; 3] = [
    SimilarityMethod::Jaccard,
    SimilarityMethod::Levenshtein,
    SimilarityMethod::Shingle,
];

proptest! {
    #[test]
    fn scores_stay_in_unit_interval(a in "\\PC{0,60}", b in "\\PC{0,60}") {
        let estimator = SimilarityEstimator::default();
        for method in METHODS {
            let score = estimator.estimate(&a, &b, method).unwrap();
            prop_assert!((0.0..=1.0).contains(&score), "{method}: {score}");
        }
    }

    #[test]
    fn identical_inputs_score_one(a in "\\PC{0,60}") {
        prop_assert_eq!(jaccard(&a, &a), 1.0);
        prop_assert_eq!(levenshtein_similarity(&a, &a, 1_000).unwrap(), 1.0);
        prop_assert_eq!(shingle_similarity(&a, &a, 3), 1.0);
    }

    #[test]
    fn scores_are_symmetric(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        prop_assert_eq!(
            levenshtein_similarity(&a, &b, 1_000).unwrap(),
            levenshtein_similarity(&b, &a, 1_000).unwrap()
        );
        prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn distance_is_bounded_by_longer_input(a in "\\PC{0,30}", b in "\\PC{0,30}") {
        let d = levenshtein_distance(&a, &b);
        prop_assert!(d <= a.chars().count().max(b.chars().count()));
    }
}

#[test]
fn fallback_reports_the_method_used() {
    let estimator = SimilarityEstimator::default();
    let huge = "word ".repeat(12_000);
    let est = estimator.estimate_or_fallback(&huge, "word", SimilarityMethod::Levenshtein);
    assert_eq!(est.method, SimilarityMethod::Jaccard);
    assert_eq!(est.score, 1.0);
}
