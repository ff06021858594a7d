//! Word k-shingles hashed with xxh3.

use fxhash::FxHashSet;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::jaccard::{set_jaccard, words};

/// Hash every window of `k` consecutive tokens.
///
/// Each token is hashed once; a window hash is the xxh3 of its token hashes,
/// so windows with the same tokens in a different order hash differently.
/// Returns nothing when `k == 0` or there are fewer than `k` tokens.
pub fn word_shingles<S: AsRef<str>>(tokens: &[S], k: usize, seed: u64) -> Vec<u64> {
    if k == 0 || tokens.len() < k {
        return Vec::new();
    }
    let token_hashes: Vec<u64> = tokens
        .iter()
        .map(|t| xxh3_64_with_seed(t.as_ref().as_bytes(), seed))
        .collect();

    let mut window = Vec::with_capacity(k * 8);
    token_hashes
        .windows(k)
        .map(|hashes| {
            window.clear();
            for h in hashes {
                window.extend_from_slice(&h.to_le_bytes());
            }
            xxh3_64_with_seed(&window, seed)
        })
        .collect()
}

/// Jaccard overlap of the hashed word `k`-shingle sets of `a` and `b`.
///
/// When either text has fewer than `k` words this is plain word Jaccard.
pub fn shingle_similarity(a: &str, b: &str, k: usize) -> f64 {
    shingle_similarity_seeded(a, b, k, 0)
}

pub(crate) fn shingle_similarity_seeded(a: &str, b: &str, k: usize, seed: u64) -> f64 {
    let left: Vec<String> = words(a).collect();
    let right: Vec<String> = words(b).collect();
    if k == 0 || left.len() < k || right.len() < k {
        let left: FxHashSet<String> = left.into_iter().collect();
        let right: FxHashSet<String> = right.into_iter().collect();
        return set_jaccard(&left, &right);
    }
    let left: FxHashSet<u64> = word_shingles(&left, k, seed).into_iter().collect();
    let right: FxHashSet<u64> = word_shingles(&right, k, seed).into_iter().collect();
    set_jaccard(&left, &right)
}
