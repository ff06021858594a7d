use crate::config::SimilarityError;

/// Character edit distance (insert, delete, substitute) between `a` and `b`.
///
/// Runs the classic DP with two rows after stripping the common prefix and
/// suffix, so memory is linear in the shorter remainder.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    // Keep the row over the shorter side.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// `1 - distance / max(len_a, len_b)`, in characters.
///
/// Inputs longer than `max_chars` are refused rather than run through the
/// quadratic DP. Two empty inputs score 1.0.
pub fn levenshtein_similarity(a: &str, b: &str, max_chars: usize) -> Result<f64, SimilarityError> {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longest = len_a.max(len_b);
    if longest > max_chars {
        return Err(SimilarityError::InputTooLarge {
            len: longest,
            max: max_chars,
        });
    }
    if longest == 0 {
        return Ok(1.0);
    }
    let distance = levenshtein_distance(a, b);
    Ok((1.0 - distance as f64 / longest as f64).clamp(0.0, 1.0))
}
