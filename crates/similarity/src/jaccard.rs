use fxhash::FxHashSet;

/// Lowercased words of `text`; any non-alphanumeric character delimits.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Jaccard index of the word sets of `a` and `b`.
///
/// Two texts without any words are identical (1.0).
///
/// ```rust
/// use similarity::jaccard;
///
/// assert_eq!(jaccard("The cat sat.", "the CAT sat"), 1.0);
/// assert_eq!(jaccard("one two", "three four"), 0.0);
/// ```
pub fn jaccard(a: &str, b: &str) -> f64 {
    let left: FxHashSet<String> = words(a).collect();
    let right: FxHashSet<String> = words(b).collect();
    set_jaccard(&left, &right)
}

pub(crate) fn set_jaccard<T: Eq + std::hash::Hash>(
    left: &FxHashSet<T>,
    right: &FxHashSet<T>,
) -> f64 {
    if left.is_empty() && right.is_empty() {
        return 1.0;
    }
    let intersection = left.intersection(right).count();
    let union = left.len() + right.len() - intersection;
    (intersection as f64 / union as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_delimits_words() {
        let got: Vec<String> = words("Hello,world! It's").collect();
        assert_eq!(got, ["hello", "world", "it", "s"]);
    }

    #[test]
    fn partial_overlap() {
        // {a, b, c} vs {b, c, d}: 2 shared of 4.
        assert_eq!(jaccard("a b c", "b c d"), 0.5);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(jaccard("", ""), 1.0);
        assert_eq!(jaccard("...", "  "), 1.0);
        assert_eq!(jaccard("word", ""), 0.0);
    }

    #[test]
    fn duplicates_do_not_count_twice() {
        assert_eq!(jaccard("go go go", "go"), 1.0);
    }
}
