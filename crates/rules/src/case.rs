//! Case transfer between a matched span and its replacement.

/// True when `s` has at least two letters and none of them is lowercase.
pub fn is_all_caps(s: &str) -> bool {
    let mut letters = 0usize;
    for c in s.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

/// Give `replacement` the letter case of `original`.
///
/// * an all-caps original (two or more letters) upper-cases the replacement;
/// * equal character counts copy the case pattern position by position;
/// * otherwise only the case of the first letter carries over.
pub fn match_case(original: &str, replacement: &str) -> String {
    if is_all_caps(original) {
        return replacement.to_uppercase();
    }

    if original.chars().count() == replacement.chars().count() {
        let mut out = String::with_capacity(replacement.len());
        for (o, r) in original.chars().zip(replacement.chars()) {
            if o.is_uppercase() {
                out.extend(r.to_uppercase());
            } else if o.is_lowercase() {
                out.extend(r.to_lowercase());
            } else {
                out.push(r);
            }
        }
        return out;
    }

    match original.chars().find(|c| c.is_alphabetic()) {
        Some(first) if first.is_uppercase() => capitalize_first(replacement),
        Some(_) => lowercase_initial(replacement),
        None => replacement.to_string(),
    }
}

/// Upper-case the first letter of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    map_first_letter(s, |c| c.to_uppercase().collect())
}

/// Lower-case the first letter of `s`, leaving the rest untouched.
pub fn lowercase_initial(s: &str) -> String {
    map_first_letter(s, |c| c.to_lowercase().collect())
}

fn map_first_letter(s: &str, f: impl FnOnce(char) -> String) -> String {
    match s.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, c)) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push_str(&s[..idx]);
            out.push_str(&f(c));
            out.push_str(&s[idx + c.len_utf8()..]);
            out
        }
        None => s.to_string(),
    }
}

/// Words that are only capitalised because they open a sentence.
const COMMON_OPENERS: &[&str] = &[
    "a", "after", "all", "although", "an", "and", "any", "as", "at", "because", "before", "but",
    "by", "each", "every", "for", "from", "he", "her", "here", "his", "how", "if", "in", "it",
    "its", "many", "most", "my", "no", "now", "of", "on", "one", "or", "our", "people", "she",
    "since", "so", "some", "that", "the", "their", "then", "there", "these", "they", "this",
    "those", "to", "today", "we", "what", "when", "where", "while", "who", "why", "with", "yet",
    "you", "your",
];

/// Lower-case the opening word of a sentence when it is a common opener.
///
/// Proper nouns, `I` and acronyms are left alone.
pub fn lowercase_first(s: &str) -> String {
    let Some(first) = s.split_whitespace().next() else {
        return s.to_string();
    };
    let (_, core, _) = split_affixes(first);
    if COMMON_OPENERS.contains(&core.to_lowercase().as_str()) && !is_all_caps(core) {
        lowercase_initial(s)
    } else {
        s.to_string()
    }
}

/// Split a token into `(prefix, core, suffix)` where prefix and suffix are
/// the leading and trailing non-alphanumeric characters.
///
/// Inner punctuation such as apostrophes and hyphens stays in the core.
/// A token without alphanumerics is returned whole as the prefix.
pub fn split_affixes(token: &str) -> (&str, &str, &str) {
    let Some(start) = token.find(char::is_alphanumeric) else {
        return (token, "", "");
    };
    let end = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(token.len());
    (&token[..start], &token[start..end], &token[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps_original_upper_cases_replacement() {
        assert_eq!(match_case("HELLO", "greetings"), "GREETINGS");
        assert_eq!(match_case("DON'T", "do not"), "DO NOT");
    }

    #[test]
    fn same_length_copies_pattern() {
        assert_eq!(match_case("GoOd", "fine"), "FiNe");
        assert_eq!(match_case("Hi", "yo"), "Yo");
    }

    #[test]
    fn different_length_carries_initial_case() {
        assert_eq!(match_case("Good", "excellent"), "Excellent");
        assert_eq!(match_case("good", "Excellent"), "excellent");
        assert_eq!(match_case("I", "me"), "Me");
        assert_eq!(match_case("42", "forty-two"), "forty-two");
    }

    #[test]
    fn affixes_split_outer_punctuation() {
        assert_eq!(split_affixes("\"Hello,\""), ("\"", "Hello", ",\""));
        assert_eq!(split_affixes("don't"), ("", "don't", ""));
        assert_eq!(split_affixes("..."), ("...", "", ""));
        assert_eq!(split_affixes("state-of-the-art."), ("", "state-of-the-art", "."));
    }

    #[test]
    fn lowercases_only_common_openers() {
        assert_eq!(lowercase_first("The cat sat"), "the cat sat");
        assert_eq!(lowercase_first("Paris is big"), "Paris is big");
        assert_eq!(lowercase_first("I agree"), "I agree");
        assert_eq!(lowercase_first("NASA launched it"), "NASA launched it");
    }

    #[test]
    fn capitalize_skips_leading_punctuation() {
        assert_eq!(capitalize_first("\"well"), "\"Well");
        assert_eq!(capitalize_first(""), "");
    }
}
