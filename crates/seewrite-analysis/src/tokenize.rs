//! Sentence and word splitting shared by both analyzers.

use std::sync::LazyLock;

use regex::Regex;

/// Fragments whose trimmed length is at most this many characters are not
/// treated as sentences.
pub const MIN_SENTENCE_CHARS: usize = 10;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid regex: sentence break"));

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid regex: word"));

/// Splits `text` on runs of `.`, `!` and `?` and keeps the fragments whose
/// trimmed length exceeds [`MIN_SENTENCE_CHARS`].
///
/// Fragments are returned untrimmed, in source order.
///
/// # Examples
///
/// ```
/// # use seewrite_analysis::tokenize::sentences;
/// let found = sentences("Short. This sentence is long enough!! Ok?");
/// assert_eq!(found, vec![" This sentence is long enough"]);
/// ```
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .filter(|fragment| fragment.trim().chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

/// Lowercased alphanumeric word runs of `text`.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|word| word.as_str().to_string())
        .collect()
}

/// Uppercases the first character and lowercases the rest.
///
/// ```
/// # use seewrite_analysis::tokenize::capitalize;
/// assert_eq!(capitalize("sYSTEM"), "System");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// The first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_split_on_runs() {
        let text = "The first sentence is here... Second one follows?! Tiny. Third sentence closes";
        assert_eq!(
            sentences(text),
            vec![
                "The first sentence is here",
                " Second one follows",
                " Third sentence closes"
            ]
        );
    }

    #[test]
    fn test_sentence_threshold_is_exclusive() {
        // Exactly ten characters after trimming
        assert!(sentences("  abcdefghij  ").is_empty());
        assert_eq!(sentences("abcdefghijk").len(), 1);
    }

    #[test]
    fn test_sentences_of_empty_text() {
        assert!(sentences("").is_empty());
        assert!(sentences("...!!!???").is_empty());
    }

    #[test]
    fn test_words_are_lowercased() {
        assert_eq!(
            words("The 6G Network, re-used!"),
            vec!["the", "6g", "network", "re", "used"]
        );
        assert!(words("  ... ").is_empty());
    }

    #[test]
    fn test_accented_letters_stay_in_one_word() {
        assert_eq!(words("A naïve Café"), vec!["a", "naïve", "café"]);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("framework", 8), "framewor");
        assert_eq!(truncate_chars("data", 8), "data");
        assert_eq!(truncate_chars("résumé!", 3), "rés");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(capitalize("éTAPE"), "Étape");
        assert_eq!(capitalize("Engineers"), "Engineers");
    }
}
