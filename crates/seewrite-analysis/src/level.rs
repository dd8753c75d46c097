//! Reading-level text adaptation.
//!
//! Concept text is rewritten for a [`Tier`] by literal, case-insensitive
//! term substitution. The input is always the original concept content,
//! so adapting again for the same tier gives the same text.

use std::sync::LazyLock;

use regex::Regex;

use seewrite_core::model::Tier;

/// Advanced rewriting is skipped when the text already contains this word.
const ADVANCED_GUARD: &str = "implementation";

static BEGINNER_SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)framework").expect("Invalid regex: framework substitution"),
            "system",
        ),
        (
            Regex::new(r"(?i)algorithm").expect("Invalid regex: algorithm substitution"),
            "method",
        ),
        (
            Regex::new(r"(?i)implementation").expect("Invalid regex: implementation substitution"),
            "setup",
        ),
        (
            Regex::new(r"(?i)optimization").expect("Invalid regex: optimization substitution"),
            "improvement",
        ),
    ]
});

static ADVANCED_SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)setup").expect("Invalid regex: setup substitution"),
            "implementation",
        ),
        (
            Regex::new(r"(?i)system").expect("Invalid regex: system substitution"),
            "framework architecture",
        ),
        (
            Regex::new(r"(?i)method").expect("Invalid regex: method substitution"),
            "algorithmic approach",
        ),
    ]
});

/// Rewrites original concept `content` for `tier`.
///
/// # Examples
///
/// ```
/// # use seewrite_analysis::level::adapt_concept_text;
/// # use seewrite_core::model::Tier;
/// let original = "The Framework runs an algorithm.";
/// assert_eq!(
///     adapt_concept_text(original, Tier::Beginner),
///     "The system runs an method."
/// );
/// assert_eq!(adapt_concept_text(original, Tier::Intermediate), original);
/// ```
pub fn adapt_concept_text(content: &str, tier: Tier) -> String {
    match tier {
        Tier::Beginner => substitute(content, &BEGINNER_SUBSTITUTIONS),
        Tier::Intermediate => content.to_string(),
        Tier::Advanced if content.contains(ADVANCED_GUARD) => content.to_string(),
        Tier::Advanced => substitute(content, &ADVANCED_SUBSTITUTIONS),
    }
}

fn substitute(content: &str, substitutions: &[(Regex, &'static str)]) -> String {
    substitutions
        .iter()
        .fold(content.to_string(), |text, (pattern, replacement)| {
            pattern
                .replace_all(&text, regex::NoExpand(*replacement))
                .into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_substitutions_in_order() {
        assert_eq!(
            adapt_concept_text(
                "Implementation of the ALGORITHM needs optimization.",
                Tier::Beginner
            ),
            "setup of the method needs improvement."
        );
    }

    #[test]
    fn test_advanced_substitutions() {
        assert_eq!(
            adapt_concept_text("The setup uses a system and a method.", Tier::Advanced),
            "The implementation uses a framework architecture and a algorithmic approach."
        );
    }

    #[test]
    fn test_advanced_guard_is_case_sensitive() {
        let guarded = "The implementation of the system.";
        assert_eq!(adapt_concept_text(guarded, Tier::Advanced), guarded);

        assert_eq!(
            adapt_concept_text("Implementation of the system.", Tier::Advanced),
            "Implementation of the framework architecture."
        );
    }

    #[test]
    fn test_substitution_is_not_word_bounded() {
        assert_eq!(
            adapt_concept_text("An ecosystem.", Tier::Advanced),
            "An ecoframework architecture."
        );
    }

    #[test]
    fn test_adaptation_is_idempotent_from_original() {
        let original = "Engineers test the algorithm extensively.";
        for tier in Tier::ALL {
            assert_eq!(
                adapt_concept_text(original, tier),
                adapt_concept_text(original, tier)
            );
        }
        assert_eq!(adapt_concept_text(original, Tier::Intermediate), original);
    }
}
