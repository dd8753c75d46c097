//! Text structure analysis.
//!
//! [`TextStructureAnalyzer`] turns a description into a [`TextAnalysis`]:
//! a one-sentence summary, key terms, up to three concepts, follow-up
//! questions, action items and a complexity [`Tier`]. Every step is a
//! deterministic heuristic and degenerate input maps to a documented
//! fallback, so analysis never fails.

use std::sync::LazyLock;

use indexmap::IndexSet;
use log::{debug, trace};
use regex::Regex;

use seewrite_core::model::{Concept, TextAnalysis, Tier};

use crate::tokenize;

/// Summary used when the text has no qualifying sentence.
pub const FALLBACK_SUMMARY: &str = "Key information extracted from the content.";

/// Questions offered when no question rule matches.
pub const FALLBACK_QUESTIONS: [&str; 3] = [
    "What are the main benefits?",
    "How does this compare to alternatives?",
    "What are potential challenges?",
];

pub const MAX_KEY_TERMS: usize = 6;
pub const MAX_CONCEPTS: usize = 3;
pub const MAX_QUESTIONS: usize = 3;
pub const MAX_ACTION_ITEMS: usize = 3;

/// Words that make a sentence a good summary candidate.
const SUMMARY_KEYWORDS: [&str; 6] = [
    "framework",
    "system",
    "process",
    "method",
    "approach",
    "technology",
];

/// Case-sensitive substring triggers and the question each one adds.
const QUESTION_RULES: [(&[&str], &str); 4] = [
    (
        &["framework", "system"],
        "How does this system work in practice?",
    ),
    (&["process", "method"], "What are the key steps involved?"),
    (
        &["technology", "innovation"],
        "What makes this approach innovative?",
    ),
    (&["test", "evaluation"], "How is effectiveness measured?"),
];

const ACTION_RULES: [(&[&str], &str); 4] = [
    (&["develop", "create"], "Consider development opportunities"),
    (&["test", "evaluate"], "Plan testing and validation"),
    (&["implement", "deploy"], "Explore implementation strategies"),
    (&["optimize", "improve"], "Identify optimization areas"),
];

/// Words longer than this count as complex.
const COMPLEX_WORD_CHARS: usize = 8;
const ADVANCED_RATIO: f64 = 0.15;
const INTERMEDIATE_RATIO: f64 = 0.08;

static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("Invalid regex: acronym"));

static TECHNICAL_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:framework|algorithm|model|system|network|process|method)\b")
        .expect("Invalid regex: technical term")
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+[A-Z]?\b").expect("Invalid regex: number"));

/// Extracts reading structure from description text.
///
/// # Examples
///
/// ```
/// # use seewrite_analysis::TextStructureAnalyzer;
/// # use seewrite_core::model::Tier;
/// let analysis = TextStructureAnalyzer::new()
///     .analyze("The new framework speeds up delivery. Teams test it daily.");
///
/// assert_eq!(analysis.summary, "The new framework speeds up delivery.");
/// assert_eq!(analysis.concepts.len(), 2);
/// // One word in ten is longer than eight characters
/// assert_eq!(analysis.complexity, Tier::Intermediate);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextStructureAnalyzer;

impl TextStructureAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes `text`. Never fails.
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let sentences = tokenize::sentences(text);
        let words = tokenize::words(text);

        let analysis = TextAnalysis {
            original_text: text.to_string(),
            summary: summary(&sentences),
            key_terms: key_terms(text),
            concepts: concepts(&sentences),
            questions: questions(text),
            action_items: action_items(text),
            complexity: complexity(&words),
        };

        debug!(
            sentences = sentences.len(),
            words = words.len(),
            key_terms = analysis.key_terms.len(),
            complexity = analysis.complexity.id();
            "Analyzed text structure"
        );
        trace!(analysis:?; "Text analysis");

        analysis
    }
}

/// The sentence mentioning the most summary keywords, first one on ties.
pub fn summary(sentences: &[&str]) -> String {
    let mut best: Option<(&str, usize)> = None;
    for &sentence in sentences {
        let score = summary_score(sentence);
        // Strictly greater keeps the earliest sentence on ties
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((sentence, score));
        }
    }

    match best {
        Some((sentence, _)) => format!("{}.", sentence.trim()),
        None => FALLBACK_SUMMARY.to_string(),
    }
}

fn summary_score(sentence: &str) -> usize {
    let lowered = sentence.to_lowercase();
    SUMMARY_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

/// Acronyms, then technical terms, then numbers; deduplicated and capped.
pub fn key_terms(text: &str) -> IndexSet<String> {
    ACRONYM
        .find_iter(text)
        .chain(TECHNICAL_TERM.find_iter(text))
        .chain(NUMBER.find_iter(text))
        .map(|found| found.as_str().to_string())
        .collect::<IndexSet<_>>()
        .into_iter()
        .take(MAX_KEY_TERMS)
        .collect()
}

/// The first sentences as titled concepts of decreasing importance.
pub fn concepts(sentences: &[&str]) -> Vec<Concept> {
    sentences
        .iter()
        .take(MAX_CONCEPTS)
        .enumerate()
        .map(|(index, sentence)| Concept {
            title: concept_title(sentence),
            content: format!("{}.", sentence.trim()),
            importance: (MAX_CONCEPTS - index) as u32,
        })
        .collect()
}

/// Title from the first capitalized word of at least four characters, else
/// the first such word of any case, else `"Concept"`.
pub fn concept_title(sentence: &str) -> String {
    let long_words: Vec<&str> = sentence
        .split(' ')
        .filter(|word| word.chars().count() > 3)
        .collect();

    let chosen = long_words
        .iter()
        .find(|word| word.starts_with(|c: char| c.is_ascii_uppercase()))
        .or_else(|| long_words.first())
        .copied()
        .unwrap_or("Concept");

    tokenize::capitalize(chosen)
}

/// Follow-up questions from case-sensitive keyword rules.
pub fn questions(text: &str) -> Vec<String> {
    let matched = apply_rules(text, &QUESTION_RULES, MAX_QUESTIONS);
    if matched.is_empty() {
        return FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect();
    }
    matched
}

/// Suggested next steps; may be empty.
pub fn action_items(text: &str) -> Vec<String> {
    apply_rules(text, &ACTION_RULES, MAX_ACTION_ITEMS)
}

fn apply_rules(text: &str, rules: &[(&[&str], &str)], limit: usize) -> Vec<String> {
    rules
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|trigger| text.contains(trigger)))
        .map(|(_, output)| output.to_string())
        .take(limit)
        .collect()
}

/// Share of long words, as a tier. Both thresholds are exclusive.
pub fn complexity(words: &[String]) -> Tier {
    if words.is_empty() {
        return Tier::Beginner;
    }

    let complex = words
        .iter()
        .filter(|word| word.chars().count() > COMPLEX_WORD_CHARS)
        .count();
    let ratio = complex as f64 / words.len() as f64;

    if ratio > ADVANCED_RATIO {
        Tier::Advanced
    } else if ratio > INTERMEDIATE_RATIO {
        Tier::Intermediate
    } else {
        Tier::Beginner
    }
}
