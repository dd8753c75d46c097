//! Visual content analysis.
//!
//! [`ContentVisualizer`] classifies the rhetorical type of a description,
//! ranks its sentences as [`VisualElement`]s and links them with
//! [`Relationship`]s. Laying the result out on a canvas is done downstream.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use seewrite_core::model::{ContentType, Relationship, VisualAnalysis, VisualElement};

use crate::tokenize;

pub const MAX_ELEMENTS: usize = 6;

/// Strength assigned to every inferred relationship.
pub const RELATIONSHIP_STRENGTH: f32 = 0.7;

/// Lowercase words kept as keywords regardless of their length.
const KEYWORD_VOCABULARY: [&str; 7] = [
    "system",
    "process",
    "method",
    "network",
    "data",
    "model",
    "framework",
];

/// Longer words are always keywords.
const KEYWORD_MIN_CHARS: usize = 6;

/// Each term found in a sentence adds one to its importance.
const IMPORTANCE_TERMS: [&str; 6] = [
    "framework",
    "system",
    "process",
    "network",
    "model",
    "algorithm",
];

/// Phrases that link every element to every other.
const CONNECTOR_PHRASES: [&str; 6] = [
    "connects",
    "leads to",
    "results in",
    "causes",
    "enables",
    "supports",
];

static CONTENT_PATTERNS: LazyLock<Vec<(ContentType, Regex)>> = LazyLock::new(|| {
    vec![
        (
            ContentType::Process,
            Regex::new(r"(?i)\b(?:step|process|method|procedure|workflow)\b")
                .expect("Invalid regex: process content"),
        ),
        (
            ContentType::System,
            Regex::new(r"(?i)\b(?:system|architecture|framework|structure)\b")
                .expect("Invalid regex: system content"),
        ),
        (
            ContentType::Network,
            Regex::new(r"(?i)\b(?:network|connection|node|link|protocol)\b")
                .expect("Invalid regex: network content"),
        ),
        (
            ContentType::Hierarchy,
            Regex::new(r"(?i)\b(?:level|tier|layer|hierarchy|top|bottom)\b")
                .expect("Invalid regex: hierarchy content"),
        ),
        (
            ContentType::Comparison,
            Regex::new(r"(?i)\b(?:versus|compared|difference|similar|contrast)\b")
                .expect("Invalid regex: comparison content"),
        ),
        (
            ContentType::Cycle,
            Regex::new(r"(?i)\b(?:cycle|circular|loop|repeat|continuous)\b")
                .expect("Invalid regex: cycle content"),
        ),
    ]
});

static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{4,}\b").expect("Invalid regex: keyword"));

/// Derives a [`VisualAnalysis`] from description text.
///
/// # Examples
///
/// ```
/// # use seewrite_analysis::ContentVisualizer;
/// # use seewrite_core::model::{ContentType, FlowKind};
/// let analysis = ContentVisualizer::new()
///     .analyze("Each step feeds the next one. The workflow repeats every day.");
///
/// assert_eq!(analysis.content_type, ContentType::Process);
/// assert_eq!(analysis.flow_kind, FlowKind::Sequential);
/// assert_eq!(analysis.elements.len(), 2);
/// assert!(analysis.relationships.is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentVisualizer;

impl ContentVisualizer {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes `text`. Never fails.
    pub fn analyze(&self, text: &str) -> VisualAnalysis {
        let content_type = content_type(text);
        let elements = elements(text);
        let relationships = relationships(elements.len(), text);

        let analysis = VisualAnalysis {
            content_type,
            flow_kind: content_type.flow_kind(),
            elements,
            relationships,
        };

        debug!(
            content_type = content_type.id(),
            elements = analysis.elements.len(),
            relationships = analysis.relationships.len();
            "Analyzed visual content"
        );
        trace!(analysis:?; "Visual analysis");

        analysis
    }
}

/// First content type, in priority order, with a whole-word match.
pub fn content_type(text: &str) -> ContentType {
    CONTENT_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map_or(ContentType::Concept, |(content_type, _)| *content_type)
}

/// Sentences ranked by importance, capped, with dense ids.
pub fn elements(text: &str) -> Vec<VisualElement> {
    let mut elements: Vec<VisualElement> = tokenize::sentences(text)
        .into_iter()
        .map(|sentence| VisualElement {
            id: 0,
            text: sentence.trim().to_string(),
            keywords: keywords(sentence),
            importance: importance(sentence),
            position: None,
        })
        .collect();

    // Stable, so equal importance keeps source order
    elements.sort_by(|a, b| b.importance.cmp(&a.importance));
    elements.truncate(MAX_ELEMENTS);
    for (id, element) in elements.iter_mut().enumerate() {
        element.id = id;
    }
    elements
}

/// Lowercase alphabetic words of four or more letters that are either in the
/// keyword vocabulary or longer than six characters.
pub fn keywords(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    KEYWORD
        .find_iter(&lowered)
        .map(|found| found.as_str())
        .filter(|word| KEYWORD_VOCABULARY.contains(word) || word.chars().count() > KEYWORD_MIN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Number of importance terms present in the sentence.
pub fn importance(sentence: &str) -> u32 {
    let lowered = sentence.to_lowercase();
    IMPORTANCE_TERMS
        .iter()
        .filter(|term| lowered.contains(*term))
        .count() as u32
}

/// Every pair of elements, when the text uses any connector phrase.
pub fn relationships(element_count: usize, text: &str) -> Vec<Relationship> {
    let lowered = text.to_lowercase();
    if !CONNECTOR_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        return Vec::new();
    }

    (0..element_count)
        .flat_map(|from| {
            (from + 1..element_count).map(move |to| Relationship {
                from,
                to,
                strength: RELATIONSHIP_STRENGTH,
            })
        })
        .collect()
}
