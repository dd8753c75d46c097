//! Inline highlighting of concept text.
//!
//! Text is segmented in a single left-to-right pass. At any position an
//! acronym wins over a number, which wins over a concept word.

use std::sync::LazyLock;

use regex::Regex;

static HIGHLIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:
            (?P<acronym>[A-Z]{2,})
          | (?P<number>[0-9]+[A-Z]?)
          | (?P<concept>(?i:framework|algorithm|model|system|network|process|method))
        )\b",
    )
    .expect("Invalid regex: highlight")
});

/// What a highlighted span refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// All-uppercase term with a definition lookup
    Acronym,
    /// Digits with an optional uppercase suffix, such as `6G`
    Number,
    /// One of the technical concept words
    Concept,
}

/// A run of plain or highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlight { kind: HighlightKind, text: &'a str },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) => *text,
            Self::Highlight { text, .. } => *text,
        }
    }
}

/// Splits `text` into plain and highlighted segments. Concatenating the
/// segment texts yields `text` again.
///
/// # Examples
///
/// ```
/// # use seewrite_analysis::highlight::{segments, HighlightKind, Segment};
/// let parts = segments("The AI model runs on 6G.");
/// assert_eq!(
///     parts,
///     vec![
///         Segment::Plain("The "),
///         Segment::Highlight { kind: HighlightKind::Acronym, text: "AI" },
///         Segment::Plain(" "),
///         Segment::Highlight { kind: HighlightKind::Concept, text: "model" },
///         Segment::Plain(" runs on "),
///         Segment::Highlight { kind: HighlightKind::Number, text: "6G" },
///         Segment::Plain("."),
///     ]
/// );
/// ```
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut cursor = 0;

    for captures in HIGHLIGHT.captures_iter(text) {
        let (kind, found) = if let Some(found) = captures.name("acronym") {
            (HighlightKind::Acronym, found)
        } else if let Some(found) = captures.name("number") {
            (HighlightKind::Number, found)
        } else if let Some(found) = captures.name("concept") {
            (HighlightKind::Concept, found)
        } else {
            continue;
        };

        if found.start() > cursor {
            result.push(Segment::Plain(&text[cursor..found.start()]));
        }
        result.push(Segment::Highlight {
            kind,
            text: found.as_str(),
        });
        cursor = found.end();
    }

    if cursor < text.len() {
        result.push(Segment::Plain(&text[cursor..]));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted(text: &str) -> Vec<(HighlightKind, &str)> {
        segments(text)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Highlight { kind, text } => Some((kind, text)),
                Segment::Plain(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_acronym_wins_over_concept() {
        assert_eq!(
            highlighted("The SYSTEM and the System"),
            vec![
                (HighlightKind::Acronym, "SYSTEM"),
                (HighlightKind::Concept, "System"),
            ]
        );
    }

    #[test]
    fn test_partial_words_are_not_highlighted() {
        assert!(highlighted("subsystems, frameworks and 12ab").is_empty());
    }

    #[test]
    fn test_segments_reassemble() {
        let text = "IoT devices use a network; 5G and API calls follow a process.";
        let rebuilt: String = segments(text).iter().map(Segment::text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_plain_text_is_single_segment() {
        assert_eq!(segments("nothing here"), vec![Segment::Plain("nothing here")]);
        assert!(segments("").is_empty());
    }
}
