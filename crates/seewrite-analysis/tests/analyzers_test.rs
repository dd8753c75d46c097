//! Both analyzers run over the same descriptions independently.

use seewrite_analysis::{
    ContentVisualizer, TextStructureAnalyzer,
    highlight::{self, HighlightKind, Segment},
    level,
};
use seewrite_core::model::{ContentType, FlowKind, Tier};

const SAMPLE: &str = "This framework enables rapid prototyping. The system connects multiple components. Engineers test the algorithm extensively.";

#[test]
fn test_sample_structure_and_visual_agree_on_sentences() {
    let structure = TextStructureAnalyzer::new().analyze(SAMPLE);
    let visual = ContentVisualizer::new().analyze(SAMPLE);

    assert_eq!(structure.original_text, SAMPLE);
    assert_eq!(structure.concepts.len(), visual.elements.len());
    for (concept, element) in structure.concepts.iter().zip(&visual.elements) {
        assert_eq!(concept.content, format!("{}.", element.text));
    }

    assert_eq!(visual.content_type, ContentType::System);
    assert_eq!(visual.flow_kind, FlowKind::Hierarchical);
    assert_eq!(structure.complexity, Tier::Advanced);
}

#[test]
fn test_empty_description_uses_fallbacks() {
    let structure = TextStructureAnalyzer::new().analyze("");
    let visual = ContentVisualizer::new().analyze("");

    assert_eq!(
        structure.summary,
        "Key information extracted from the content."
    );
    assert!(structure.key_terms.is_empty());
    assert!(structure.concepts.is_empty());
    assert_eq!(structure.questions.len(), 3);
    assert!(structure.action_items.is_empty());
    assert_eq!(structure.complexity, Tier::Beginner);

    assert_eq!(visual.content_type, ContentType::Concept);
    assert_eq!(visual.flow_kind, FlowKind::Radial);
    assert!(visual.elements.is_empty());
    assert!(visual.relationships.is_empty());
}

#[test]
fn test_four_elements_with_connector_are_fully_linked() {
    let text = "The first stage leads to more. The second stage is here. \
                The third stage is here. The fourth stage is here.";
    let visual = ContentVisualizer::new().analyze(text);

    assert_eq!(visual.elements.len(), 4);
    let pairs: Vec<(usize, usize)> = visual
        .relationships
        .iter()
        .map(|link| (link.from, link.to))
        .collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
}

#[test]
fn test_adapted_concept_text_is_highlighted_again() {
    let structure = TextStructureAnalyzer::new().analyze(SAMPLE);
    let adapted = level::adapt_concept_text(&structure.concepts[2].content, Tier::Beginner);
    assert_eq!(adapted, "Engineers test the method extensively.");

    let kinds: Vec<HighlightKind> = highlight::segments(&adapted)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Highlight { kind, .. } => Some(kind),
            Segment::Plain(_) => None,
        })
        .collect();
    assert_eq!(kinds, vec![HighlightKind::Concept]);
}
