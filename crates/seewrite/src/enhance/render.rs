//! HTML rendering of the enhanced content.

use seewrite_analysis::{
    highlight::{self, HighlightKind, Segment},
    level,
};
use seewrite_core::model::{TextAnalysis, Tier};

use super::LevelState;
use crate::{markup::Markup, mount};

const LEVEL_OPTIONS: [(Tier, &str); 3] = [
    (Tier::Beginner, "Beginner Explanation"),
    (Tier::Intermediate, "Standard Detail"),
    (Tier::Advanced, "Technical Depth"),
];

/// Everything the enhanced content depends on besides the analysis.
pub(super) struct RenderState<'a> {
    pub level: &'a LevelState,
    pub expanded: &'a [bool],
    pub section_id: &'a str,
}

pub(super) fn enhanced_content(analysis: &TextAnalysis, state: &RenderState<'_>) -> String {
    let mut markup = Markup::new();
    markup.open("div", &[("class", "enhanced-content")]);

    markup.open("div", &[("class", "summary-card")]);
    heading(&mut markup, "fa-lightbulb", "Key Insight");
    markup.element("p", &[], &analysis.summary).close("div");

    markup.open("div", &[("class", "key-terms-section")]);
    heading(&mut markup, "fa-tags", "Important Terms");
    markup.open("div", &[("class", "terms-grid")]);
    for term in &analysis.key_terms {
        markup.element(
            "span",
            &[
                ("class", "key-term"),
                ("data-term", term),
                ("title", "Click for definition"),
            ],
            term,
        );
    }
    markup.close("div").close("div");

    concepts(&mut markup, analysis, state);

    markup
        .open("div", &[("class", "visual-section"), ("id", state.section_id)])
        .raw(&mount::slot(state.section_id))
        .close("div");

    questions(&mut markup, analysis, state.level);

    if !analysis.action_items.is_empty() {
        markup.open("div", &[("class", "actions-section")]);
        heading(&mut markup, "fa-tasks", "Next Steps");
        markup.open("ul", &[("class", "actions-list")]);
        for item in &analysis.action_items {
            markup.element("li", &[], item);
        }
        markup.close("ul").close("div");
    }

    learning_controls(&mut markup, analysis, state.level);

    markup.close("div");
    markup.into_string()
}

fn heading(markup: &mut Markup, icon: &str, title: &str) {
    let class = format!("fas {icon}");
    markup
        .open("h4", &[])
        .element("i", &[("class", class.as_str())], "")
        .text(" ")
        .text(title)
        .close("h4");
}

fn concepts(markup: &mut Markup, analysis: &TextAnalysis, state: &RenderState<'_>) {
    let presentation = state.level.presentation();
    let body_style = presentation.concept_style();

    markup.open("div", &[("class", "concepts-section")]);
    heading(markup, "fa-brain", "Key Concepts");

    for (index, concept) in analysis.concepts.iter().enumerate() {
        let expanded = state.expanded.get(index).copied().unwrap_or(false);
        let (chevron, body_class) = if expanded {
            ("fas fa-chevron-up", "concept-content")
        } else {
            ("fas fa-chevron-down", "concept-content hidden")
        };
        let position = index.to_string();

        markup
            .open("div", &[("class", "concept-item"), ("data-concept", position.as_str())])
            .open("div", &[("class", "concept-header")])
            .element("span", &[("class", "concept-title")], &concept.title)
            .element("i", &[("class", chevron)], "")
            .close("div")
            .open("div", &[("class", body_class), ("style", body_style.as_str())]);

        // Always adapted from the original content
        let text = level::adapt_concept_text(&concept.content, state.level.tier());
        highlighted(markup, &text, state.level);

        markup.close("div").close("div");
    }

    markup.close("div");
}

fn highlighted(markup: &mut Markup, text: &str, level: &LevelState) {
    let presentation = level.presentation();

    for segment in highlight::segments(text) {
        let (kind, text) = match segment {
            Segment::Plain(text) => {
                markup.text(text);
                continue;
            }
            Segment::Highlight { kind, text } => (kind, text),
        };

        let mut attributes = Vec::with_capacity(4);
        let style = match kind {
            HighlightKind::Acronym => {
                attributes.push(("class", "highlight-acronym"));
                attributes.push(("data-term", text));
                attributes.push(("title", "Click for definition"));
                presentation.highlight_style(text)
            }
            HighlightKind::Number => {
                attributes.push(("class", "highlight-number"));
                attributes.push(("title", "Click for more info"));
                None
            }
            HighlightKind::Concept => {
                attributes.push(("class", "highlight-concept"));
                attributes.push(("title", "Click for more info"));
                presentation.highlight_style(text)
            }
        };
        if let Some(style) = &style {
            attributes.push(("style", style.as_str()));
        }

        markup.element("span", &attributes, text);
    }
}

fn questions(markup: &mut Markup, analysis: &TextAnalysis, level: &LevelState) {
    let presentation = level.presentation();

    markup.open("div", &[("class", "questions-section")]);
    heading(markup, "fa-question-circle", "Explore Further");
    markup.open("div", &[("class", "questions-list")]);
    for (index, question) in analysis.questions.iter().enumerate() {
        let style = presentation.question_style(index);
        markup.element(
            "button",
            &[
                ("class", "smart-question"),
                ("data-question", question),
                ("style", style.as_str()),
            ],
            question,
        );
    }
    markup.close("div").close("div");
}

fn learning_controls(markup: &mut Markup, analysis: &TextAnalysis, level: &LevelState) {
    let (badge_text, badge_tier) = level.badge(analysis.complexity);
    let badge_class = format!("complexity-badge complexity-{}", badge_tier.id());

    markup
        .open("div", &[("class", "learning-controls")])
        .open("div", &[("class", "complexity-indicator")])
        .element("span", &[("class", "complexity-label")], "Content Level:")
        .element("span", &[("class", badge_class.as_str())], badge_text)
        .close("div")
        .open("select", &[("class", "level-selector")]);

    for (tier, label) in LEVEL_OPTIONS {
        if tier == level.tier() {
            markup.element("option", &[("value", tier.id()), ("selected", "selected")], label);
        } else {
            markup.element("option", &[("value", tier.id())], label);
        }
    }

    markup.close("select").close("div");
}
