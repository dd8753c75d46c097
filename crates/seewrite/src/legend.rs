//! Legend listing the visualized elements under the canvas.

use seewrite_analysis::tokenize;
use seewrite_core::{color::Color, model::VisualAnalysis};

use crate::{layout::LayoutKind, markup::Markup};

/// Characters of element text shown per legend entry.
const ITEM_TEXT_CHARS: usize = 50;

/// One legend entry: the element color swatch and its abbreviated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    color: &'static str,
    text: String,
}

impl LegendItem {
    pub fn color(&self) -> &'static str {
        self.color
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Legend for an analysis shown in one layout kind.
///
/// # Examples
///
/// ```
/// # use seewrite::{layout::LayoutKind, legend::Legend};
/// # use seewrite_analysis::ContentVisualizer;
/// let analysis = ContentVisualizer::new().analyze("The network links every node together.");
/// let legend = Legend::new(&analysis, LayoutKind::MindMap);
///
/// assert_eq!(legend.title(), "Mindmap Elements:");
/// assert_eq!(legend.items()[0].text(), "1. The network links every node together...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    title: String,
    items: Vec<LegendItem>,
}

impl Legend {
    pub fn new(analysis: &VisualAnalysis, kind: LayoutKind) -> Self {
        let items = analysis
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| LegendItem {
                color: Color::element_hex(index),
                text: format!(
                    "{}. {}...",
                    index + 1,
                    tokenize::truncate_chars(&element.text, ITEM_TEXT_CHARS)
                ),
            })
            .collect();

        Self {
            title: format!("{} Elements:", kind.legend_name()),
            items,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[LegendItem] {
        &self.items
    }

    pub fn write_html(&self, markup: &mut Markup) {
        markup
            .open("div", &[("class", "canvas-legend")])
            .element("div", &[("class", "legend-title")], &self.title);

        for item in &self.items {
            let swatch = format!("background: {}", item.color);
            markup
                .open("div", &[("class", "legend-item")])
                .element("span", &[("class", "legend-color"), ("style", swatch.as_str())], "")
                .element("span", &[("class", "legend-text")], &item.text)
                .close("div");
        }

        markup.close("div");
    }
}

#[cfg(test)]
mod tests {
    use seewrite_core::model::{ContentType, VisualElement};

    use super::*;

    fn analysis(texts: &[&str]) -> VisualAnalysis {
        VisualAnalysis {
            content_type: ContentType::Concept,
            elements: texts
                .iter()
                .enumerate()
                .map(|(id, text)| VisualElement {
                    id,
                    text: text.to_string(),
                    keywords: Vec::new(),
                    importance: 0,
                    position: None,
                })
                .collect(),
            relationships: Vec::new(),
            flow_kind: ContentType::Concept.flow_kind(),
        }
    }

    #[test]
    fn test_titles_per_kind() {
        let analysis = analysis(&[]);
        assert_eq!(Legend::new(&analysis, LayoutKind::Diagram).title(), "Diagram Elements:");
        assert_eq!(Legend::new(&analysis, LayoutKind::Flowchart).title(), "Flowchart Elements:");
        assert!(Legend::new(&analysis, LayoutKind::MindMap).items().is_empty());
    }

    #[test]
    fn test_item_text_is_cut_to_fifty_chars() {
        let long = "a".repeat(60);
        let legend = Legend::new(&analysis(&[&long, "Short one"]), LayoutKind::Diagram);

        assert_eq!(legend.items()[0].text(), format!("1. {}...", "a".repeat(50)));
        assert_eq!(legend.items()[1].text(), "2. Short one...");
        assert_eq!(legend.items()[1].color(), "#06b6d4");
    }

    #[test]
    fn test_html_has_swatches() {
        let legend = Legend::new(&analysis(&["First element here"]), LayoutKind::Diagram);
        let mut markup = Markup::new();
        legend.write_html(&mut markup);
        let html = markup.into_string();

        assert!(html.starts_with("<div class=\"canvas-legend\">"));
        assert!(html.contains("style=\"background: #8b5cf6\""));
        assert!(html.contains("<span class=\"legend-text\">1. First element here...</span>"));
    }
}
