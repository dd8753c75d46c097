//! SVG export backend.
//!
//! [`Svg`] draws a [`DiagramLayout`] into an SVG document the size of the
//! canvas. Edges, nodes and labels are collected into a [`LayeredOutput`] so
//! that connectors always sit below the shapes they join.

use std::io;

use log::{debug, error};
use svg::{Document, node::element as svg_element};

use seewrite_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, Text},
};

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
    layout::DiagramLayout,
};

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    element_id: Option<String>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the background color of `style`.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the `id` attribute of the root `<svg>` element.
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Build the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the configured background color
    /// is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let background_color = match self.style {
            Some(style) => style.background_color().map_err(export::Error::Render)?,
            None => None,
        };

        Ok(Svg {
            background_color,
            element_id: self.element_id,
        })
    }
}

/// SVG exporter for diagram layouts.
#[derive(Debug, Clone)]
pub struct Svg {
    background_color: Option<Color>,
    element_id: Option<String>,
}

impl Svg {
    /// Renders `layout` to an SVG document covering the whole canvas.
    pub fn render_layout(&self, layout: &DiagramLayout) -> Document {
        let canvas = layout.canvas();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", canvas.width(), canvas.height()))
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("data-layout", layout.kind().id());
        if let Some(id) = &self.element_id {
            doc = doc.set("id", id.as_str());
        }

        let mut output = LayeredOutput::new();
        if let Some(color) = self.background_color {
            let background = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(background));
        }

        for edge in layout.edges() {
            output.merge(edge.line().draw(edge.from(), edge.to()));
        }

        for node in layout.nodes() {
            output.merge(node.shape().render_to_layers());
            if !node.label().is_empty() {
                let label = Text::new(node.text_definition(), node.label());
                output.merge(label.render_to_layers(node.position()));
            }
        }

        for group in output.render() {
            doc = doc.add(group);
        }
        doc
    }

    /// Writes an SVG document to `writer`.
    pub fn write_document(&self, doc: &Document, writer: &mut dyn io::Write) -> Result<(), export::Error> {
        if let Err(err) = write!(writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        Ok(())
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &DiagramLayout, writer: &mut dyn io::Write) -> Result<(), export::Error> {
        let doc = self.render_layout(layout);
        debug!(layout = layout.kind().id(); "SVG document rendered");

        self.write_document(&doc, writer)
    }
}

#[cfg(test)]
mod tests {
    use seewrite_core::{
        geometry::Size,
        model::{ContentType, Relationship, VisualAnalysis, VisualElement},
    };

    use super::*;
    use crate::layout::{EngineBuilder, LayoutKind};

    fn analysis() -> VisualAnalysis {
        VisualAnalysis {
            content_type: ContentType::Network,
            elements: (0..3)
                .map(|id| VisualElement {
                    id,
                    text: format!("Node sentence {id}"),
                    keywords: vec!["network".to_string()],
                    importance: 1,
                    position: None,
                })
                .collect(),
            relationships: vec![Relationship {
                from: 0,
                to: 1,
                strength: 0.7,
            }],
            flow_kind: ContentType::Network.flow_kind(),
        }
    }

    fn render(kind: LayoutKind, svg: &Svg) -> String {
        let layout = EngineBuilder::new()
            .engine(kind)
            .calculate(&analysis(), Size::new(600.0, 400.0))
            .unwrap();
        svg.export_to_string(&layout).unwrap()
    }

    #[test]
    fn test_document_covers_canvas() {
        let svg = SvgBuilder::new().with_element_id("educational-canvas").build().unwrap();
        let output = render(LayoutKind::Diagram, &svg);

        assert!(output.starts_with("<svg"));
        assert!(output.contains("viewBox=\"0 0 600 400\""));
        assert!(output.contains("id=\"educational-canvas\""));
        assert!(output.contains("data-layout=\"diagram\""));
        assert!(!output.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_layers_in_order() {
        let svg = SvgBuilder::new().build().unwrap();
        let output = render(LayoutKind::Diagram, &svg);

        let edge = output.find("data-layer=\"edge\"").unwrap();
        let node = output.find("data-layer=\"node\"").unwrap();
        let text = output.find("data-layer=\"text\"").unwrap();
        assert!(edge < node && node < text);
        assert!(output.contains(">NETWORK<"));
    }

    #[test]
    fn test_flowchart_labels_and_arrows() {
        let svg = SvgBuilder::new().build().unwrap();
        let output = render(LayoutKind::Flowchart, &svg);

        assert!(output.contains(">Step 1<"));
        assert!(output.contains(">Step 3<"));
        // two arrows, each a shaft and a barb pair
        assert_eq!(output.matches("<path").count(), 4);
    }

    #[test]
    fn test_background_from_style() {
        let style = StyleConfig::new(Some("#ffffff".to_string()), "Inter");
        let svg = SvgBuilder::new().with_style(&style).build().unwrap();
        let output = render(LayoutKind::MindMap, &svg);

        assert!(output.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_invalid_background_fails_build() {
        let style = StyleConfig::new(Some("nonsense".to_string()), "Inter");
        let result = SvgBuilder::new().with_style(&style).build();
        assert!(matches!(result, Err(export::Error::Render(_))));
    }
}
