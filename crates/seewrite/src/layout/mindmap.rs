//! Radial mind-map layout.
//!
//! Branches leave the center node at evenly spaced angles. More important
//! elements get longer branches, each ending in a small rounded box labeled
//! with the element's first keyword.

use std::rc::Rc;

use log::debug;

use seewrite_analysis::tokenize;
use seewrite_core::{
    color::Color,
    draw::{LineDefinition, PositionedDrawable, RectangleDefinition, Shape, ShapeDefinition, StrokeDefinition},
    geometry::{Size, even_angle},
    model::{VisualAnalysis, VisualElement},
};

use super::{DiagramLayout, LabelStyle, LayoutEdge, LayoutEngine, LayoutKind, LayoutNode, NodeRole};
use crate::error::SeewriteError;

const BASE_BRANCH_LENGTH: f32 = 80.0;
const LENGTH_PER_IMPORTANCE: f32 = 20.0;
const BRANCH_WIDTH: f32 = 3.0;
const BRANCH_NODE_WIDTH: f32 = 60.0;
const BRANCH_NODE_HEIGHT: f32 = 25.0;
const BRANCH_NODE_CORNER: f32 = 12.0;
const LABEL_SIZE: u16 = 10;
const LABEL_MAX_CHARS: usize = 8;

pub struct Engine {
    labels: LabelStyle,
}

impl Engine {
    pub(super) fn new(labels: LabelStyle) -> Self {
        Self { labels }
    }

    fn branch_length(importance: u32) -> f32 {
        (importance as f32).mul_add(LENGTH_PER_IMPORTANCE, BASE_BRANCH_LENGTH)
    }

    /// First keyword, or "Item N", cut to the label width.
    fn branch_label(element: &VisualElement, index: usize) -> String {
        let label = element
            .keywords
            .first()
            .cloned()
            .unwrap_or_else(|| format!("Item {}", index + 1));
        tokenize::truncate_chars(&label, LABEL_MAX_CHARS).to_string()
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, analysis: &VisualAnalysis, canvas: Size) -> Result<DiagramLayout, SeewriteError> {
        super::ensure_canvas(canvas)?;

        let center = canvas.center();
        let count = analysis.elements.len();
        let mut layout = DiagramLayout::new(LayoutKind::MindMap, canvas);
        layout.add_node(super::center_node(canvas, analysis.content_type, &self.labels));

        for (index, element) in analysis.elements.iter().enumerate() {
            let color = Color::for_element(index);
            let end = center.polar_offset(even_angle(index, count), Self::branch_length(element.importance));

            layout.add_edge(LayoutEdge::new(
                center,
                end,
                LineDefinition::new(StrokeDefinition::new(color, BRANCH_WIDTH)),
            ));

            let mut definition = RectangleDefinition::new();
            definition.set_fill_color(Some(color));
            definition
                .set_rounded(BRANCH_NODE_CORNER)
                .map_err(|err| SeewriteError::Layout(err.to_string()))?;
            let definition: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(definition));

            let shape = PositionedDrawable::new(Shape::new(
                definition,
                Size::new(BRANCH_NODE_WIDTH, BRANCH_NODE_HEIGHT),
            ))
            .with_position(end);

            layout.add_node(LayoutNode::new(
                NodeRole::Element(element.id),
                shape,
                Self::branch_label(element, index),
                self.labels.white(LABEL_SIZE, false),
            ));
        }

        debug!(nodes = layout.nodes().len(), edges = layout.edges().len(); "Mind map layout calculated");
        Ok(layout)
    }
}
