//! Radial diagram layout.
//!
//! Elements sit evenly spaced on a fixed circle around the canvas center,
//! with the content-type node in the middle. Relationships become straight
//! edges between the two element positions.

use std::rc::Rc;

use log::debug;

use seewrite_core::{
    color::Color,
    draw::{CircleDefinition, LineDefinition, PositionedDrawable, Shape, ShapeDefinition, StrokeDefinition},
    geometry::{Point, Size, even_angle},
    model::VisualAnalysis,
};

use super::{DiagramLayout, LabelStyle, LayoutEdge, LayoutEngine, LayoutKind, LayoutNode, NodeRole};
use crate::error::SeewriteError;

const ORBIT_RADIUS: f32 = 120.0;
const BASE_NODE_RADIUS: f32 = 25.0;
const RADIUS_PER_IMPORTANCE: f32 = 5.0;
const NODE_BORDER: f32 = 2.0;
const EDGE_WIDTH: f32 = 2.0;
const LABEL_SIZE: u16 = 12;

pub struct Engine {
    labels: LabelStyle,
}

impl Engine {
    pub(super) fn new(labels: LabelStyle) -> Self {
        Self { labels }
    }

    /// Node radius grows with importance.
    fn node_radius(importance: u32) -> f32 {
        (importance as f32).mul_add(RADIUS_PER_IMPORTANCE, BASE_NODE_RADIUS)
    }

    fn slot(center: Point, index: usize, count: usize) -> Point {
        center.polar_offset(even_angle(index, count), ORBIT_RADIUS)
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, analysis: &VisualAnalysis, canvas: Size) -> Result<DiagramLayout, SeewriteError> {
        super::ensure_canvas(canvas)?;

        let center = canvas.center();
        let count = analysis.elements.len();
        let mut layout = DiagramLayout::new(LayoutKind::Diagram, canvas);

        let edge_line = LineDefinition::new(StrokeDefinition::new(Color::edge(), EDGE_WIDTH));
        for relationship in &analysis.relationships {
            if relationship.from >= count || relationship.to >= count {
                return Err(SeewriteError::Layout(format!(
                    "relationship {} -> {} refers to a missing element, {count} laid out",
                    relationship.from, relationship.to
                )));
            }
            layout.add_edge(LayoutEdge::new(
                Self::slot(center, relationship.from, count),
                Self::slot(center, relationship.to, count),
                edge_line.clone(),
            ));
        }

        for (index, element) in analysis.elements.iter().enumerate() {
            let mut definition = CircleDefinition::new();
            definition.set_fill_color(Some(Color::for_element(index)));
            definition.set_stroke(Some(StrokeDefinition::new(Color::white(), NODE_BORDER)));
            let definition: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(definition));

            let shape = PositionedDrawable::new(Shape::circle(
                definition,
                Self::node_radius(element.importance),
            ))
            .with_position(Self::slot(center, index, count));

            layout.add_node(LayoutNode::new(
                NodeRole::Element(element.id),
                shape,
                (index + 1).to_string(),
                self.labels.white(LABEL_SIZE, true),
            ));
        }

        layout.add_node(super::center_node(canvas, analysis.content_type, &self.labels));

        debug!(nodes = layout.nodes().len(), edges = layout.edges().len(); "Diagram layout calculated");
        Ok(layout)
    }
}
