//! Linear flowchart layout.
//!
//! Elements become "Step N" boxes on the horizontal center line, spread
//! between fixed side margins, with an arrow between consecutive steps.

use std::rc::Rc;

use log::debug;

use seewrite_core::{
    color::Color,
    draw::{
        ArrowHead, LineDefinition, PositionedDrawable, RectangleDefinition, Shape, ShapeDefinition,
        StrokeDefinition,
    },
    geometry::{Point, Size},
    model::VisualAnalysis,
};

use super::{DiagramLayout, LabelStyle, LayoutEdge, LayoutEngine, LayoutKind, LayoutNode, NodeRole};
use crate::error::SeewriteError;

const SIDE_MARGIN: f32 = 50.0;
const STEP_WIDTH: f32 = 80.0;
const STEP_HEIGHT: f32 = 40.0;
const NODE_BORDER: f32 = 2.0;
const ARROW_WIDTH: f32 = 2.0;
const LABEL_SIZE: u16 = 11;

pub struct Engine {
    labels: LabelStyle,
}

impl Engine {
    pub(super) fn new(labels: LabelStyle) -> Self {
        Self { labels }
    }

    /// Horizontal distance between consecutive step centers.
    fn step(canvas: Size, count: usize) -> f32 {
        (canvas.width() - 2.0 * SIDE_MARGIN) / count.saturating_sub(1).max(1) as f32
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, analysis: &VisualAnalysis, canvas: Size) -> Result<DiagramLayout, SeewriteError> {
        super::ensure_canvas(canvas)?;

        let count = analysis.elements.len();
        let step = Self::step(canvas, count);
        let y = canvas.height() / 2.0;
        let half_step_width = STEP_WIDTH / 2.0;

        let mut arrow = LineDefinition::new(StrokeDefinition::new(Color::arrow(), ARROW_WIDTH));
        arrow.set_head(Some(ArrowHead::default()));

        let mut layout = DiagramLayout::new(LayoutKind::Flowchart, canvas);
        for (index, element) in analysis.elements.iter().enumerate() {
            let x = (index as f32).mul_add(step, SIDE_MARGIN);

            if index + 1 < count {
                // Inset from both box centers by half a box width
                layout.add_edge(LayoutEdge::new(
                    Point::new(x + half_step_width, y),
                    Point::new(x + step - half_step_width, y),
                    arrow.clone(),
                ));
            }

            let mut definition = RectangleDefinition::new();
            definition.set_fill_color(Some(Color::for_element(index)));
            definition.set_stroke(Some(StrokeDefinition::new(Color::white(), NODE_BORDER)));
            let definition: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(definition));

            let shape = PositionedDrawable::new(Shape::new(definition, Size::new(STEP_WIDTH, STEP_HEIGHT)))
                .with_position(Point::new(x, y));

            layout.add_node(LayoutNode::new(
                NodeRole::Element(element.id),
                shape,
                format!("Step {}", index + 1),
                self.labels.white(LABEL_SIZE, true),
            ));
        }

        debug!(nodes = layout.nodes().len(), edges = layout.edges().len(); "Flowchart layout calculated");
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use seewrite_core::model::{ContentType, VisualElement};

    use super::*;

    fn analysis(count: usize) -> VisualAnalysis {
        VisualAnalysis {
            content_type: ContentType::Process,
            elements: (0..count)
                .map(|id| VisualElement {
                    id,
                    text: format!("Step sentence {id}"),
                    keywords: Vec::new(),
                    importance: 0,
                    position: None,
                })
                .collect(),
            relationships: Vec::new(),
            flow_kind: ContentType::Process.flow_kind(),
        }
    }

    fn engine() -> Engine {
        Engine::new(LabelStyle::new(None))
    }

    fn node_svg(node: &LayoutNode) -> String {
        node.shape()
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_steps_spread_between_margins() {
        let layout = engine().calculate(&analysis(3), Size::new(600.0, 400.0)).unwrap();

        let xs: Vec<f32> = layout.nodes().iter().map(|node| node.position().x()).collect();
        assert_approx_eq!(f32, xs[0], 50.0);
        assert_approx_eq!(f32, xs[1], 300.0);
        assert_approx_eq!(f32, xs[2], 550.0);
        assert!(layout.nodes().iter().all(|node| node.position().y() == 200.0));
        assert_eq!(layout.nodes()[2].label(), "Step 3");
    }

    #[test]
    fn test_arrows_between_consecutive_steps() {
        let layout = engine().calculate(&analysis(3), Size::new(600.0, 400.0)).unwrap();

        assert_eq!(layout.edges().len(), 2);
        let first = &layout.edges()[0];
        assert_approx_eq!(f32, first.from().x(), 90.0);
        assert_approx_eq!(f32, first.to().x(), 260.0);
        assert!(first.line().head().is_some());
        assert_eq!(first.line().stroke().color(), Color::arrow());
    }

    #[test]
    fn test_single_step_uses_full_width_step() {
        assert_approx_eq!(f32, Engine::step(Size::new(600.0, 400.0), 1), 500.0);
        assert_approx_eq!(f32, Engine::step(Size::new(600.0, 400.0), 0), 500.0);

        let layout = engine().calculate(&analysis(1), Size::new(600.0, 400.0)).unwrap();
        assert_eq!(layout.nodes().len(), 1);
        assert!(layout.edges().is_empty());
    }

    #[test]
    fn test_step_boxes_have_border() {
        let layout = engine().calculate(&analysis(2), Size::new(600.0, 400.0)).unwrap();
        let svg = node_svg(&layout.nodes()[0]);
        assert!(svg.contains("width=\"80\""));
        assert!(svg.contains("height=\"40\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(layout.center_node().is_none());
    }
}
