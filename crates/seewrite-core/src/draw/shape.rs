//! Shape definitions and rendering traits.
//!
//! This module provides the [`ShapeDefinition`] trait and the [`Shape`]
//! wrapper for the node shapes used by the visualizations: circles for
//! diagram nodes and the center node, rectangles for flow steps and
//! rounded rectangles for mind-map branches.

use std::rc::Rc;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// A trait for shape definitions that provide stateless rendering.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Renders this shape to an SVG node element.
    ///
    /// # Arguments
    ///
    /// * `size` - The dimensions of the shape to render, excluding the stroke.
    /// * `position` - The center position of the shape.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;

    /// Creates a boxed clone of this shape definition.
    fn clone_box(&self) -> Box<dyn ShapeDefinition>;

    /// Get the fill color of the shape, if any.
    fn fill_color(&self) -> Option<Color>;

    /// Get the border stroke of the shape, if any.
    fn stroke(&self) -> Option<&StrokeDefinition>;

    /// Set the fill color for the shape.
    fn set_fill_color(&mut self, color: Option<Color>);

    /// Set the border stroke for the shape.
    fn set_stroke(&mut self, stroke: Option<StrokeDefinition>);

    /// Set the corner rounding for the shape.
    fn set_rounded(&mut self, _radius: f32) -> Result<(), &'static str> {
        Err("rounded corners are not supported for this shape")
    }
}

/// Enable cloning of `Box<dyn ShapeDefinition>` by delegating to the clone_box method.
impl Clone for Box<dyn ShapeDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Circle shape definition. The radius comes from the [`Shape`] size.
#[derive(Debug, Clone, Default)]
pub struct CircleDefinition {
    fill_color: Option<Color>,
    stroke: Option<StrokeDefinition>,
}

impl CircleDefinition {
    /// Create a new circle definition with no fill and no border.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeDefinition for CircleDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let radius = size.width().min(size.height()) / 2.0;

        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", radius)
            .set("fill", "none");

        if let Some(fill_color) = self.fill_color {
            circle = circle
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }

        if let Some(stroke) = &self.stroke {
            circle = crate::apply_stroke!(circle, stroke);
        }

        circle.into()
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    fn set_stroke(&mut self, stroke: Option<StrokeDefinition>) {
        self.stroke = stroke;
    }
}

/// Rectangle shape definition, optionally with rounded corners.
#[derive(Debug, Clone, Default)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: Option<StrokeDefinition>,
    rounded: f32,
}

impl RectangleDefinition {
    /// Create a new rectangle definition with sharp corners, no fill and no border.
    pub fn new() -> Self {
        Self::default()
    }

    /// Corner radius in pixels.
    pub fn rounded(&self) -> f32 {
        self.rounded
    }
}

impl ShapeDefinition for RectangleDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // position is the center of the rectangle
        let corner = position.top_left(size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", corner.x())
            .set("y", corner.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", "none");

        if self.rounded > 0.0 {
            rect = rect.set("rx", self.rounded).set("ry", self.rounded);
        }

        if let Some(fill_color) = self.fill_color {
            rect = rect
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }

        if let Some(stroke) = &self.stroke {
            rect = crate::apply_stroke!(rect, stroke);
        }

        rect.into()
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    fn set_stroke(&mut self, stroke: Option<StrokeDefinition>) {
        self.stroke = stroke;
    }

    fn set_rounded(&mut self, radius: f32) -> Result<(), &'static str> {
        if radius < 0.0 {
            return Err("corner radius cannot be negative");
        }
        self.rounded = radius;
        Ok(())
    }
}

/// A shape instance that combines a definition with its size.
#[derive(Debug, Clone)]
pub struct Shape {
    definition: Rc<Box<dyn ShapeDefinition>>,
    size: Size,
}

impl Shape {
    pub fn new(definition: Rc<Box<dyn ShapeDefinition>>, size: Size) -> Self {
        Self { definition, size }
    }

    /// A circle shape of the given radius.
    pub fn circle(definition: Rc<Box<dyn ShapeDefinition>>, radius: f32) -> Self {
        Self::new(definition, Size::new(radius * 2.0, radius * 2.0))
    }

    pub fn definition(&self) -> &dyn ShapeDefinition {
        &**self.definition
    }
}

impl Drawable for Shape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let node = self.definition.render_to_svg(self.size, position);
        output.add_to_layer(RenderLayer::Node, node);
        output
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn render(shape: &Shape, position: Point) -> String {
        shape
            .render_to_layers(position)
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_circle_renders_radius_and_fill() {
        let mut definition = CircleDefinition::new();
        definition.set_fill_color(Some(Color::for_element(0)));
        definition.set_stroke(Some(StrokeDefinition::new(Color::white(), 2.0)));
        let shape = Shape::circle(Rc::new(Box::new(definition)), 30.0);

        let svg = render(&shape, Point::new(420.0, 200.0));
        assert!(svg.contains("data-layer=\"node\""));
        assert!(svg.contains("r=\"30\""));
        assert!(svg.contains("cx=\"420\""));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_circle_radius_excludes_stroke() {
        let mut definition = CircleDefinition::new();
        definition.set_stroke(Some(StrokeDefinition::new(Color::white(), 3.0)));
        let shape = Shape::circle(Rc::new(Box::new(definition)), 35.0);

        let svg = render(&shape, Point::new(300.0, 200.0));
        assert!(svg.contains("r=\"35\""));
        assert!(svg.contains("stroke-width=\"3\""));
    }

    #[test]
    fn test_rectangle_is_centered_on_position() {
        let shape = Shape::new(
            Rc::new(Box::new(RectangleDefinition::new())),
            Size::new(80.0, 40.0),
        );

        let svg = render(&shape, Point::new(50.0, 200.0));
        assert!(svg.contains("x=\"10\""));
        assert!(svg.contains("y=\"180\""));
        assert!(!svg.contains("rx="));
    }

    #[test]
    fn test_rounded_rectangle() {
        let mut definition = RectangleDefinition::new();
        assert!(definition.set_rounded(12.0).is_ok());
        assert!(definition.set_rounded(-1.0).is_err());
        assert_approx_eq!(f32, definition.rounded(), 12.0);

        let shape = Shape::new(Rc::new(Box::new(definition)), Size::new(60.0, 25.0));
        assert!(render(&shape, Point::default()).contains("rx=\"12\""));
    }

    #[test]
    fn test_circle_does_not_support_rounding() {
        let mut definition = CircleDefinition::new();
        assert!(definition.set_rounded(4.0).is_err());
    }
}
