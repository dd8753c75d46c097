//! Straight connectors between two points.
//!
//! A [`LineDefinition`] draws relationship edges, flow arrows and mind-map
//! branches. An optional [`ArrowHead`] adds an open two-stroke head at the
//! destination end.

use std::f32::consts::FRAC_PI_6;

use svg::node::element as svg_element;

use crate::{
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// An open arrow head made of two strokes meeting at the line end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    length: f32,
    spread: f32,
}

impl ArrowHead {
    /// Creates an arrow head with the given stroke length and half-angle in radians.
    pub fn new(length: f32, spread: f32) -> Self {
        Self { length, spread }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn spread(&self) -> f32 {
        self.spread
    }

    /// The two barb end points for a head sitting at `tip` on a line
    /// travelling at `angle`.
    pub fn barbs(&self, tip: Point, angle: f32) -> [Point; 2] {
        let back = angle + std::f32::consts::PI;
        [
            tip.polar_offset(back + self.spread, self.length),
            tip.polar_offset(back - self.spread, self.length),
        ]
    }
}

impl Default for ArrowHead {
    /// 10px barbs at 30 degrees either side of the line.
    fn default() -> Self {
        Self::new(10.0, FRAC_PI_6)
    }
}

/// Style of a straight connector.
///
/// # Examples
///
/// ```
/// # use seewrite_core::draw::{ArrowHead, LineDefinition, StrokeDefinition};
/// # use seewrite_core::color::Color;
/// # use seewrite_core::geometry::Point;
/// let mut line = LineDefinition::new(StrokeDefinition::new(Color::arrow(), 2.0));
/// line.set_head(Some(ArrowHead::default()));
///
/// let output = line.draw(Point::new(90.0, 200.0), Point::new(173.0, 200.0));
/// assert!(!output.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct LineDefinition {
    stroke: StrokeDefinition,
    head: Option<ArrowHead>,
}

impl LineDefinition {
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self { stroke, head: None }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn head(&self) -> Option<ArrowHead> {
        self.head
    }

    pub fn set_head(&mut self, head: Option<ArrowHead>) {
        self.head = head;
    }

    /// Create a path data string from two points
    pub fn create_path_data_from_points(start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    /// Draws the connector from `from` to `to` on the edge layer.
    pub fn draw(&self, from: Point, to: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line = svg_element::Path::new()
            .set("d", Self::create_path_data_from_points(from, to))
            .set("fill", "none");
        let line = crate::apply_stroke!(line, &self.stroke);
        output.add_to_layer(RenderLayer::Edge, Box::new(line));

        if let Some(head) = self.head {
            let [left, right] = head.barbs(to, from.angle_to(to));
            let data = format!(
                "{} {}",
                Self::create_path_data_from_points(to, left),
                Self::create_path_data_from_points(to, right)
            );
            let barbs = svg_element::Path::new().set("d", data).set("fill", "none");
            let barbs = crate::apply_stroke!(barbs, &self.stroke);
            output.add_to_layer(RenderLayer::Edge, Box::new(barbs));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::color::Color;

    fn render(output: LayeredOutput) -> String {
        output.render().iter().map(|node| node.to_string()).collect()
    }

    #[test]
    fn test_plain_line_has_single_path() {
        let line = LineDefinition::new(StrokeDefinition::new(Color::edge(), 2.0));
        let svg = render(line.draw(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));

        assert!(svg.contains("data-layer=\"edge\""));
        assert!(svg.contains("M 0 0 L 10 0"));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn test_arrow_head_adds_barbs() {
        let mut line = LineDefinition::new(StrokeDefinition::new(Color::arrow(), 2.0));
        line.set_head(Some(ArrowHead::default()));
        let svg = render(line.draw(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));

        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_barbs_point_back_along_line() {
        let head = ArrowHead::default();
        let [left, right] = head.barbs(Point::new(100.0, 0.0), 0.0);

        // cos(30deg) * 10
        assert_approx_eq!(f32, left.x(), 100.0 - 8.660_254, epsilon = 1e-3);
        assert_approx_eq!(f32, right.x(), 100.0 - 8.660_254, epsilon = 1e-3);
        assert_approx_eq!(f32, left.y().abs(), 5.0, epsilon = 1e-3);
        assert_approx_eq!(f32, left.y(), -right.y(), epsilon = 1e-3);
    }
}
