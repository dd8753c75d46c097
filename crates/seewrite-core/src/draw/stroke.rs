//! Stroke definitions for edges, arrows and node borders.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#e2e8f0"`, `1` |
//! | `width` | `stroke-width` | `2.0` |

use crate::color::Color;

/// A solid stroke of one color and width.
///
/// # Examples
///
/// ```
/// use seewrite_core::draw::StrokeDefinition;
/// use seewrite_core::color::Color;
///
/// let stroke = StrokeDefinition::new(Color::edge(), 2.0);
/// assert_eq!(stroke.width(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply the stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use seewrite_core::draw::StrokeDefinition;
/// use seewrite_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::white(), 2.0);
/// let circle = svg_element::Circle::new().set("r", 30);
///
/// let circle = seewrite_core::apply_stroke!(circle, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::new(Color::arrow(), 3.0);
        assert_eq!(stroke.color(), Color::arrow());

        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke).to_string();
        assert!(line.contains("stroke-width=\"3\""));
        assert!(!line.contains("stroke-linecap"));
    }
}
