//! Text rendering definitions for diagram labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable single-line label combining content with a [`TextDefinition`]
//!
//! Labels are rendered as SVG `<text>` elements on the
//! [`Text`](crate::draw::RenderLayer::Text) layer, centered on their position.

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Defines the visual style for diagram labels.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Inter"` |
/// | Font size | `12` |
/// | Font weight | `400` |
/// | Text color | `None` (SVG default, typically black) |
///
/// # Examples
///
/// ```
/// # use seewrite_core::draw::TextDefinition;
/// # use seewrite_core::color::Color;
/// let mut style = TextDefinition::new();
/// style.set_font_size(11);
/// style.set_font_weight(700);
/// style.set_color(Some(Color::white()));
/// ```
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_weight: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the CSS font weight (400 regular, 700 bold).
    pub fn set_font_weight(&mut self, weight: u16) {
        self.font_weight = weight;
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` keeps the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_weight(&self) -> u16 {
        self.font_weight
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_size: 12,
            font_weight: 400,
            color: None,
        }
    }
}

/// A renderable single-line label.
///
/// # Examples
///
/// ```
/// # use seewrite_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Step 1");
///
/// assert_eq!(text.content(), "Step 1");
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.font_weight());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        rendered_text = rendered_text.add(SvgText::new(self.content));

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }
}
