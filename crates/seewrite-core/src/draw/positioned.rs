//! Provides `PositionedDrawable`, a wrapper for a Drawable and its absolute position.

use crate::{
    draw::{Drawable, LayeredOutput},
    geometry::Point,
};

/// A drawable object together with an absolute position.
#[derive(Debug, Clone)]
pub struct PositionedDrawable<D: Drawable> {
    drawable: D,
    position: Point,
}

impl<D: Drawable> PositionedDrawable<D> {
    /// Construct a new `PositionedDrawable` from a drawable (position defaults to zero).
    pub fn new(drawable: D) -> Self {
        Self {
            drawable,
            position: Point::default(),
        }
    }

    /// Set the position for this drawable (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Render this positioned drawable to layers at its stored position.
    pub fn render_to_layers(&self) -> LayeredOutput {
        self.drawable.render_to_layers(self.position)
    }

    pub fn inner(&self) -> &D {
        &self.drawable
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl<D: Drawable> Drawable for PositionedDrawable<D> {
    fn render_to_layers(&self, _position: Point) -> LayeredOutput {
        // Stored position wins
        self.render_to_layers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Text, TextDefinition};

    #[test]
    fn test_positioned_drawable_defaults_to_origin() {
        let text_def = TextDefinition::default();
        let positioned = PositionedDrawable::new(Text::new(&text_def, "Step 1"));

        assert_eq!(positioned.position(), Point::default());
        assert_eq!(positioned.inner().content(), "Step 1");
    }

    #[test]
    fn test_positioned_drawable_renders_at_position() {
        let text_def = TextDefinition::default();
        let positioned = PositionedDrawable::new(Text::new(&text_def, "Mind Map"))
            .with_position(Point::new(100.0, 50.0));

        let svg: String = positioned
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(svg.contains("x=\"100\""));
        assert!(svg.contains("y=\"50\""));
    }

    #[test]
    fn test_trait_render_ignores_passed_position() {
        let text_def = TextDefinition::default();
        let positioned = PositionedDrawable::new(Text::new(&text_def, "1"))
            .with_position(Point::new(100.0, 100.0));

        let via_trait: String = Drawable::render_to_layers(&positioned, Point::new(999.0, 999.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(via_trait.contains("x=\"100\""));
        assert!(!via_trait.contains("999"));
    }
}
