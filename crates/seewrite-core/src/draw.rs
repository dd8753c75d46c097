//! Drawable Components for Diagram Rendering
//!
//! This module provides drawable abstractions used by the SVG exporter. All
//! positioned components implement the [`Drawable`] trait, which renders into
//! z-ordered layers ([`LayeredOutput`]). Connectors are
//! drawn between two points by a [`LineDefinition`] instead.

mod layer;
mod line;
mod positioned;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::{ArrowHead, LineDefinition};
pub use positioned::PositionedDrawable;
pub use shape::{CircleDefinition, RectangleDefinition, Shape, ShapeDefinition};
pub use stroke::StrokeDefinition;
pub use text::{Text, TextDefinition};

use crate::geometry::Point;

/// A visual element that can be rendered at a position.
pub trait Drawable: std::fmt::Debug {
    /// Render this drawable centered at `position`, sorted into layers.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
