//! Color handling for SeeWrite diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the fixed palette used to color diagram elements.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Cyclic palette for diagram elements. The first and last entries are
/// intentionally identical; legends and regression snapshots depend on it.
pub const ELEMENT_PALETTE: [&str; 6] = [
    "#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6",
];

/// Fill of the center node in radial views.
pub const CENTER_NODE_COLOR: &str = "#667eea";

/// Stroke of relationship edges in the radial diagram.
pub const EDGE_COLOR: &str = "#e2e8f0";

/// Stroke of flowchart arrows.
pub const ARROW_COLOR: &str = "#94a3b8";

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use seewrite_core::color::Color;
    ///
    /// let violet = Color::new("#8b5cf6").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Parses one of the built-in hex constants of this module.
    fn builtin(hex: &'static str) -> Self {
        Self::new(hex).expect("built-in palette colors are valid CSS hex colors")
    }

    /// Returns the palette color for the element at `index`.
    ///
    /// Colors cycle through [`ELEMENT_PALETTE`], so index 7 shares the color
    /// of index 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use seewrite_core::color::Color;
    ///
    /// assert_eq!(Color::for_element(7), Color::for_element(1));
    /// ```
    pub fn for_element(index: usize) -> Self {
        Self::builtin(Self::element_hex(index))
    }

    /// Returns the palette hex string for the element at `index`.
    pub fn element_hex(index: usize) -> &'static str {
        ELEMENT_PALETTE[index % ELEMENT_PALETTE.len()]
    }

    /// Fill color of the center node.
    pub fn center_node() -> Self {
        Self::builtin(CENTER_NODE_COLOR)
    }

    /// Stroke color of radial relationship edges.
    pub fn edge() -> Self {
        Self::builtin(EDGE_COLOR)
    }

    /// Stroke color of flowchart arrows.
    pub fn arrow() -> Self {
        Self::builtin(ARROW_COLOR)
    }

    /// Plain white, used for node borders and labels.
    pub fn white() -> Self {
        Self::builtin("white")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_builtin_colors_are_opaque() {
        assert!((Color::white().alpha() - 1.0).abs() < 0.001);
        assert!((Color::for_element(3).alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_palette_cycles_every_six() {
        assert_eq!(Color::element_hex(7), Color::element_hex(1));
        assert_eq!(Color::element_hex(6), Color::element_hex(0));
        assert_eq!(Color::for_element(13), Color::for_element(1));
    }

    #[test]
    fn test_palette_first_and_last_match() {
        assert_eq!(Color::element_hex(0), Color::element_hex(5));
        assert_ne!(Color::element_hex(0), Color::element_hex(1));
    }

    #[test]
    fn test_palette_exact_values() {
        let expected = [
            "#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6",
        ];
        for (index, hex) in expected.iter().enumerate() {
            assert_eq!(Color::element_hex(index), *hex);
        }
    }

    #[test]
    fn test_builtin_colors_parse() {
        assert_eq!(Color::center_node(), Color::new("#667eea").unwrap());
        assert_eq!(Color::edge(), Color::new("#e2e8f0").unwrap());
        assert_eq!(Color::arrow(), Color::new("#94a3b8").unwrap());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
