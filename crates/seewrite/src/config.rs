//! Configuration types for SeeWrite rendering.
//!
//! This module provides configuration structures that control the canvas the
//! visualizations are laid out on, how they are styled and which reading
//! level applies when no preference has been stored. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining all sections.
//! - [`CanvasConfig`] - Canvas dimensions used by the layout engines.
//! - [`StyleConfig`] - Visual styling options such as background color.
//! - [`LevelConfig`] - The default reading [`Tier`].
//!
//! # Example
//!
//! ```
//! # use seewrite::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.canvas().size().unwrap().width(), 600.0);
//! ```

use serde::Deserialize;

use seewrite_core::{color::Color, geometry::Size, model::Tier};

const DEFAULT_CANVAS_WIDTH: f32 = 600.0;
const DEFAULT_CANVAS_HEIGHT: f32 = 400.0;
const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Reading level configuration section.
    #[serde(default)]
    level: LevelConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Canvas dimensions for the visualizations.
    /// * `style` - Visual styling options.
    /// * `level` - Reading level defaults.
    pub fn new(canvas: CanvasConfig, style: StyleConfig, level: LevelConfig) -> Self {
        Self {
            canvas,
            style,
            level,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the reading level configuration.
    pub fn level(&self) -> &LevelConfig {
        &self.level
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    width: f32,

    #[serde(default = "default_canvas_height")]
    height: f32,
}

fn default_canvas_width() -> f32 {
    DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> f32 {
    DEFAULT_CANVAS_HEIGHT
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the canvas [`Size`].
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not a positive finite number.
    pub fn size(&self) -> Result<Size, String> {
        let valid = |value: f32| value.is_finite() && value > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(format!(
                "Invalid canvas size in config: {}x{}",
                self.width, self.height
            ));
        }
        Ok(Size::new(self.width, self.height))
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

/// Visual styling configuration for rendered visualizations.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] of the canvas, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used for node labels.
    #[serde(default = "default_font_family")]
    font_family: String,
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

impl StyleConfig {
    pub fn new(background_color: Option<String>, font_family: impl Into<String>) -> Self {
        Self {
            background_color,
            font_family: font_family.into(),
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_FONT_FAMILY)
    }
}

/// Reading level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelConfig {
    /// Tier used when no preference has been stored.
    #[serde(default)]
    default_tier: Tier,
}

impl LevelConfig {
    pub fn new(default_tier: Tier) -> Self {
        Self { default_tier }
    }

    pub fn default_tier(&self) -> Tier {
        self.default_tier
    }
}
