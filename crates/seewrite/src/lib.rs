//! SeeWrite - Text enhancement and content visualization for descriptions.
//!
//! Turns a plain description into an interactive reading view: a summary,
//! clickable key terms, expandable concepts adapted to the reader's level,
//! follow-up questions and next steps, plus a diagram of the content with
//! three switchable views.
//!
//! # Pipeline
//!
//! ```text
//! Description Text
//!     ↓ analyze (seewrite-analysis)
//! TextAnalysis + VisualAnalysis
//!     ↓ layout
//! DiagramLayout
//!     ↓ export
//! SVG + HTML mounted into a MountPoint
//! ```

pub mod config;
pub mod enhance;
pub mod layout;
pub mod legend;
pub mod markup;
pub mod mount;
pub mod preferences;
pub mod visual;

mod error;
mod export;

pub use seewrite_core::{color, definitions, model};

pub use error::SeewriteError;

use log::{debug, info, warn};

use seewrite_analysis::{ContentVisualizer, TextStructureAnalyzer};
use seewrite_core::{
    geometry::Size,
    model::{TextAnalysis, VisualAnalysis},
};

use config::AppConfig;
use enhance::{EnhancedView, QuestionSink};
use export::{Exporter, svg::SvgBuilder};
use layout::{DiagramLayout, EngineBuilder, LayoutKind};
use mount::MountPoint;
use preferences::PreferenceStore;
use visual::{CANVAS_ELEMENT_ID, VisualPanel};

/// Entry point for analyzing, laying out and rendering descriptions.
///
/// # Examples
///
/// ```
/// use seewrite::{
///     Enhancer,
///     enhance::NoQuestions,
///     mount::{MemoryMount, MountPoint},
///     preferences::MemoryPreferences,
/// };
///
/// let enhancer = Enhancer::default();
/// let view = enhancer
///     .enhance(
///         "The network links every node. Each link carries data packets.",
///         MemoryMount::new(),
///         Box::new(NoQuestions),
///         Box::new(MemoryPreferences::new()),
///     )
///     .expect("Failed to enhance");
///
/// let html = view.mount().to_html();
/// assert!(html.contains("Key Insight"));
/// assert!(html.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct Enhancer {
    config: AppConfig,
}

impl Enhancer {
    /// Create a new enhancer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Canvas, style and reading level settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract the reading structure of `text`. Never fails.
    pub fn analyze_text(&self, text: &str) -> TextAnalysis {
        info!(chars = text.chars().count(); "Analyzing text structure");
        TextStructureAnalyzer::new().analyze(text)
    }

    /// Extract the visual elements of `text`. Never fails.
    pub fn analyze_visual(&self, text: &str) -> VisualAnalysis {
        info!(chars = text.chars().count(); "Analyzing visual content");
        ContentVisualizer::new().analyze(text)
    }

    /// Lay out `analysis` as a `kind` view on the configured canvas.
    ///
    /// # Errors
    ///
    /// Returns [`SeewriteError::Config`] if the configured canvas is invalid,
    /// or [`SeewriteError::Layout`] if the layout cannot be computed.
    pub fn layout(&self, analysis: &VisualAnalysis, kind: LayoutKind) -> Result<DiagramLayout, SeewriteError> {
        let canvas = self.canvas()?;
        let layout = self.engines().engine(kind).calculate(analysis, canvas)?;
        info!(view = kind.id(), nodes = layout.nodes().len(); "Layout calculated");
        Ok(layout)
    }

    /// Render `analysis` as a standalone SVG document of the `kind` view.
    ///
    /// # Errors
    ///
    /// Returns `SeewriteError` for configuration, layout or export errors.
    pub fn render_svg(&self, analysis: &VisualAnalysis, kind: LayoutKind) -> Result<String, SeewriteError> {
        let layout = self.layout(analysis, kind)?;
        let svg = SvgBuilder::new()
            .with_style(self.config.style())
            .build()?
            .export_to_string(&layout)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Build the visual panel of `analysis`, showing the diagram view.
    ///
    /// # Errors
    ///
    /// Returns `SeewriteError` for configuration, layout or export errors.
    pub fn visual_panel(&self, analysis: VisualAnalysis) -> Result<VisualPanel, SeewriteError> {
        let exporter = SvgBuilder::new()
            .with_style(self.config.style())
            .with_element_id(CANVAS_ELEMENT_ID)
            .build()?;

        VisualPanel::new(analysis, self.canvas()?, self.engines(), exporter)
    }

    /// Analyze `text` and mount the enhanced view with its visual panel.
    ///
    /// The reading level is the stored preference, or the configured default
    /// when none is stored or it cannot be read.
    ///
    /// # Errors
    ///
    /// Returns `SeewriteError` if the visual panel cannot be built.
    pub fn enhance<M: MountPoint>(
        &self,
        text: &str,
        mount: M,
        questions: Box<dyn QuestionSink>,
        preferences: Box<dyn PreferenceStore>,
    ) -> Result<EnhancedView<M>, SeewriteError> {
        let default_tier = self.config.level().default_tier();
        let tier = match preferences::load_tier(preferences.as_ref()) {
            Ok(stored) => stored.unwrap_or(default_tier),
            Err(err) => {
                warn!(err:err; "Failed to load reading level, using default");
                default_tier
            }
        };
        debug!(tier = tier.id(); "Reading level selected");

        let structure = self.analyze_text(text);
        let visual = self.analyze_visual(text);
        let panel = self.visual_panel(visual)?;

        let mut view = EnhancedView::new(structure, tier, mount, questions, preferences);
        view.render();
        view.attach_visual(panel);

        info!("Enhanced view mounted");
        Ok(view)
    }

    fn canvas(&self) -> Result<Size, SeewriteError> {
        self.config.canvas().size().map_err(SeewriteError::Config)
    }

    fn engines(&self) -> EngineBuilder {
        EngineBuilder::new().with_font_family(self.config.style().font_family())
    }
}
