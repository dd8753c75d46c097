//! The visual panel: diagram, view buttons and legend.
//!
//! A [`VisualPanel`] owns one [`VisualAnalysis`] for its whole lifetime.
//! Switching views recomputes the layout and the SVG, never the analysis.

use log::debug;

use seewrite_core::{geometry::Size, model::VisualAnalysis};

use crate::{
    error::SeewriteError,
    export::{Exporter, svg::Svg},
    layout::{DiagramLayout, EngineBuilder, LayoutKind},
    legend::Legend,
    markup::Markup,
    mount::MountPoint,
};

/// `id` of the diagram's root `<svg>` element.
pub const CANVAS_ELEMENT_ID: &str = "educational-canvas";

pub struct VisualPanel {
    analysis: VisualAnalysis,
    active: LayoutKind,
    canvas: Size,
    engines: EngineBuilder,
    exporter: Svg,
    layout: DiagramLayout,
    html: String,
}

impl VisualPanel {
    /// Creates a panel showing the diagram view of `analysis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the diagram cannot be laid out or exported.
    pub(crate) fn new(
        analysis: VisualAnalysis,
        canvas: Size,
        mut engines: EngineBuilder,
        exporter: Svg,
    ) -> Result<Self, SeewriteError> {
        let active = LayoutKind::default();
        let layout = engines.engine(active).calculate(&analysis, canvas)?;

        let mut panel = Self {
            analysis,
            active,
            canvas,
            engines,
            exporter,
            layout,
            html: String::new(),
        };
        panel.html = panel.render_html()?;
        Ok(panel)
    }

    /// Switches to the `kind` view.
    ///
    /// # Errors
    ///
    /// Returns an error if the new layout cannot be computed or exported. The
    /// panel keeps showing the previous view in that case.
    pub fn select(&mut self, kind: LayoutKind) -> Result<(), SeewriteError> {
        let layout = self.engines.engine(kind).calculate(&self.analysis, self.canvas)?;
        let previous = std::mem::replace(&mut self.layout, layout);
        let previous_kind = std::mem::replace(&mut self.active, kind);

        match self.render_html() {
            Ok(html) => {
                debug!(view = kind.id(); "Visual view selected");
                self.html = html;
                Ok(())
            }
            Err(err) => {
                self.layout = previous;
                self.active = previous_kind;
                Err(err)
            }
        }
    }

    pub fn active(&self) -> LayoutKind {
        self.active
    }

    pub fn analysis(&self) -> &VisualAnalysis {
        &self.analysis
    }

    pub fn layout(&self) -> &DiagramLayout {
        &self.layout
    }

    pub fn legend(&self) -> Legend {
        Legend::new(&self.analysis, self.active)
    }

    /// The panel markup for the active view.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Places the panel into `mount`, replacing its content.
    pub fn mount_into(&self, mount: &mut dyn MountPoint) {
        mount.set_content(self.html.clone());
    }

    fn render_html(&self) -> Result<String, SeewriteError> {
        let svg = self.exporter.export_to_string(&self.layout)?;

        let mut markup = Markup::new();
        markup
            .open("div", &[("class", "canvas-container")])
            .open("div", &[("class", "canvas-header")])
            .open("h4", &[])
            .element("i", &[("class", "fas fa-project-diagram")], "")
            .text(" Visual Understanding")
            .close("h4")
            .open("div", &[("class", "canvas-controls")]);

        for kind in LayoutKind::ALL {
            let class = if kind == self.active {
                "canvas-btn active"
            } else {
                "canvas-btn"
            };
            markup.element(
                "button",
                &[("class", class), ("data-type", kind.id())],
                kind.label(),
            );
        }

        markup.close("div").close("div").raw(&svg);
        self.legend().write_html(&mut markup);
        markup.close("div");

        Ok(markup.into_string())
    }
}

impl std::fmt::Debug for VisualPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualPanel")
            .field("analysis", &self.analysis)
            .field("active", &self.active)
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use seewrite_analysis::ContentVisualizer;

    use super::*;
    use crate::{export::svg::SvgBuilder, mount::MemoryMount};

    const SAMPLE: &str = "This framework enables rapid prototyping. The system connects multiple components. Engineers test the algorithm extensively.";

    fn panel() -> VisualPanel {
        let analysis = ContentVisualizer::new().analyze(SAMPLE);
        let exporter = SvgBuilder::new()
            .with_element_id(CANVAS_ELEMENT_ID)
            .build()
            .unwrap();
        VisualPanel::new(analysis, Size::new(600.0, 400.0), EngineBuilder::new(), exporter).unwrap()
    }

    #[test]
    fn test_starts_with_diagram() {
        let panel = panel();
        assert_eq!(panel.active(), LayoutKind::Diagram);
        assert!(panel.html().contains("<button class=\"canvas-btn active\" data-type=\"diagram\">Diagram</button>"));
        assert!(panel.html().contains("<button class=\"canvas-btn\" data-type=\"mindmap\">Mind Map</button>"));
        assert!(panel.html().contains("id=\"educational-canvas\""));
        assert!(panel.html().contains("Diagram Elements:"));
    }

    #[test]
    fn test_select_keeps_analysis() {
        let mut panel = panel();
        let before = panel.analysis().clone();

        panel.select(LayoutKind::Flowchart).unwrap();
        assert_eq!(panel.active(), LayoutKind::Flowchart);
        assert_eq!(panel.layout().kind(), LayoutKind::Flowchart);
        assert_eq!(panel.analysis(), &before);
        assert!(panel.html().contains("data-layout=\"flowchart\""));
        assert!(panel.html().contains("Flowchart Elements:"));
        assert!(panel.html().contains("<button class=\"canvas-btn active\" data-type=\"flowchart\">Flow</button>"));
    }

    #[test]
    fn test_mount_into() {
        let panel = panel();
        let mut mount = MemoryMount::new();
        panel.mount_into(&mut mount);
        assert_eq!(mount.to_html(), panel.html());
    }

    #[test]
    fn test_legend_follows_active_view() {
        let mut panel = panel();
        panel.select(LayoutKind::MindMap).unwrap();
        let legend = panel.legend();
        assert_eq!(legend.title(), "Mindmap Elements:");
        assert_eq!(legend.items().len(), 3);
    }
}
