//! Layout engines for visual analyses.
//!
//! A [`LayoutEngine`] turns a [`VisualAnalysis`] into a [`DiagramLayout`]:
//! positioned node shapes with their labels plus the connectors between
//! them, all in canvas coordinates. Layouts are pure functions of the
//! analysis and the canvas size, cheap to compute and never cached.
//!
//! Three layout kinds are available:
//!
//! - [`LayoutKind::Diagram`] - elements on a circle around a center node
//! - [`LayoutKind::Flowchart`] - elements left to right joined by arrows
//! - [`LayoutKind::MindMap`] - branches of importance-scaled length around a center node
//!
//! Drawing the layout is left to the exporter, see [`crate::export`].

mod diagram;
mod flowchart;
mod mindmap;

use std::{collections::HashMap, fmt, rc::Rc, str::FromStr};

use seewrite_core::{
    color::Color,
    draw::{
        CircleDefinition, LineDefinition, PositionedDrawable, Shape, ShapeDefinition,
        StrokeDefinition, TextDefinition,
    },
    geometry::{Point, Size},
    model::{ContentType, VisualAnalysis},
};

use crate::error::SeewriteError;

/// Radius of the center node shared by the diagram and mind-map layouts.
const CENTER_NODE_RADIUS: f32 = 35.0;
const CENTER_NODE_BORDER: f32 = 3.0;
const CENTER_LABEL_SIZE: u16 = 12;

const BOLD: u16 = 700;
const REGULAR: u16 = 400;

/// The visualization modes offered by the visual panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    #[default]
    Diagram,
    Flowchart,
    MindMap,
}

impl LayoutKind {
    /// All kinds in the order their view buttons appear.
    pub const ALL: [LayoutKind; 3] = [LayoutKind::Diagram, LayoutKind::Flowchart, LayoutKind::MindMap];

    /// Identifier used on view buttons and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Diagram => "diagram",
            Self::Flowchart => "flowchart",
            Self::MindMap => "mindmap",
        }
    }

    /// Text of the view button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Diagram => "Diagram",
            Self::Flowchart => "Flow",
            Self::MindMap => "Mind Map",
        }
    }

    /// The identifier with its first letter uppercased, as shown in the legend title.
    pub fn legend_name(self) -> &'static str {
        match self {
            Self::Diagram => "Diagram",
            Self::Flowchart => "Flowchart",
            Self::MindMap => "Mindmap",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| format!("Unknown layout kind `{s}`, expected diagram, flowchart or mindmap"))
    }
}

/// What a laid out node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// The visual element with this id
    Element(usize),
    /// The content-type node in the middle of radial layouts
    Center,
}

/// A positioned node shape with its label.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    role: NodeRole,
    shape: PositionedDrawable<Shape>,
    label: String,
    text: TextDefinition,
}

impl LayoutNode {
    pub fn new(role: NodeRole, shape: PositionedDrawable<Shape>, label: String, text: TextDefinition) -> Self {
        Self {
            role,
            shape,
            label,
            text,
        }
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Center of the node in canvas coordinates.
    pub fn position(&self) -> Point {
        self.shape.position()
    }

    pub fn shape(&self) -> &PositionedDrawable<Shape> {
        &self.shape
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text_definition(&self) -> &TextDefinition {
        &self.text
    }
}

/// A straight connector between two points.
#[derive(Debug, Clone)]
pub struct LayoutEdge {
    from: Point,
    to: Point,
    line: LineDefinition,
}

impl LayoutEdge {
    pub fn new(from: Point, to: Point, line: LineDefinition) -> Self {
        Self { from, to, line }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn line(&self) -> &LineDefinition {
        &self.line
    }
}

/// Node positions and edge endpoints for one analysis on one canvas.
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    kind: LayoutKind,
    canvas: Size,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
}

impl DiagramLayout {
    pub fn new(kind: LayoutKind, canvas: Size) -> Self {
        Self {
            kind,
            canvas,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    pub fn add_node(&mut self, node: LayoutNode) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: LayoutEdge) {
        self.edges.push(edge);
    }

    /// The node of the element with `id`, if it was laid out.
    pub fn element_node(&self, id: usize) -> Option<&LayoutNode> {
        self.nodes
            .iter()
            .find(|node| node.role() == NodeRole::Element(id))
    }

    pub fn center_node(&self) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.role() == NodeRole::Center)
    }
}

/// Trait defining the interface for layout engines.
pub trait LayoutEngine {
    /// Calculate the layout of `analysis` on a canvas of `canvas` size.
    ///
    /// # Errors
    ///
    /// Returns [`SeewriteError::Layout`] if the canvas has no area or a
    /// relationship refers to an element that does not exist.
    fn calculate(&self, analysis: &VisualAnalysis, canvas: Size) -> Result<DiagramLayout, SeewriteError>;
}

/// Builder for creating and configuring layout engines.
///
/// Engines are created on first use and cached per [`LayoutKind`].
#[derive(Default)]
pub struct EngineBuilder {
    engines: HashMap<LayoutKind, Box<dyn LayoutEngine>>,
    font_family: Option<String>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family of all node labels.
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    /// Get the engine for `kind` with the configured options.
    pub fn engine(&mut self, kind: LayoutKind) -> &dyn LayoutEngine {
        let labels = LabelStyle::new(self.font_family.as_deref());
        let engine = self.engines.entry(kind).or_insert_with(|| {
            let engine: Box<dyn LayoutEngine> = match kind {
                LayoutKind::Diagram => Box::new(diagram::Engine::new(labels)),
                LayoutKind::Flowchart => Box::new(flowchart::Engine::new(labels)),
                LayoutKind::MindMap => Box::new(mindmap::Engine::new(labels)),
            };
            engine
        });
        &**engine
    }
}

/// Label fonts shared by the engines.
#[derive(Debug, Clone)]
struct LabelStyle {
    font_family: Option<String>,
}

impl LabelStyle {
    fn new(font_family: Option<&str>) -> Self {
        Self {
            font_family: font_family.map(str::to_string),
        }
    }

    /// White label text of `size` pixels.
    fn white(&self, size: u16, bold: bool) -> TextDefinition {
        let mut text = TextDefinition::new();
        if let Some(font_family) = &self.font_family {
            text.set_font_family(font_family);
        }
        text.set_font_size(size);
        text.set_font_weight(if bold { BOLD } else { REGULAR });
        text.set_color(Some(Color::white()));
        text
    }
}

fn ensure_canvas(canvas: Size) -> Result<(), SeewriteError> {
    if canvas.width() <= 0.0 || canvas.height() <= 0.0 {
        return Err(SeewriteError::Layout(format!(
            "canvas has no area: {}x{}",
            canvas.width(),
            canvas.height()
        )));
    }
    Ok(())
}

/// The content-type node in the middle of the canvas.
fn center_node(canvas: Size, content_type: ContentType, labels: &LabelStyle) -> LayoutNode {
    let mut definition = CircleDefinition::new();
    definition.set_fill_color(Some(Color::center_node()));
    definition.set_stroke(Some(StrokeDefinition::new(Color::white(), CENTER_NODE_BORDER)));
    let definition: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(definition));

    let shape = PositionedDrawable::new(Shape::circle(definition, CENTER_NODE_RADIUS))
        .with_position(canvas.center());

    LayoutNode::new(
        NodeRole::Center,
        shape,
        content_type.id().to_uppercase(),
        labels.white(CENTER_LABEL_SIZE, true),
    )
}
