//! Analysis results derived from a description.
//!
//! Two independent analyses are produced from the same text:
//!
//! - [`TextAnalysis`] - summary, key terms, concepts, questions, action items
//!   and the complexity [`Tier`]
//! - [`VisualAnalysis`] - the [`ContentType`], ranked [`VisualElement`]s,
//!   their [`Relationship`]s and the derived [`FlowKind`]
//!
//! All types serialize with camelCase field names and lowercase enum values.

use std::{fmt, str::FromStr};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Reading level used for complexity classification and for adapting
/// rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Tier {
    /// All tiers in ascending order of detail.
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    /// Lowercase identifier, as used in preferences and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Capitalized label shown on badges and selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown tier `{other}`, expected beginner, intermediate or advanced"
            )),
        }
    }
}

/// A short titled excerpt of the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub title: String,
    pub content: String,
    pub importance: u32,
}

/// Structure extracted from a description for the enhanced reading view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub original_text: String,
    pub summary: String,
    /// Deduplicated, at most six, in discovery order.
    pub key_terms: IndexSet<String>,
    pub concepts: Vec<Concept>,
    pub questions: Vec<String>,
    pub action_items: Vec<String>,
    pub complexity: Tier,
}

/// Rhetorical shape of a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Process,
    System,
    Network,
    Hierarchy,
    Comparison,
    Cycle,
    Concept,
}

impl ContentType {
    /// Detectable types in match priority order. [`ContentType::Concept`] is
    /// the fallback and never matched directly.
    pub const DETECTION_ORDER: [ContentType; 6] = [
        ContentType::Process,
        ContentType::System,
        ContentType::Network,
        ContentType::Hierarchy,
        ContentType::Comparison,
        ContentType::Cycle,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::System => "system",
            Self::Network => "network",
            Self::Hierarchy => "hierarchy",
            Self::Comparison => "comparison",
            Self::Cycle => "cycle",
            Self::Concept => "concept",
        }
    }

    /// The flow kind a visualization of this content follows.
    pub fn flow_kind(self) -> FlowKind {
        match self {
            Self::Process => FlowKind::Sequential,
            Self::System => FlowKind::Hierarchical,
            Self::Network => FlowKind::Connected,
            Self::Hierarchy => FlowKind::Vertical,
            Self::Comparison => FlowKind::Parallel,
            Self::Cycle => FlowKind::Circular,
            Self::Concept => FlowKind::Radial,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Sequential,
    Hierarchical,
    Connected,
    Vertical,
    Parallel,
    Circular,
    Radial,
}

/// A salient sentence selected for visualization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualElement {
    /// Dense index, equal to the element's position in [`VisualAnalysis::elements`].
    pub id: usize,
    pub text: String,
    pub keywords: Vec<String>,
    pub importance: u32,
    pub position: Option<Point>,
}

/// An undirected link between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from: usize,
    pub to: usize,
    /// In `[0, 1]`.
    pub strength: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualAnalysis {
    pub content_type: ContentType,
    pub elements: Vec<VisualElement>,
    pub relationships: Vec<Relationship>,
    pub flow_kind: FlowKind,
}
