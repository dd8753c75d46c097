//! Heuristic analysis of description text.
//!
//! Two independent, pure analyzers run over the same input:
//!
//! - [`TextStructureAnalyzer`] extracts a summary, key terms, concepts,
//!   follow-up questions, action items and a complexity tier
//! - [`ContentVisualizer`] classifies the content type and extracts ranked
//!   elements and relationships for diagrams
//!
//! The [`highlight`] and [`level`] modules support rendering: inline term
//! highlighting and reading-level text adaptation.
//!
//! # Examples
//!
//! ```
//! use seewrite_analysis::{ContentVisualizer, TextStructureAnalyzer};
//!
//! let text = "The API connects every node. A second sentence follows here.";
//! let structure = TextStructureAnalyzer::new().analyze(text);
//! let visual = ContentVisualizer::new().analyze(text);
//!
//! assert!(structure.key_terms.contains("API"));
//! assert_eq!(visual.elements.len(), 2);
//! assert_eq!(visual.relationships.len(), 1);
//! ```

pub mod highlight;
pub mod level;
pub mod structure;
pub mod tokenize;
pub mod visual;


pub use structure::TextStructureAnalyzer;
pub use visual::ContentVisualizer;
