//! Export functionality for laid out visualizations.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a [`DiagramLayout`] into an output format. It is the final
//! stage of the visualization pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Description Text
//!     ↓ analyze
//! VisualAnalysis
//!     ↓ layout
//! Positioned Nodes and Edges (DiagramLayout)
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`SeewriteError::Export`] at the crate
//! boundary.
//!
//! [`SeewriteError::Export`]: crate::SeewriteError::Export

/// SVG export backend.
pub mod svg;

use std::io;

use crate::layout::DiagramLayout;

/// Abstraction for visualization export backends.
pub trait Exporter {
    /// Exports a layout into `writer` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&self, layout: &DiagramLayout, writer: &mut dyn io::Write) -> Result<(), Error>;

    /// Exports a layout into an in-memory string.
    ///
    /// # Errors
    ///
    /// Same as [`Exporter::export_layout`], plus [`Error::Render`] if the
    /// output is not valid UTF-8.
    fn export_to_string(&self, layout: &DiagramLayout) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.export_layout(layout, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| Error::Render(err.to_string()))
    }
}

/// Errors that can occur during export.
///
/// This type is converted into [`SeewriteError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`SeewriteError::Export`]: crate::SeewriteError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
