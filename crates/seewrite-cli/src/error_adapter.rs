//! Error adapter for converting SeewriteError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Every variant
//! gets a stable diagnostic code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use seewrite::SeewriteError;

/// Adapter giving a [`SeewriteError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a SeewriteError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SeewriteError::Io(_) => "seewrite::io",
            SeewriteError::Config(_) => "seewrite::config",
            SeewriteError::Layout(_) => "seewrite::layout",
            SeewriteError::Export(_) => "seewrite::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SeewriteError::Config(_) => "check the configuration file and the --view and --level values",
            SeewriteError::Io(_) | SeewriteError::Layout(_) | SeewriteError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`SeewriteError`] into a reportable diagnostic.
pub fn to_reportable(err: &SeewriteError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
