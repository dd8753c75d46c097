//! Error types for SeeWrite operations.
//!
//! This module provides the main error type [`SeewriteError`] which wraps
//! the error conditions of the fallible outer operations. Analysis itself
//! never fails.

use std::io;

use thiserror::Error;

/// The main error type for SeeWrite operations.
#[derive(Debug, Error)]
pub enum SeewriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SeewriteError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
