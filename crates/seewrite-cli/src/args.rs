//! Command-line argument definitions for the SeeWrite CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the initial view
//! and reading level, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the SeeWrite tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input description text
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output HTML page
    #[arg(short, long, default_value = "out.html")]
    pub output: String,

    /// Also write a standalone SVG of the selected view
    #[arg(long)]
    pub svg: Option<String>,

    /// Also write both analyses as JSON
    #[arg(long)]
    pub json: Option<String>,

    /// Initial view of the visual panel (diagram, flowchart, mindmap)
    #[arg(long, default_value = "diagram")]
    pub view: String,

    /// Reading level (beginner, intermediate, advanced), stored as the new preference
    #[arg(long)]
    pub level: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the preferences file (defaults to the platform data directory)
    #[arg(long)]
    pub preferences: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
