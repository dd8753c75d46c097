//! CLI logic for the SeeWrite tool.
//!
//! Reads a description, mounts the enhanced view with its visual panel into
//! an in-memory page and writes the page as HTML. The SVG of the selected
//! view and both analyses as JSON can be written alongside.

pub mod error_adapter;
pub mod preferences;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};
use serde::Serialize;

use seewrite::{
    Enhancer, SeewriteError,
    enhance::{EnhancedView, Interactions, NoQuestions},
    layout::LayoutKind,
    markup::Markup,
    model::{TextAnalysis, Tier, VisualAnalysis},
    mount::{MemoryMount, MountPoint},
    preferences::{MemoryPreferences, PreferenceStore, save_tier},
};

use preferences::FilePreferences;

/// Both analyses of one description, as written by `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    text_analysis: &'a TextAnalysis,
    visual_analysis: &'a VisualAnalysis,
}

/// Run the SeeWrite CLI application
///
/// This function processes the input file through the SeeWrite pipeline
/// and writes the resulting HTML page, plus the optional SVG and JSON
/// outputs.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SeewriteError` for:
/// - File I/O errors
/// - Configuration loading errors and invalid `--view` or `--level` values
/// - Layout errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), SeewriteError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing description"
    );

    let view_kind: LayoutKind = args.view.parse().map_err(SeewriteError::Config)?;
    let level: Option<Tier> = args
        .level
        .as_deref()
        .map(str::parse::<Tier>)
        .transpose()
        .map_err(SeewriteError::Config)?;

    let app_config = config::load_config(args.config.as_ref())?;

    let text = fs::read_to_string(&args.input)?;

    let mut store = preference_store(args);
    if let Some(tier) = level {
        save_tier(store.as_mut(), tier)?;
        info!(tier = tier.id(); "Reading level stored");
    }

    let enhancer = Enhancer::new(app_config);
    let mut view = enhancer.enhance(&text, MemoryMount::new(), Box::new(NoQuestions), store)?;
    // An explicit --level is a tier request, the badge follows it
    if let Some(tier) = level {
        view.set_level(tier);
    }
    if view_kind != LayoutKind::default() {
        view.on_view_select(view_kind)?;
    }

    fs::write(&args.output, page(&view))?;
    info!(output_file = args.output; "HTML page written");

    let visual = match view.visual() {
        Some(panel) => panel.analysis().clone(),
        None => enhancer.analyze_visual(&text),
    };

    if let Some(path) = &args.svg {
        let svg = enhancer.render_svg(&visual, view_kind)?;
        fs::write(path, svg)?;
        info!(output_file = path; "SVG exported successfully");
    }

    if let Some(path) = &args.json {
        let report = Report {
            text_analysis: view.analysis(),
            visual_analysis: &visual,
        };
        let json = serde_json::to_string_pretty(&report).map_err(|err| SeewriteError::Export(Box::new(err)))?;
        fs::write(path, json)?;
        info!(output_file = path; "JSON exported successfully");
    }

    Ok(())
}

fn preference_store(args: &Args) -> Box<dyn PreferenceStore> {
    let path = match &args.preferences {
        Some(path) => Some(path.into()),
        None => preferences::default_path(),
    };

    match path {
        Some(path) => {
            debug!(path = path.display().to_string(); "Using preferences file");
            Box::new(FilePreferences::new(path))
        }
        None => {
            debug!("Could not determine platform-specific data directory, preferences kept in memory");
            Box::new(MemoryPreferences::new())
        }
    }
}

/// Wraps the mounted view into a standalone HTML document.
fn page(view: &EnhancedView<MemoryMount>) -> String {
    let mut markup = Markup::new();
    markup
        .raw("<!DOCTYPE html>\n")
        .open("html", &[("lang", "en")])
        .open("head", &[])
        .open("meta", &[("charset", "utf-8")])
        .element("title", &[], "SeeWrite")
        .close("head")
        .open("body", &[])
        .raw(&view.mount().to_html())
        .close("body")
        .close("html");
    markup.into_string()
}
