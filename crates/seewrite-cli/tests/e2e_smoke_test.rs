use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use seewrite_cli::{Args, run};

/// Collects all .txt files from a directory
fn collect_txt_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn samples_dir() -> PathBuf {
    // Samples are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

fn args_for(input: &Path, out_dir: &Path, view: &str) -> Args {
    let stem = input.file_stem().unwrap().to_string_lossy();
    Args {
        input: input.to_string_lossy().to_string(),
        output: out_dir.join(format!("{stem}-{view}.html")).to_string_lossy().to_string(),
        svg: Some(out_dir.join(format!("{stem}-{view}.svg")).to_string_lossy().to_string()),
        json: Some(out_dir.join(format!("{stem}.json")).to_string_lossy().to_string()),
        view: view.to_string(),
        level: None,
        config: None,
        preferences: Some(out_dir.join("preferences.toml").to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let samples = collect_txt_files(samples_dir());
    assert!(!samples.is_empty(), "No samples found in samples/");

    let mut failed = Vec::new();

    for sample in &samples {
        for view in ["diagram", "flowchart", "mindmap"] {
            let args = args_for(sample, temp_dir.path(), view);
            match run(&args) {
                Ok(()) => {
                    let html = fs::read_to_string(&args.output).unwrap();
                    assert!(html.starts_with("<!DOCTYPE html>"));
                    assert!(html.contains("enhanced-content"));

                    let svg = fs::read_to_string(args.svg.as_ref().unwrap()).unwrap();
                    assert!(svg.contains(&format!("data-layout=\"{view}\"")));
                }
                Err(err) => failed.push((sample.clone(), view, err)),
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nSamples that failed:");
        for (path, view, err) in &failed {
            eprintln!("  - {} ({view}): {}", path.display(), err);
        }
        panic!("{} sample run(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} samples passed", samples.len());
}

#[test]
fn e2e_level_is_persisted() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let sample = samples_dir().join("framework.txt");

    let mut args = args_for(&sample, temp_dir.path(), "diagram");
    args.level = Some("beginner".to_string());
    run(&args).expect("Failed to run with --level");

    let stored = fs::read_to_string(temp_dir.path().join("preferences.toml")).unwrap();
    assert!(stored.contains("user-level = \"beginner\""));

    // The stored level applies to the next run without --level
    let args = args_for(&sample, temp_dir.path(), "flowchart");
    run(&args).unwrap();
    let html = fs::read_to_string(&args.output).unwrap();
    assert!(html.contains("<option value=\"beginner\" selected=\"selected\">"));
}

#[test]
fn e2e_level_flag_sets_badge() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let sample = samples_dir().join("framework.txt");

    let mut args = args_for(&sample, temp_dir.path(), "diagram");
    args.level = Some("beginner".to_string());
    run(&args).expect("Failed to run with --level");

    let html = fs::read_to_string(&args.output).unwrap();
    assert!(html.contains("<span class=\"complexity-badge complexity-beginner\">Beginner</span>"));
    assert!(!html.contains("complexity-badge complexity-advanced"));
}

#[test]
fn e2e_json_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let sample = samples_dir().join("framework.txt");

    let args = args_for(&sample, temp_dir.path(), "diagram");
    run(&args).unwrap();

    let json = fs::read_to_string(args.json.as_ref().unwrap()).unwrap();
    assert!(json.contains("\"textAnalysis\""));
    assert!(json.contains("\"contentType\": \"system\""));
    assert!(json.contains("\"complexity\": \"advanced\""));
}

#[test]
fn e2e_invalid_arguments_fail() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let sample = samples_dir().join("framework.txt");

    let mut args = args_for(&sample, temp_dir.path(), "timeline");
    assert!(run(&args).is_err());

    args.view = "diagram".to_string();
    args.level = Some("expert".to_string());
    assert!(run(&args).is_err());

    args.level = None;
    args.input = temp_dir.path().join("missing.txt").to_string_lossy().to_string();
    assert!(run(&args).is_err());
}
