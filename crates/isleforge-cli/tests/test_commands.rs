//! Command-level tests driving the CLI library against recipe files.

use isleforge_cli::commands::{generate, noise, validate};
use isleforge_cli::input::load_recipe;
use isleforge_spec::HeightmapRecipe;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tempfile::TempDir;

fn write_recipe(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// generate
// ============================================================================

/// A recipe file round-trips through the loader and synthesizes identically
/// to the equivalent preset.
#[test]
fn test_recipe_file_matches_preset() {
    let dir = TempDir::new().unwrap();
    let preset = HeightmapRecipe::sparse(16);
    let path = write_recipe(&dir, "island.json", &preset.to_json_pretty().unwrap());

    let loaded = load_recipe(&path).unwrap();
    assert_eq!(loaded, preset);

    let from_file = generate::generate(&loaded, 42).unwrap();
    let from_preset = generate::generate(&preset, 42).unwrap();
    assert_eq!(from_file.report.digest, from_preset.report.digest);
    assert_eq!(from_file.grid, from_preset.grid);
}

#[test]
fn test_generate_command_exit_codes() {
    let dir = TempDir::new().unwrap();
    let good = write_recipe(&dir, "good.json", r#"{ "size": 12 }"#);
    let bad = write_recipe(&dir, "bad.json", r#"{ "size": 0 }"#);

    for json in [false, true] {
        let code =
            generate::run(good.to_str(), "dense", 0, Some(7), Some(8), json).unwrap();
        assert_eq!(code, ExitCode::SUCCESS, "good recipe (json={})", json);

        let code = generate::run(bad.to_str(), "dense", 0, Some(7), None, json).unwrap();
        assert_eq!(code, ExitCode::from(1), "bad recipe (json={})", json);
    }
}

#[test]
fn test_generate_missing_recipe() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    assert!(generate::run(missing.to_str(), "dense", 0, Some(1), None, false).is_err());
    let code = generate::run(missing.to_str(), "dense", 0, Some(1), None, true).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn test_generate_preset_with_random_seed() {
    let code = generate::run(None, "sparse", 9, None, None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_command() {
    let dir = TempDir::new().unwrap();
    let good = write_recipe(
        &dir,
        "good.json",
        r#"{ "size": 64, "smoothing": { "mode": "double_buffered" } }"#,
    );
    let bad = write_recipe(
        &dir,
        "bad.json",
        r#"{ "size": 64, "falloff": { "inner_edge": 0.9, "outer_edge": 0.5 } }"#,
    );

    for json in [false, true] {
        assert_eq!(
            validate::run(good.to_str().unwrap(), None, json).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(
            validate::run(bad.to_str().unwrap(), Some(3), json).unwrap(),
            ExitCode::from(1)
        );
    }
}

#[test]
fn test_validate_unparseable_recipe() {
    let dir = TempDir::new().unwrap();
    let path = write_recipe(&dir, "broken.json", "{ size: ");

    assert!(validate::run(path.to_str().unwrap(), None, false).is_err());
    assert_eq!(
        validate::run(path.to_str().unwrap(), None, true).unwrap(),
        ExitCode::from(1)
    );
}

// ============================================================================
// noise
// ============================================================================

#[test]
fn test_noise_command_from_params_file() {
    let dir = TempDir::new().unwrap();
    let path = write_recipe(
        &dir,
        "cells.json",
        r#"{ "noise_type": "cellular", "frequency": 1.0,
             "cellular": { "return_type": "distance2_add" } }"#,
    );
    let point = noise::SamplePoint {
        x: 12.75,
        y: -3.5,
        z: None,
    };

    let params = isleforge_cli::input::load_noise_params(&path).unwrap();
    let sample = noise::sample(&params, point, false).unwrap();
    assert_eq!(sample.value, 1.558_543_4);

    for json in [false, true] {
        let code = noise::run(path.to_str(), point, false, json).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}

#[test]
fn test_noise_command_rejects_invalid_params() {
    let dir = TempDir::new().unwrap();
    let path = write_recipe(&dir, "bad.json", r#"{ "fractal": { "octaves": 0 } }"#);
    let point = noise::SamplePoint {
        x: 0.0,
        y: 0.0,
        z: Some(1.0),
    };

    for json in [false, true] {
        let code = noise::run(path.to_str(), point, true, json).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
