//! Recipe and noise-parameter loading.

use anyhow::{bail, Context, Result};
use isleforge_spec::{HeightmapRecipe, NoiseParams};
use std::fs;
use std::path::Path;

/// Named recipe presets selectable with `--preset`.
pub const PRESETS: [&str; 2] = ["dense", "sparse"];

/// Reads a heightmap recipe from a JSON file.
pub fn load_recipe(path: &Path) -> Result<HeightmapRecipe> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;
    HeightmapRecipe::from_json(&content)
        .with_context(|| format!("Failed to parse recipe: {}", path.display()))
}

/// Reads noise parameters from a JSON file.
pub fn load_noise_params(path: &Path) -> Result<NoiseParams> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read noise parameter file: {}", path.display()))?;
    NoiseParams::from_json(&content)
        .with_context(|| format!("Failed to parse noise parameters: {}", path.display()))
}

/// Builds a preset recipe by name.
pub fn preset_recipe(name: &str, size: u32) -> Result<HeightmapRecipe> {
    match name {
        "dense" => Ok(HeightmapRecipe::dense(size)),
        "sparse" => Ok(HeightmapRecipe::sparse(size)),
        other => bail!(
            "Unknown preset: {} (expected one of: {})",
            other,
            PRESETS.join(", ")
        ),
    }
}

/// Resolves the recipe for a run: a file when given, otherwise a preset.
pub fn resolve_recipe(path: Option<&str>, preset: &str, size: u32) -> Result<HeightmapRecipe> {
    match path {
        Some(path) => load_recipe(Path::new(path)),
        None => preset_recipe(preset, size),
    }
}
