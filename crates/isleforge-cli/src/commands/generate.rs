//! Generate command implementation
//!
//! Synthesizes a heightmap from a recipe file or a named preset and prints a
//! summary. The grid itself is not written anywhere.

use anyhow::{Context, Result};
use colored::Colorize;
use isleforge_spec::{validate_for_synthesis, HeightmapRecipe, HeightmapStats, SynthesisReport};
use isleforge_terrain::{heightmap_stats, synthesize, Heightmap};
use rand::Rng;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    error_codes, print_json, GenerateOutput, GenerateResult, JsonDiagnostic,
};
use super::validate::print_validation_results;
use crate::input::resolve_recipe;
use crate::preview::ascii_preview;

/// A synthesized grid with its report and statistics.
#[derive(Debug)]
pub struct Generated {
    /// The final heightmap.
    pub grid: Heightmap,
    /// Per-pass timings and digest.
    pub report: SynthesisReport,
    /// Elevation summary.
    pub stats: HeightmapStats,
}

/// Draws a seed in `[0, (i32::MAX - 1) / 100)`.
pub fn random_seed() -> i32 {
    rand::thread_rng().gen_range(0..i32::MAX - 1) / 100
}

/// Synthesizes `recipe` with `seed` on a fresh grid.
pub fn generate(recipe: &HeightmapRecipe, seed: i32) -> Result<Generated> {
    let mut grid = Heightmap::square(recipe.size)
        .context("Failed to allocate heightmap")?
        .with_world_scale(recipe.world_size, recipe.world_height);
    let report = synthesize(&mut grid, seed, recipe).context("Synthesis failed")?;
    let stats = heightmap_stats(&grid).context("Failed to summarize heightmap")?;
    Ok(Generated {
        grid,
        report,
        stats,
    })
}

/// Run the generate command.
///
/// # Arguments
/// * `recipe_path` - Recipe JSON file; when absent `preset` and `size` are used
/// * `preset` - Preset name (`dense` or `sparse`)
/// * `size` - Heightmap size for presets
/// * `seed` - Synthesis seed; drawn at random when absent
/// * `preview_columns` - Print an ASCII preview at most this wide
/// * `json` - Emit machine-readable JSON instead of colored text
pub fn run(
    recipe_path: Option<&str>,
    preset: &str,
    size: u32,
    seed: Option<i32>,
    preview_columns: Option<u32>,
    json: bool,
) -> Result<ExitCode> {
    if json {
        run_json(recipe_path, preset, size, seed, preview_columns)
    } else {
        run_human(recipe_path, preset, size, seed, preview_columns)
    }
}

fn source_label(recipe_path: Option<&str>, preset: &str) -> String {
    match recipe_path {
        Some(path) => path.to_string(),
        None => format!("preset:{}", preset),
    }
}

fn run_human(
    recipe_path: Option<&str>,
    preset: &str,
    size: u32,
    seed: Option<i32>,
    preview_columns: Option<u32>,
) -> Result<ExitCode> {
    let start = Instant::now();
    let recipe = resolve_recipe(recipe_path, preset, size)?;
    let random = seed.is_none();
    let seed = seed.unwrap_or_else(random_seed);

    println!(
        "{} {} ({}x{}, seed {}{})",
        "Generating:".cyan().bold(),
        source_label(recipe_path, preset),
        recipe.size,
        recipe.size,
        seed,
        if random { ", random" } else { "" }
    );

    let validation = validate_for_synthesis(&recipe, seed);
    if !validation.is_ok() {
        print_validation_results(&validation);
        println!(
            "\n{} Recipe has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }
    print_validation_results(&validation);

    let generated = generate(&recipe, seed)?;
    let report = &generated.report;

    println!("\n{}", "Passes:".bold());
    for stage in &report.stages {
        let note = if stage.skipped {
            " (skipped)".dimmed().to_string()
        } else if stage.saturated_cells > 0 {
            format!(" ({} saturated)", stage.saturated_cells)
                .yellow()
                .to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<10} {:>5}ms{}",
            stage.pass.as_str(),
            stage.duration_ms,
            note
        );
    }

    println!(
        "\n{} {} / {} / {:.2}",
        "Elevation (min/max/mean):".dimmed(),
        generated.stats.min,
        generated.stats.max,
        generated.stats.mean
    );
    println!("{} {}", "Recipe:".dimmed(), &report.recipe_hash[..16]);
    println!("{} {}", "Digest:".dimmed(), report.digest);

    if let Some(columns) = preview_columns {
        println!();
        for line in ascii_preview(&generated.grid, columns) {
            println!("  {}", line);
        }
    }

    println!(
        "\n{} Heightmap synthesized ({}ms)",
        "SUCCESS".green().bold(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(
    recipe_path: Option<&str>,
    preset: &str,
    size: u32,
    seed: Option<i32>,
    preview_columns: Option<u32>,
) -> Result<ExitCode> {
    let recipe = match resolve_recipe(recipe_path, preset, size) {
        Ok(recipe) => recipe,
        Err(err) => {
            let code = if recipe_path.is_some() {
                error_codes::LOAD
            } else {
                error_codes::UNKNOWN_PRESET
            };
            let output = GenerateOutput::failure(vec![JsonDiagnostic::new(
                code,
                format!("{:#}", err),
            )]);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let random = seed.is_none();
    let seed = seed.unwrap_or_else(random_seed);

    let validation = validate_for_synthesis(&recipe, seed);
    if !validation.is_ok() {
        let errors = validation.errors.iter().map(JsonDiagnostic::from).collect();
        print_json(&GenerateOutput::failure(errors))?;
        return Ok(ExitCode::from(1));
    }

    let generated = match generate(&recipe, seed) {
        Ok(generated) => generated,
        Err(err) => {
            let output = GenerateOutput::failure(vec![JsonDiagnostic::new(
                error_codes::SYNTHESIS,
                format!("{:#}", err),
            )]);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let preview = preview_columns.map(|columns| ascii_preview(&generated.grid, columns));
    print_json(&GenerateOutput::success(GenerateResult {
        random_seed: random,
        report: generated.report,
        stats: generated.stats,
        preview,
    }))?;
    Ok(ExitCode::SUCCESS)
}
