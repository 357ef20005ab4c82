//! Validate command implementation
//!
//! Checks a recipe without synthesizing it.

use anyhow::Result;
use colored::Colorize;
use isleforge_spec::{
    recipe_hash, validate_for_synthesis, validate_heightmap_recipe, HeightmapRecipe,
    ValidationResult,
};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, JsonDiagnostic, ValidateOutput};
use crate::input::load_recipe;

/// Run the validate command.
///
/// # Arguments
/// * `recipe_path` - Path to the recipe JSON file
/// * `seed` - Also check seed-dependent warnings for this seed
/// * `json` - Emit machine-readable JSON instead of colored text
pub fn run(recipe_path: &str, seed: Option<i32>, json: bool) -> Result<ExitCode> {
    if json {
        run_json(recipe_path, seed)
    } else {
        run_human(recipe_path, seed)
    }
}

/// Validates `recipe`, including seed-dependent checks when a seed is given.
pub fn validate_recipe(recipe: &HeightmapRecipe, seed: Option<i32>) -> ValidationResult {
    match seed {
        Some(seed) => validate_for_synthesis(recipe, seed),
        None => validate_heightmap_recipe(recipe),
    }
}

fn run_human(recipe_path: &str, seed: Option<i32>) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), recipe_path);

    let recipe = load_recipe(Path::new(recipe_path))?;
    let result = validate_recipe(&recipe, seed);
    print_validation_results(&result);

    if result.is_ok() {
        let hash = recipe_hash(&recipe)?;
        println!("{} {}", "Recipe:".dimmed(), &hash[..16]);
        println!("\n{} Recipe is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Recipe has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(recipe_path: &str, seed: Option<i32>) -> Result<ExitCode> {
    let recipe = match load_recipe(Path::new(recipe_path)) {
        Ok(recipe) => recipe,
        Err(err) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![JsonDiagnostic::new(error_codes::LOAD, format!("{:#}", err))],
                warnings: Vec::new(),
                recipe_hash: None,
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_recipe(&recipe, seed);
    let output = ValidateOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(JsonDiagnostic::from).collect(),
        warnings: result.warnings.iter().map(JsonDiagnostic::from).collect(),
        recipe_hash: recipe_hash(&recipe).ok(),
    };
    print_json(&output)?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Prints errors and warnings in colored form. Prints nothing for a clean result.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}
