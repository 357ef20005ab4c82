//! Isleforge CLI - command-line host for heightmap synthesis
//!
//! Loads a recipe, runs the synthesis pipeline and prints a summary. The
//! grid is not persisted.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use isleforge_cli::commands;
use isleforge_cli::commands::noise::SamplePoint;
use isleforge_cli::logging;

/// Isleforge - Procedural island heightmaps
#[derive(Parser)]
#[command(name = "isleforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log filter for diagnostics on stderr (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a heightmap and print its report
    Generate {
        /// Path to a recipe JSON file (overrides --preset and --size)
        #[arg(short, long)]
        recipe: Option<String>,

        /// Built-in recipe used when no file is given
        #[arg(long, default_value = "dense", value_parser = ["dense", "sparse"])]
        preset: String,

        /// Heightmap size in cells per side for presets
        #[arg(long, default_value_t = 257)]
        size: u32,

        /// Synthesis seed (random when omitted)
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i32>,

        /// Print an ASCII preview at most this many columns wide
        #[arg(long, num_args = 0..=1, default_missing_value = "64")]
        preview: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a recipe file without synthesizing it
    Validate {
        /// Path to the recipe JSON file
        #[arg(short, long)]
        recipe: String,

        /// Also run seed-dependent checks for this seed
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Sample a noise generator at one point
    Noise {
        /// Path to a noise parameter JSON file (defaults when omitted)
        #[arg(short, long)]
        params: Option<String>,

        /// X coordinate
        #[arg(short, allow_negative_numbers = true)]
        x: f32,

        /// Y coordinate
        #[arg(short, allow_negative_numbers = true)]
        y: f32,

        /// Z coordinate (samples 3D noise when given)
        #[arg(short, allow_negative_numbers = true)]
        z: Option<f32>,

        /// Apply fractal gradient perturbation before sampling
        #[arg(long)]
        warp: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Generate {
            recipe,
            preset,
            size,
            seed,
            preview,
            json,
        } => commands::generate::run(recipe.as_deref(), &preset, size, seed, preview, json),
        Commands::Validate { recipe, seed, json } => commands::validate::run(&recipe, seed, json),
        Commands::Noise {
            params,
            x,
            y,
            z,
            warp,
            json,
        } => commands::noise::run(params.as_deref(), SamplePoint { x, y, z }, warp, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["isleforge", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                recipe,
                preset,
                size,
                seed,
                preview,
                json,
            } => {
                assert!(recipe.is_none());
                assert_eq!(preset, "dense");
                assert_eq!(size, 257);
                assert!(seed.is_none());
                assert!(preview.is_none());
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_preview_and_negative_seed() {
        let cli = Cli::try_parse_from([
            "isleforge",
            "generate",
            "--preset",
            "sparse",
            "--seed",
            "-42",
            "--preview",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                preset,
                seed,
                preview,
                ..
            } => {
                assert_eq!(preset, "sparse");
                assert_eq!(seed, Some(-42));
                assert_eq!(preview, Some(64));
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["isleforge", "generate", "--preset", "atoll"]).is_err());
    }

    #[test]
    fn test_cli_parses_validate_with_log_level() {
        let cli = Cli::try_parse_from([
            "isleforge",
            "validate",
            "--recipe",
            "island.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Validate { recipe, seed, json } => {
                assert_eq!(recipe, "island.json");
                assert!(seed.is_none());
                assert!(!json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_noise_point() {
        let cli =
            Cli::try_parse_from(["isleforge", "noise", "-x", "1.5", "-y", "-2.25", "--warp"])
                .unwrap();
        match cli.command {
            Commands::Noise { x, y, z, warp, .. } => {
                assert_eq!((x, y, z), (1.5, -2.25, None));
                assert!(warp);
            }
            _ => panic!("expected noise command"),
        }
    }
}
