//! Noise command implementation
//!
//! Samples a single noise point from a parameter file, optionally after
//! fractal domain warping.

use anyhow::{bail, Result};
use colored::Colorize;
use isleforge_noise::{NoiseConfig, NoiseGenerator};
use isleforge_spec::{validate_noise_params, NoiseParams};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, JsonDiagnostic, NoiseOutput, NoiseSample};
use super::validate::print_validation_results;
use crate::input::load_noise_params;

/// A point to sample; `z` selects 3D noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate for 3D sampling.
    pub z: Option<f32>,
}

/// Evaluates `params` at `point`.
///
/// The lookup generator for cellular `noise_lookup` mode is built from
/// `params.cellular.lookup`. With `warp`, the point is displaced by fractal
/// gradient perturbation before sampling.
pub fn sample(params: &NoiseParams, point: SamplePoint, warp: bool) -> Result<NoiseSample> {
    let validation = validate_noise_params(params);
    if let Err(errors) = validation.into_result() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid noise parameters: {}", messages.join("; "));
    }

    let config = NoiseConfig::from_params(params)?;
    let lookup = match params.cellular.lookup.as_deref() {
        Some(lookup) => Some(NoiseGenerator::new(NoiseConfig::from_params(lookup)?)?),
        None => None,
    };
    let generator = match &lookup {
        Some(lookup) => NoiseGenerator::with_lookup(config, lookup),
        None => NoiseGenerator::new(config)?,
    };

    let SamplePoint { mut x, mut y, z } = point;
    let (z, value) = match z {
        Some(mut z) => {
            if warp {
                generator.gradient_perturb_fractal_3d(&mut x, &mut y, &mut z);
            }
            (Some(z), generator.get_noise_3d(x, y, z))
        }
        None => {
            if warp {
                generator.gradient_perturb_fractal_2d(&mut x, &mut y);
            }
            (None, generator.get_noise_2d(x, y))
        }
    };

    Ok(NoiseSample {
        x,
        y,
        z,
        value,
        value_01: (1.0 + value) / 2.0,
    })
}

/// Run the noise command.
///
/// # Arguments
/// * `params_path` - Noise parameter JSON file; defaults apply when absent
/// * `point` - Coordinate to sample
/// * `warp` - Apply fractal gradient perturbation first
/// * `json` - Emit machine-readable JSON instead of colored text
pub fn run(
    params_path: Option<&str>,
    point: SamplePoint,
    warp: bool,
    json: bool,
) -> Result<ExitCode> {
    if json {
        run_json(params_path, point, warp)
    } else {
        run_human(params_path, point, warp)
    }
}

fn load(params_path: Option<&str>) -> Result<NoiseParams> {
    match params_path {
        Some(path) => load_noise_params(Path::new(path)),
        None => Ok(NoiseParams::default()),
    }
}

fn run_human(params_path: Option<&str>, point: SamplePoint, warp: bool) -> Result<ExitCode> {
    let params = load(params_path)?;
    println!(
        "{} {:?} (seed {}, frequency {})",
        "Sampling:".cyan().bold(),
        params.noise_type,
        params.seed,
        params.frequency
    );

    let validation = validate_noise_params(&params);
    print_validation_results(&validation);
    if !validation.is_ok() {
        println!("\n{} Noise parameters are invalid", "FAILED".red().bold());
        return Ok(ExitCode::from(1));
    }

    let sample = sample(&params, point, warp)?;
    match sample.z {
        Some(z) => println!("  at ({}, {}, {})", sample.x, sample.y, z),
        None => println!("  at ({}, {})", sample.x, sample.y),
    }
    println!("  {} {}", "value:".dimmed(), sample.value);
    println!("  {} {}", "value_01:".dimmed(), sample.value_01);
    Ok(ExitCode::SUCCESS)
}

fn run_json(params_path: Option<&str>, point: SamplePoint, warp: bool) -> Result<ExitCode> {
    let failure = |errors: Vec<JsonDiagnostic>| NoiseOutput {
        success: false,
        errors,
        sample: None,
    };

    let params = match load(params_path) {
        Ok(params) => params,
        Err(err) => {
            let error = JsonDiagnostic::new(error_codes::LOAD, format!("{:#}", err));
            print_json(&failure(vec![error]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_noise_params(&params);
    if !validation.is_ok() {
        let errors = validation.errors.iter().map(JsonDiagnostic::from).collect();
        print_json(&failure(errors))?;
        return Ok(ExitCode::from(1));
    }

    match sample(&params, point, warp) {
        Ok(sample) => {
            print_json(&NoiseOutput {
                success: true,
                errors: Vec::new(),
                sample: Some(sample),
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let error = JsonDiagnostic::new(error_codes::NOISE_CONFIG, format!("{:#}", err));
            print_json(&failure(vec![error]))?;
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isleforge_spec::{CellularReturnType, NoiseType};

    const ORIGIN_2D: SamplePoint = SamplePoint {
        x: 12.75,
        y: -3.5,
        z: None,
    };

    #[test]
    fn test_sample_matches_generator() {
        let mut params = NoiseParams::default();
        params.noise_type = NoiseType::Perlin;
        params.frequency = 1.0;

        let sample = sample(&params, ORIGIN_2D, false).unwrap();
        assert_eq!(sample.value, -0.137_939_45);
        assert_eq!(sample.value_01, (1.0 + sample.value) / 2.0);
        assert_eq!((sample.x, sample.y), (12.75, -3.5));
    }

    #[test]
    fn test_warp_moves_point() {
        let params = NoiseParams::default();
        let point = SamplePoint {
            x: 123.4,
            y: -56.7,
            z: None,
        };
        let sample = sample(&params, point, true).unwrap();
        assert_eq!((sample.x, sample.y), (123.607_85, -56.636_665));
    }

    #[test]
    fn test_noise_lookup_uses_nested_params() {
        let mut params = NoiseParams::default();
        params.noise_type = NoiseType::Cellular;
        params.cellular.return_type = CellularReturnType::NoiseLookup;
        params.cellular.lookup = Some(Box::new(NoiseParams::perlin(3, 0.2)));

        let value = sample(&params, ORIGIN_2D, false).unwrap().value;
        assert!((-1.1..=1.1).contains(&value));
    }

    #[test]
    fn test_missing_lookup_is_rejected() {
        let mut params = NoiseParams::default();
        params.noise_type = NoiseType::Cellular;
        params.cellular.return_type = CellularReturnType::NoiseLookup;

        let err = sample(&params, ORIGIN_2D, false).unwrap_err();
        assert!(err.to_string().contains("H003"), "{}", err);
    }
}
