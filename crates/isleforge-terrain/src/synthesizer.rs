//! Staged heightmap synthesis.
//!
//! A [`Synthesizer`] runs base fill, falloff and smoothing exactly once each,
//! in that order. Passes the recipe disables still advance the stage and are
//! recorded as skipped.

use std::time::Instant;

use isleforge_spec::{
    recipe_hash, validate_for_synthesis, HeightmapRecipe, Pass, StageTiming, SynthesisReport,
};
use tracing::{debug, warn};

use crate::base_fill::base_fill;
use crate::digest::grid_digest;
use crate::error::{GridError, SynthesisError, SynthesisResult};
use crate::falloff::apply_falloff;
use crate::grid::HeightGrid;
use crate::smoothing::smooth;

/// Runs the synthesis passes for one recipe and seed.
#[derive(Debug)]
pub struct Synthesizer<'r> {
    recipe: &'r HeightmapRecipe,
    seed: i32,
    recipe_hash: String,
    completed: Option<Pass>,
    stages: Vec<StageTiming>,
}

impl<'r> Synthesizer<'r> {
    /// Validates the recipe for this seed and prepares a synthesizer.
    ///
    /// Validation warnings are logged; errors abort with
    /// [`SynthesisError::Validation`].
    pub fn new(recipe: &'r HeightmapRecipe, seed: i32) -> SynthesisResult<Self> {
        let validation = validate_for_synthesis(recipe, seed);
        for warning in &validation.warnings {
            warn!(code = %warning.code, "{}", warning);
        }
        if !validation.is_ok() {
            return Err(SynthesisError::Validation(validation.errors));
        }

        Ok(Self {
            recipe,
            seed,
            recipe_hash: recipe_hash(recipe)?,
            completed: None,
            stages: Vec::with_capacity(Pass::ALL.len()),
        })
    }

    /// The last pass that completed, if any.
    pub fn completed(&self) -> Option<Pass> {
        self.completed
    }

    /// The pass that must run next, or `None` once smoothing is done.
    pub fn next_pass(&self) -> Option<Pass> {
        match self.completed {
            None => Some(Pass::BaseFill),
            Some(Pass::BaseFill) => Some(Pass::Falloff),
            Some(Pass::Falloff) => Some(Pass::Smoothing),
            Some(Pass::Smoothing) => None,
        }
    }

    /// Timings recorded so far.
    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    /// Fills the grid with Perlin elevation.
    pub fn run_base_fill<G: HeightGrid + ?Sized>(&mut self, grid: &mut G) -> SynthesisResult<()> {
        let (seed, recipe) = (self.seed, self.recipe);
        self.run(Pass::BaseFill, grid, true, |g| {
            base_fill(g, seed, &recipe.base_fill)
        })
    }

    /// Applies the border falloff mask.
    pub fn run_falloff<G: HeightGrid + ?Sized>(&mut self, grid: &mut G) -> SynthesisResult<()> {
        let recipe = self.recipe;
        self.run(Pass::Falloff, grid, recipe.falloff.enabled, |g| {
            apply_falloff(g, &recipe.falloff)
        })
    }

    /// Applies the configured smoothing iterations.
    pub fn run_smoothing<G: HeightGrid + ?Sized>(&mut self, grid: &mut G) -> SynthesisResult<()> {
        let recipe = self.recipe;
        let enabled = recipe.smoothing.iterations > 0;
        self.run(Pass::Smoothing, grid, enabled, |g| smooth(g, &recipe.smoothing))
    }

    /// Completes the run and summarizes it.
    ///
    /// Fails with [`SynthesisError::StageOrder`] unless every pass has run.
    pub fn finish<G: HeightGrid + ?Sized>(self, grid: &G) -> SynthesisResult<SynthesisReport> {
        if let Some(pending) = self.next_pass() {
            return Err(self.order_error(pending));
        }
        let saturated_cells = self.stages.iter().map(|s| s.saturated_cells).sum();
        Ok(SynthesisReport {
            seed: self.seed,
            recipe_hash: self.recipe_hash,
            width: grid.width(),
            height: grid.height(),
            stages: self.stages,
            saturated_cells,
            digest: grid_digest(grid)?,
        })
    }

    fn order_error(&self, requested: Pass) -> SynthesisError {
        SynthesisError::StageOrder {
            requested,
            completed: self.completed.map_or("none", |p| p.as_str()),
        }
    }

    fn run<G, F>(&mut self, pass: Pass, grid: &mut G, enabled: bool, f: F) -> SynthesisResult<()>
    where
        G: HeightGrid + ?Sized,
        F: FnOnce(&mut G) -> SynthesisResult<u64>,
    {
        if self.next_pass() != Some(pass) {
            return Err(self.order_error(pass));
        }
        check_size(grid, self.recipe.size)?;

        let timing = if enabled {
            let start = Instant::now();
            let saturated = f(&mut *grid)?;
            let duration_ms = start.elapsed().as_millis() as u64;
            debug!(
                pass = %pass,
                width = grid.width(),
                height = grid.height(),
                duration_ms,
                saturated_cells = saturated,
                "pass complete"
            );
            if saturated > 0 {
                warn!(
                    pass = %pass,
                    saturated_cells = saturated,
                    "elevations clamped to the u16 range"
                );
            }
            StageTiming::new(pass, duration_ms, saturated)
        } else {
            debug!(pass = %pass, "pass disabled by recipe");
            StageTiming::skipped(pass)
        };

        self.stages.push(timing);
        self.completed = Some(pass);
        Ok(())
    }
}

fn check_size<G: HeightGrid + ?Sized>(grid: &G, expected: u32) -> Result<(), GridError> {
    let (width, height) = (grid.width(), grid.height());
    if width != expected || height != expected {
        return Err(GridError::SizeMismatch {
            width,
            height,
            expected,
        });
    }
    Ok(())
}

/// Runs base fill, falloff and smoothing over `grid` for `seed`.
///
/// The grid must be `recipe.size` on both axes. It is mutated in place; the
/// caller keeps ownership.
pub fn synthesize<G: HeightGrid + ?Sized>(
    grid: &mut G,
    seed: i32,
    recipe: &HeightmapRecipe,
) -> SynthesisResult<SynthesisReport> {
    let mut synthesizer = Synthesizer::new(recipe, seed)?;
    synthesizer.run_base_fill(grid)?;
    synthesizer.run_falloff(grid)?;
    synthesizer.run_smoothing(grid)?;
    let report = synthesizer.finish(grid)?;
    debug!(
        seed,
        digest = %report.digest,
        total_ms = report.total_duration_ms(),
        "synthesis complete"
    );
    Ok(report)
}
