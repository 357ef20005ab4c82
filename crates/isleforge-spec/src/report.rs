//! Synthesis report types.

use serde::{Deserialize, Serialize};

/// A heightmap synthesis pass, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    /// Perlin elevation fill.
    BaseFill,
    /// Border falloff mask.
    Falloff,
    /// Box-filter smoothing.
    Smoothing,
}

impl Pass {
    /// All passes in execution order.
    pub const ALL: [Pass; 3] = [Pass::BaseFill, Pass::Falloff, Pass::Smoothing];

    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pass::BaseFill => "base_fill",
            Pass::Falloff => "falloff",
            Pass::Smoothing => "smoothing",
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and outcome of one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTiming {
    /// The pass.
    pub pass: Pass,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Cells clamped by the saturating conversion during this pass.
    pub saturated_cells: u64,
    /// True if the recipe disabled the pass (falloff off, zero iterations).
    pub skipped: bool,
}

impl StageTiming {
    /// Creates a timing entry for a pass that ran.
    pub fn new(pass: Pass, duration_ms: u64, saturated_cells: u64) -> Self {
        Self {
            pass,
            duration_ms,
            saturated_cells,
            skipped: false,
        }
    }

    /// Creates a timing entry for a pass the recipe disabled.
    pub fn skipped(pass: Pass) -> Self {
        Self {
            pass,
            duration_ms: 0,
            saturated_cells: 0,
            skipped: true,
        }
    }
}

/// Summary of elevation values in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightmapStats {
    /// Lowest elevation.
    pub min: u16,
    /// Highest elevation.
    pub max: u16,
    /// Mean elevation.
    pub mean: f64,
}

/// Outcome of a full synthesis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// Synthesis seed.
    pub seed: i32,
    /// Canonical hash of the recipe.
    pub recipe_hash: String,
    /// Grid width.
    pub width: u32,
    /// Grid height.
    pub height: u32,
    /// Per-pass timings, in execution order.
    pub stages: Vec<StageTiming>,
    /// Total saturated cells across passes.
    pub saturated_cells: u64,
    /// BLAKE3 digest of the final grid.
    pub digest: String,
}

impl SynthesisReport {
    /// Total wall-clock time across passes, in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.stages.iter().map(|s| s.duration_ms).sum()
    }
}
