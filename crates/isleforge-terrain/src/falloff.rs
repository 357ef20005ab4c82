//! Falloff pass: square border suppression.
//!
//! Each cell is scaled by `1 − smoothstep(inner, outer, max(|sx|, |sy|))`
//! where `sx` and `sy` map the grid onto [-1, 1] with both border columns
//! at exactly ±1.

use isleforge_spec::FalloffParams;

use crate::convert::saturate_u16;
use crate::error::SynthesisResult;
use crate::grid::HeightGrid;

/// Hermite smoothstep of `x` between two edges, clamped to [0, 1].
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Maps cell index `i` of an axis with `len` cells onto [-1, 1].
///
/// A single-cell axis maps to 0.
#[inline]
pub fn normalized_coord(i: u32, len: u32) -> f32 {
    if len <= 1 {
        return 0.0;
    }
    2.0 * i as f32 / (len - 1) as f32 - 1.0
}

/// Elevation multiplier at cell `(x, y)`.
pub fn falloff_factor(x: u32, y: u32, width: u32, height: u32, params: &FalloffParams) -> f32 {
    let sx = normalized_coord(x, width);
    let sy = normalized_coord(y, height);
    let d = sx.abs().max(sy.abs());
    1.0 - smoothstep(params.inner_edge, params.outer_edge, d)
}

/// Multiplies every cell by its falloff factor and truncates.
///
/// Returns the number of saturated cells.
pub fn apply_falloff<G: HeightGrid + ?Sized>(
    grid: &mut G,
    params: &FalloffParams,
) -> SynthesisResult<u64> {
    let (width, height) = (grid.width(), grid.height());
    let mut saturated = 0u64;
    for x in 0..width {
        for y in 0..height {
            let factor = falloff_factor(x, y, width, height, params);
            let converted = saturate_u16(f32::from(grid.get_height(x, y)?) * factor);
            saturated += u64::from(converted.saturated);
            grid.set_height(x, y, converted.value)?;
        }
    }
    Ok(saturated)
}
