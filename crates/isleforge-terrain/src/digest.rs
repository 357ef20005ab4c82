//! Grid digests for determinism checks.

use crate::error::GridResult;
use crate::grid::HeightGrid;

/// BLAKE3 digest of a grid as lowercase hex.
///
/// Hashes the dimensions followed by every sample in row-major order, all
/// little-endian, so equal digests mean equal grids.
pub fn grid_digest<G: HeightGrid + ?Sized>(grid: &G) -> GridResult<String> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&grid.width().to_le_bytes());
    hasher.update(&grid.height().to_le_bytes());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            hasher.update(&grid.get_height(x, y)?.to_le_bytes());
        }
    }
    Ok(hasher.finalize().to_hex().to_string())
}
