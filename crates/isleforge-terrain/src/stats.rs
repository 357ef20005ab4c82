//! Elevation statistics.

use isleforge_spec::HeightmapStats;

use crate::error::GridResult;
use crate::grid::HeightGrid;

/// Computes min, max and mean elevation.
pub fn heightmap_stats<G: HeightGrid + ?Sized>(grid: &G) -> GridResult<HeightmapStats> {
    let mut min = u16::MAX;
    let mut max = u16::MIN;
    let mut sum = 0u64;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let v = grid.get_height(x, y)?;
            min = min.min(v);
            max = max.max(v);
            sum += u64::from(v);
        }
    }
    let cells = u64::from(grid.width()) * u64::from(grid.height());
    let mean = if cells == 0 {
        0.0
    } else {
        sum as f64 / cells as f64
    };
    Ok(HeightmapStats { min, max, mean })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Heightmap;

    #[test]
    fn test_stats() {
        let grid = Heightmap::from_samples(2, 2, vec![0, 10, 20, 30]).unwrap();
        let stats = heightmap_stats(&grid).unwrap();
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 30);
        assert_eq!(stats.mean, 15.0);
    }
}
