//! Smoothing pass: 3×3 box filter over interior cells.
//!
//! The outermost ring is never written. In `in_place` mode each cell reads
//! neighbors that may already hold this iteration's output, so the
//! traversal order changes the result; `double_buffered` mode reads only
//! the previous iteration and is order-independent.

use isleforge_spec::{SmoothingMode, SmoothingOrder, SmoothingParams};

use crate::convert::saturate_u16;
use crate::error::SynthesisResult;
use crate::grid::{snapshot, HeightGrid};

/// Runs the configured number of smoothing iterations.
///
/// Grids narrower or shorter than three cells have no interior and are left
/// unchanged. Returns the number of saturated writes.
pub fn smooth<G: HeightGrid + ?Sized>(
    grid: &mut G,
    params: &SmoothingParams,
) -> SynthesisResult<u64> {
    let mut saturated = 0u64;
    for _ in 0..params.iterations {
        saturated += match params.mode {
            SmoothingMode::InPlace => smooth_in_place(grid, params.order)?,
            SmoothingMode::DoubleBuffered => smooth_double_buffered(grid)?,
        };
    }
    Ok(saturated)
}

fn box_mean(sum: u32) -> f32 {
    sum as f32 / 9.0
}

fn neighborhood_sum<G: HeightGrid + ?Sized>(grid: &G, x: u32, y: u32) -> SynthesisResult<u32> {
    let mut sum = 0u32;
    for nx in x - 1..=x + 1 {
        for ny in y - 1..=y + 1 {
            sum += u32::from(grid.get_height(nx, ny)?);
        }
    }
    Ok(sum)
}

fn interior(len: u32) -> std::ops::Range<u32> {
    1..len.saturating_sub(1)
}

/// One in-place iteration.
pub fn smooth_in_place<G: HeightGrid + ?Sized>(
    grid: &mut G,
    order: SmoothingOrder,
) -> SynthesisResult<u64> {
    let (width, height) = (grid.width(), grid.height());
    let mut saturated = 0u64;
    let mut visit = |grid: &mut G, x: u32, y: u32| -> SynthesisResult<()> {
        let converted = saturate_u16(box_mean(neighborhood_sum(grid, x, y)?));
        saturated += u64::from(converted.saturated);
        grid.set_height(x, y, converted.value)?;
        Ok(())
    };

    match order {
        SmoothingOrder::ColumnMajor => {
            for x in interior(width) {
                for y in interior(height) {
                    visit(grid, x, y)?;
                }
            }
        }
        SmoothingOrder::RowMajor => {
            for y in interior(height) {
                for x in interior(width) {
                    visit(grid, x, y)?;
                }
            }
        }
    }
    Ok(saturated)
}

/// One iteration that reads only the grid as it was before the iteration.
pub fn smooth_double_buffered<G: HeightGrid + ?Sized>(grid: &mut G) -> SynthesisResult<u64> {
    let (width, height) = (grid.width(), grid.height());
    let previous = snapshot(grid)?;
    let at = |x: u32, y: u32| u32::from(previous[y as usize * width as usize + x as usize]);

    let mut saturated = 0u64;
    for x in interior(width) {
        for y in interior(height) {
            let mut sum = 0u32;
            for nx in x - 1..=x + 1 {
                for ny in y - 1..=y + 1 {
                    sum += at(nx, ny);
                }
            }
            let converted = saturate_u16(box_mean(sum));
            saturated += u64::from(converted.saturated);
            grid.set_height(x, y, converted.value)?;
        }
    }
    Ok(saturated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Heightmap;
    use pretty_assertions::assert_eq;

    fn params(iterations: u32, mode: SmoothingMode, order: SmoothingOrder) -> SmoothingParams {
        SmoothingParams {
            iterations,
            mode,
            order,
        }
    }

    #[test]
    fn test_flat_grid_unchanged() {
        for mode in [SmoothingMode::InPlace, SmoothingMode::DoubleBuffered] {
            let mut grid = Heightmap::from_samples(6, 5, vec![321; 30]).unwrap();
            smooth(&mut grid, &params(5, mode, SmoothingOrder::ColumnMajor)).unwrap();
            assert_eq!(grid.samples(), &[321; 30][..]);
        }
    }

    #[test]
    fn test_border_ring_never_written() {
        let samples: Vec<u16> = (0..49).map(|i| (i * 37 % 101) as u16).collect();
        let original = Heightmap::from_samples(7, 7, samples).unwrap();
        let mut grid = original.clone();
        smooth(
            &mut grid,
            &params(10, SmoothingMode::InPlace, SmoothingOrder::RowMajor),
        )
        .unwrap();

        for i in 0..7 {
            for (x, y) in [(i, 0), (i, 6), (0, i), (6, i)] {
                assert_eq!(
                    grid.get_height(x, y).unwrap(),
                    original.get_height(x, y).unwrap(),
                    "border cell ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_single_spike_in_place_column_major() {
        // 4x4 grid, spike of 90 at (1, 1). Column-major visits (1,1), (1,2),
        // (2,1), (2,2), each reading already-smoothed neighbors.
        let mut grid = Heightmap::new(4, 4).unwrap();
        grid.set_height(1, 1, 90).unwrap();
        smooth_in_place(&mut grid, SmoothingOrder::ColumnMajor).unwrap();

        assert_eq!(grid.get_height(1, 1).unwrap(), 10);
        assert_eq!(grid.get_height(1, 2).unwrap(), 1);
        assert_eq!(grid.get_height(2, 1).unwrap(), 1);
        assert_eq!(grid.get_height(2, 2).unwrap(), 1);
    }

    #[test]
    fn test_single_spike_double_buffered() {
        let mut grid = Heightmap::new(4, 4).unwrap();
        grid.set_height(1, 1, 90).unwrap();
        smooth_double_buffered(&mut grid).unwrap();

        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(grid.get_height(x, y).unwrap(), 10, "cell ({}, {})", x, y);
        }
    }

    #[test]
    fn test_order_matters_in_place() {
        let samples: Vec<u16> = (0..36).map(|i| (i * i * 7 % 250) as u16).collect();
        let mut a = Heightmap::from_samples(6, 6, samples.clone()).unwrap();
        let mut b = Heightmap::from_samples(6, 6, samples).unwrap();
        smooth_in_place(&mut a, SmoothingOrder::ColumnMajor).unwrap();
        smooth_in_place(&mut b, SmoothingOrder::RowMajor).unwrap();
        assert_ne!(a.samples(), b.samples());
    }

    #[test]
    fn test_tiny_grids_have_no_interior() {
        let mut grid = Heightmap::from_samples(2, 5, vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 5]).unwrap();
        let before = grid.clone();
        smooth(
            &mut grid,
            &params(3, SmoothingMode::InPlace, SmoothingOrder::ColumnMajor),
        )
        .unwrap();
        assert_eq!(grid, before);
    }
}
