//! Coarse ASCII rendering of a heightmap for terminal output.

use isleforge_terrain::{HeightGrid, Heightmap};

const RAMP: &[u8] = b" .:-=+*#%@";

/// Renders `grid` as lines of at most `max_columns` characters.
///
/// Cells are sampled on a stride; rows use twice the column stride since
/// terminal cells are roughly twice as tall as they are wide. Brightness is
/// relative to the grid's highest elevation.
pub fn ascii_preview(grid: &Heightmap, max_columns: u32) -> Vec<String> {
    let width = grid.width();
    let height = grid.height();
    let samples = grid.samples();
    let peak = samples.iter().copied().max().unwrap_or(0);

    let stride = width.div_ceil(max_columns.max(1)).max(1) as usize;
    let row_stride = stride * 2;
    let levels = (RAMP.len() - 1) as u32;

    (0..height as usize)
        .step_by(row_stride)
        .map(|y| {
            (0..width as usize)
                .step_by(stride)
                .map(|x| {
                    let value = u32::from(samples[y * width as usize + x]);
                    let level = if peak == 0 {
                        0
                    } else {
                        value * levels / u32::from(peak)
                    };
                    RAMP[level as usize] as char
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ramp_levels() {
        let grid = Heightmap::from_samples(4, 2, vec![0, 3, 6, 9, 9, 9, 9, 9]).unwrap();
        assert_eq!(ascii_preview(&grid, 4), vec![" -*@".to_string()]);
    }

    #[test]
    fn test_flat_zero_grid_is_blank() {
        let grid = Heightmap::square(4).unwrap();
        assert_eq!(ascii_preview(&grid, 80), vec!["    ".to_string(); 2]);
    }

    #[test]
    fn test_downsampling_bounds_width() {
        let grid = Heightmap::square(257).unwrap();
        let lines = ascii_preview(&grid, 64);
        assert!(lines.iter().all(|l| l.len() <= 64));
        assert_eq!(grid.width(), 257);
    }
}
