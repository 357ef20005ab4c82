//! Cellular (Worley) noise.
//!
//! Each lattice cell holds one feature point at the cell corner displaced by
//! a hashed unit vector scaled by the jitter. A sample scans the 3×3 (or
//! 3×3×3) cells around the rounded coordinate.

use isleforge_spec::{CellularDistanceFunction, CellularReturnType};

use crate::fast_round;
use crate::generator::NoiseGenerator;
use crate::hash::{hash_2d, hash_3d, val_coord_2d, val_coord_3d};
use crate::tables::{CELL_2D, CELL_3D};

/// Initial "infinitely far" distance.
const FAR: f32 = 999_999.0;

/// Distance under the configured metric. Euclidean distances are squared.
fn distance(function: CellularDistanceFunction, v: &[f32]) -> f32 {
    let abs_sum = || v.iter().skip(1).fold(v[0].abs(), |acc, c| acc + c.abs());
    let sq_sum = || v.iter().skip(1).fold(v[0] * v[0], |acc, c| acc + c * c);
    match function {
        CellularDistanceFunction::Euclidean => sq_sum(),
        CellularDistanceFunction::Manhattan => abs_sum(),
        CellularDistanceFunction::Natural => abs_sum() + sq_sum(),
    }
}

/// Keeps the `index1 + 1` smallest distances in ascending order.
#[inline]
fn insert_rank(ranks: &mut [f32; 4], index1: usize, d: f32) {
    for i in (1..=index1).rev() {
        ranks[i] = ranks[i].min(d).max(ranks[i - 1]);
    }
    ranks[0] = ranks[0].min(d);
}

fn combine_ranks(return_type: CellularReturnType, ranks: &[f32; 4], i0: usize, i1: usize) -> f32 {
    match return_type {
        CellularReturnType::Distance2Add => ranks[i1] + ranks[i0],
        CellularReturnType::Distance2Sub => ranks[i1] - ranks[i0],
        CellularReturnType::Distance2Mul => ranks[i1] * ranks[i0],
        CellularReturnType::Distance2Div => ranks[i0] / ranks[i1],
        _ => ranks[i1],
    }
}

impl NoiseGenerator<'_> {
    /// Cellular noise at a frequency-scaled coordinate.
    pub fn cellular_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        self.single_cellular_2d(x * freq, y * freq)
    }

    /// Cellular noise at a frequency-scaled coordinate.
    pub fn cellular_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        self.single_cellular_3d(x * freq, y * freq, z * freq)
    }

    pub(crate) fn single_cellular_2d(&self, x: f32, y: f32) -> f32 {
        let config = self.config();
        let seed = config.seed();
        let jitter = config.cellular_jitter();
        let function = config.cellular_distance_function();
        let return_type = config.cellular_return_type();
        let (i0, i1) = config.cellular_distance_indices();

        let xr = fast_round(x);
        let yr = fast_round(y);

        let mut best = FAR;
        let mut best_cell = (0, 0);
        let mut ranks = [FAR; 4];

        for xi in xr.wrapping_sub(1)..=xr.wrapping_add(1) {
            for yi in yr.wrapping_sub(1)..=yr.wrapping_add(1) {
                let [cx, cy] = CELL_2D[(hash_2d(seed, xi, yi) & 255) as usize];
                let vx = xi as f32 - x + cx * jitter;
                let vy = yi as f32 - y + cy * jitter;
                let d = distance(function, &[vx, vy]);

                if return_type.uses_distance_ranks() {
                    insert_rank(&mut ranks, i1, d);
                } else if d < best {
                    best = d;
                    best_cell = (xi, yi);
                }
            }
        }

        let (bx, by) = best_cell;
        match return_type {
            CellularReturnType::CellValue => val_coord_2d(seed, bx, by),
            CellularReturnType::Distance => best,
            CellularReturnType::NoiseLookup => {
                let [cx, cy] = CELL_2D[(hash_2d(seed, bx, by) & 255) as usize];
                match self.lookup() {
                    Some(lookup) => {
                        lookup.get_noise_2d(bx as f32 + cx * jitter, by as f32 + cy * jitter)
                    }
                    None => 0.0,
                }
            }
            _ => combine_ranks(return_type, &ranks, i0, i1),
        }
    }

    pub(crate) fn single_cellular_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let config = self.config();
        let seed = config.seed();
        let jitter = config.cellular_jitter();
        let function = config.cellular_distance_function();
        let return_type = config.cellular_return_type();
        let (i0, i1) = config.cellular_distance_indices();

        let xr = fast_round(x);
        let yr = fast_round(y);
        let zr = fast_round(z);

        let mut best = FAR;
        let mut best_cell = (0, 0, 0);
        let mut ranks = [FAR; 4];

        for xi in xr.wrapping_sub(1)..=xr.wrapping_add(1) {
            for yi in yr.wrapping_sub(1)..=yr.wrapping_add(1) {
                for zi in zr.wrapping_sub(1)..=zr.wrapping_add(1) {
                    let [cx, cy, cz] = CELL_3D[(hash_3d(seed, xi, yi, zi) & 255) as usize];
                    let vx = xi as f32 - x + cx * jitter;
                    let vy = yi as f32 - y + cy * jitter;
                    let vz = zi as f32 - z + cz * jitter;
                    let d = distance(function, &[vx, vy, vz]);

                    if return_type.uses_distance_ranks() {
                        insert_rank(&mut ranks, i1, d);
                    } else if d < best {
                        best = d;
                        best_cell = (xi, yi, zi);
                    }
                }
            }
        }

        let (bx, by, bz) = best_cell;
        match return_type {
            CellularReturnType::CellValue => val_coord_3d(seed, bx, by, bz),
            CellularReturnType::Distance => best,
            CellularReturnType::NoiseLookup => {
                let [cx, cy, cz] = CELL_3D[(hash_3d(seed, bx, by, bz) & 255) as usize];
                match self.lookup() {
                    Some(lookup) => lookup.get_noise_3d(
                        bx as f32 + cx * jitter,
                        by as f32 + cy * jitter,
                        bz as f32 + cz * jitter,
                    ),
                    None => 0.0,
                }
            }
            _ => combine_ranks(return_type, &ranks, i0, i1),
        }
    }
}
