//! Cubic (Catmull-Rom style) value noise over a 4×4 or 4×4×4 neighborhood.

use crate::generator::NoiseGenerator;
use crate::hash::{val_coord_2d, val_coord_3d};
use crate::{cubic_lerp, fast_floor};

/// Rescales 2D cubic output toward [-1, 1].
const CUBIC_2D_BOUNDING: f32 = 1.0 / (1.5 * 1.5);
/// Rescales 3D cubic output toward [-1, 1].
const CUBIC_3D_BOUNDING: f32 = 1.0 / (1.5 * 1.5 * 1.5);

/// Lattice offsets of the four samples along one axis.
const TAPS: [i32; 4] = [-1, 0, 1, 2];

fn cubic_row(f: impl Fn(i32) -> f32, t: f32) -> f32 {
    cubic_lerp(f(TAPS[0]), f(TAPS[1]), f(TAPS[2]), f(TAPS[3]), t)
}

pub(crate) fn single_cubic_2d(seed: i32, x: f32, y: f32) -> f32 {
    let x1 = fast_floor(x);
    let y1 = fast_floor(y);
    let xs = x - x1 as f32;
    let ys = y - y1 as f32;

    let row = |dy: i32| {
        let yy = y1.wrapping_add(dy);
        cubic_row(|dx| val_coord_2d(seed, x1.wrapping_add(dx), yy), xs)
    };
    cubic_row(row, ys) * CUBIC_2D_BOUNDING
}

pub(crate) fn single_cubic_3d(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    let x1 = fast_floor(x);
    let y1 = fast_floor(y);
    let z1 = fast_floor(z);
    let xs = x - x1 as f32;
    let ys = y - y1 as f32;
    let zs = z - z1 as f32;

    let layer = |dz: i32| {
        let zz = z1.wrapping_add(dz);
        let row = |dy: i32| {
            let yy = y1.wrapping_add(dy);
            cubic_row(|dx| val_coord_3d(seed, x1.wrapping_add(dx), yy, zz), xs)
        };
        cubic_row(row, ys)
    };
    cubic_row(layer, zs) * CUBIC_3D_BOUNDING
}

impl NoiseGenerator<'_> {
    /// Single-octave cubic noise at a frequency-scaled coordinate.
    pub fn cubic_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        single_cubic_2d(self.config().seed(), x * freq, y * freq)
    }

    /// Single-octave cubic noise at a frequency-scaled coordinate.
    pub fn cubic_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        single_cubic_3d(self.config().seed(), x * freq, y * freq, z * freq)
    }

    /// Fractal cubic noise.
    pub fn cubic_fractal_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_2d(single_cubic_2d, x * freq, y * freq)
    }

    /// Fractal cubic noise.
    pub fn cubic_fractal_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_3d(single_cubic_3d, x * freq, y * freq, z * freq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_point_is_scaled_value() {
        // At integer coordinates the spline passes through the center sample.
        let v = single_cubic_2d(11, 4.0, 9.0);
        assert_eq!(v, val_coord_2d(11, 4, 9) * CUBIC_2D_BOUNDING);
    }

    #[test]
    fn test_cubic_bounded() {
        for i in 0..300 {
            let t = i as f32 * 0.29;
            assert!(single_cubic_2d(5, t, -t).abs() <= 1.0001);
            assert!(single_cubic_3d(5, t, t * 0.5, -t).abs() <= 1.0001);
        }
    }
}
