//! Value noise: interpolated per-lattice-point scalars.

use crate::generator::NoiseGenerator;
use crate::hash::{val_coord_2d, val_coord_3d};
use crate::{apply_interp, fast_floor, lerp};

impl NoiseGenerator<'_> {
    /// Single-octave value noise at a frequency-scaled coordinate.
    pub fn value_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        self.single_value_2d(self.config().seed(), x * freq, y * freq)
    }

    /// Single-octave value noise at a frequency-scaled coordinate.
    pub fn value_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        self.single_value_3d(self.config().seed(), x * freq, y * freq, z * freq)
    }

    /// Fractal value noise.
    pub fn value_fractal_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_2d(|s, x, y| self.single_value_2d(s, x, y), x * freq, y * freq)
    }

    /// Fractal value noise.
    pub fn value_fractal_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_3d(
            |s, x, y, z| self.single_value_3d(s, x, y, z),
            x * freq,
            y * freq,
            z * freq,
        )
    }

    pub(crate) fn single_value_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let interp = self.config().interp();
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let xs = apply_interp(interp, x - x0 as f32);
        let ys = apply_interp(interp, y - y0 as f32);

        let xf0 = lerp(val_coord_2d(seed, x0, y0), val_coord_2d(seed, x1, y0), xs);
        let xf1 = lerp(val_coord_2d(seed, x0, y1), val_coord_2d(seed, x1, y1), xs);
        lerp(xf0, xf1, ys)
    }

    pub(crate) fn single_value_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        let interp = self.config().interp();
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let z0 = fast_floor(z);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);
        let z1 = z0.wrapping_add(1);

        let xs = apply_interp(interp, x - x0 as f32);
        let ys = apply_interp(interp, y - y0 as f32);
        let zs = apply_interp(interp, z - z0 as f32);

        let xf00 = lerp(val_coord_3d(seed, x0, y0, z0), val_coord_3d(seed, x1, y0, z0), xs);
        let xf10 = lerp(val_coord_3d(seed, x0, y1, z0), val_coord_3d(seed, x1, y1, z0), xs);
        let xf01 = lerp(val_coord_3d(seed, x0, y0, z1), val_coord_3d(seed, x1, y0, z1), xs);
        let xf11 = lerp(val_coord_3d(seed, x0, y1, z1), val_coord_3d(seed, x1, y1, z1), xs);

        let yf0 = lerp(xf00, xf10, ys);
        let yf1 = lerp(xf01, xf11, ys);
        lerp(yf0, yf1, zs)
    }
}

#[cfg(test)]
mod tests {
    use crate::hash::val_coord_2d;
    use crate::{Interp, NoiseConfig, NoiseGenerator};

    #[test]
    fn test_value_at_lattice_point_is_val_coord() {
        let mut config = NoiseConfig::new(9);
        config.set_frequency(1.0);
        let gen = NoiseGenerator::new(config).unwrap();
        assert_eq!(gen.value_2d(3.0, 4.0), val_coord_2d(9, 3, 4));
    }

    #[test]
    fn test_linear_midpoint_averages_corners() {
        let mut config = NoiseConfig::new(9);
        config.set_frequency(1.0);
        config.set_interp(Interp::Linear);
        let gen = NoiseGenerator::new(config).unwrap();

        let a = val_coord_2d(9, 0, 0);
        let b = val_coord_2d(9, 1, 0);
        let v = gen.value_2d(0.5, 0.0);
        assert!((v - (a + b) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_value_range() {
        let gen = NoiseGenerator::new(NoiseConfig::new(3)).unwrap();
        for i in 0..500 {
            let v = gen.value_3d(i as f32 * 7.1, i as f32 * 3.3, i as f32 * -2.9);
            assert!((-1.0..=1.0).contains(&v), "value noise {} out of range", v);
        }
    }
}
