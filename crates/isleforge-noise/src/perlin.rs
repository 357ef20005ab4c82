//! Gradient (Perlin) noise.

use crate::generator::NoiseGenerator;
use crate::hash::{grad_coord_2d, grad_coord_3d};
use crate::{apply_interp, fast_floor, lerp};

impl NoiseGenerator<'_> {
    /// Single-octave Perlin noise at a frequency-scaled coordinate.
    pub fn perlin_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        self.single_perlin_2d(self.config().seed(), x * freq, y * freq)
    }

    /// Single-octave Perlin noise at a frequency-scaled coordinate.
    pub fn perlin_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        self.single_perlin_3d(self.config().seed(), x * freq, y * freq, z * freq)
    }

    /// Fractal Perlin noise.
    pub fn perlin_fractal_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_2d(|s, x, y| self.single_perlin_2d(s, x, y), x * freq, y * freq)
    }

    /// Fractal Perlin noise.
    pub fn perlin_fractal_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_3d(
            |s, x, y, z| self.single_perlin_3d(s, x, y, z),
            x * freq,
            y * freq,
            z * freq,
        )
    }

    pub(crate) fn single_perlin_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        let interp = self.config().interp();
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let xs = apply_interp(interp, x - x0 as f32);
        let ys = apply_interp(interp, y - y0 as f32);

        let xd0 = x - x0 as f32;
        let yd0 = y - y0 as f32;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;

        let xf0 = lerp(
            grad_coord_2d(seed, x0, y0, xd0, yd0),
            grad_coord_2d(seed, x1, y0, xd1, yd0),
            xs,
        );
        let xf1 = lerp(
            grad_coord_2d(seed, x0, y1, xd0, yd1),
            grad_coord_2d(seed, x1, y1, xd1, yd1),
            xs,
        );
        lerp(xf0, xf1, ys)
    }

    pub(crate) fn single_perlin_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
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

        let xd0 = x - x0 as f32;
        let yd0 = y - y0 as f32;
        let zd0 = z - z0 as f32;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;
        let zd1 = zd0 - 1.0;

        let xf00 = lerp(
            grad_coord_3d(seed, x0, y0, z0, xd0, yd0, zd0),
            grad_coord_3d(seed, x1, y0, z0, xd1, yd0, zd0),
            xs,
        );
        let xf10 = lerp(
            grad_coord_3d(seed, x0, y1, z0, xd0, yd1, zd0),
            grad_coord_3d(seed, x1, y1, z0, xd1, yd1, zd0),
            xs,
        );
        let xf01 = lerp(
            grad_coord_3d(seed, x0, y0, z1, xd0, yd0, zd1),
            grad_coord_3d(seed, x1, y0, z1, xd1, yd0, zd1),
            xs,
        );
        let xf11 = lerp(
            grad_coord_3d(seed, x0, y1, z1, xd0, yd1, zd1),
            grad_coord_3d(seed, x1, y1, z1, xd1, yd1, zd1),
            xs,
        );

        let yf0 = lerp(xf00, xf10, ys);
        let yf1 = lerp(xf01, xf11, ys);
        lerp(yf0, yf1, zs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{NoiseConfig, NoiseGenerator};

    fn generator(seed: i32) -> NoiseGenerator<'static> {
        let mut config = NoiseConfig::new(seed);
        config.set_frequency(1.0);
        NoiseGenerator::new(config).unwrap()
    }

    #[test]
    fn test_zero_at_lattice_points() {
        let gen = generator(42);
        for (x, y) in [(0.0, 0.0), (3.0, 7.0), (12.0, 1.0)] {
            assert_eq!(gen.perlin_2d(x, y), 0.0);
            assert_eq!(gen.perlin_3d(x, y, 5.0), 0.0);
        }
    }

    #[test]
    fn test_seed_changes_output() {
        let a = generator(1).perlin_2d(0.37, 0.61);
        let b = generator(2).perlin_2d(0.37, 0.61);
        assert_ne!(a, b);
    }

    #[test]
    fn test_bounded() {
        let gen = generator(1337);
        for i in 0..400 {
            let t = i as f32 * 0.173;
            let v = gen.perlin_3d(t, t * 0.7, -t * 1.3);
            assert!(v.abs() <= 1.5, "perlin sample {} out of range", v);
        }
    }
}
