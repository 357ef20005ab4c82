//! Fractal compositor.
//!
//! Each octave samples an independent lattice (seed + octave index) at
//! frequency × lacunarity^octave, weighted by gain^octave. FBM and Billow
//! are normalized by the configuration's fractal bounding; Rigid-Multi is
//! not.

use isleforge_spec::FractalType;

use crate::generator::NoiseGenerator;

impl NoiseGenerator<'_> {
    /// Combines octaves of a single-octave 2D evaluator.
    ///
    /// `x` and `y` must already be scaled by the frequency.
    pub(crate) fn fractal_2d<F>(&self, single: F, x: f32, y: f32) -> f32
    where
        F: Fn(i32, f32, f32) -> f32,
    {
        let lacunarity = self.config().lacunarity();
        let (mut x, mut y) = (x, y);
        self.fractal_sum(|octave, seed| {
            if octave > 0 {
                x *= lacunarity;
                y *= lacunarity;
            }
            single(seed, x, y)
        })
    }

    /// Combines octaves of a single-octave 3D evaluator.
    ///
    /// `x`, `y` and `z` must already be scaled by the frequency.
    pub(crate) fn fractal_3d<F>(&self, single: F, x: f32, y: f32, z: f32) -> f32
    where
        F: Fn(i32, f32, f32, f32) -> f32,
    {
        let lacunarity = self.config().lacunarity();
        let (mut x, mut y, mut z) = (x, y, z);
        self.fractal_sum(|octave, seed| {
            if octave > 0 {
                x *= lacunarity;
                y *= lacunarity;
                z *= lacunarity;
            }
            single(seed, x, y, z)
        })
    }

    fn fractal_sum<F>(&self, mut octave: F) -> f32
    where
        F: FnMut(u32, i32) -> f32,
    {
        let config = self.config();
        let fractal_type = config.fractal_type();
        let gain = config.gain();
        let shape = |n: f32| match fractal_type {
            FractalType::Fbm => n,
            FractalType::Billow => n.abs() * 2.0 - 1.0,
            FractalType::RigidMulti => 1.0 - n.abs(),
        };

        let mut seed = config.seed();
        let mut sum = shape(octave(0, seed));
        let mut amp = 1.0f32;

        for i in 1..config.octaves() {
            amp *= gain;
            seed = seed.wrapping_add(1);
            let term = shape(octave(i, seed)) * amp;
            if fractal_type == FractalType::RigidMulti {
                sum -= term;
            } else {
                sum += term;
            }
        }

        match fractal_type {
            FractalType::RigidMulti => sum,
            _ => sum * config.fractal_bounding(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{NoiseConfig, NoiseGenerator};
    use isleforge_spec::FractalType;

    fn generator(fractal_type: FractalType, octaves: u32) -> NoiseGenerator<'static> {
        let mut config = NoiseConfig::new(77);
        config.set_fractal_type(fractal_type);
        config.set_fractal_octaves(octaves).unwrap();
        NoiseGenerator::new(config).unwrap()
    }

    #[test]
    fn test_single_octave_transforms() {
        let single = |seed: i32, x: f32, y: f32| (seed as f32 * 0.001 + x - y).sin();
        let (x, y) = (0.3, -1.7);
        let n = single(77, x, y);

        assert_eq!(generator(FractalType::Fbm, 1).fractal_2d(single, x, y), n);
        assert_eq!(
            generator(FractalType::Billow, 1).fractal_2d(single, x, y),
            n.abs() * 2.0 - 1.0
        );
        assert_eq!(
            generator(FractalType::RigidMulti, 1).fractal_2d(single, x, y),
            1.0 - n.abs()
        );
    }

    #[test]
    fn test_octaves_use_consecutive_seeds_and_scaled_coords() {
        let gen = generator(FractalType::Fbm, 3);
        let seen = std::cell::RefCell::new(Vec::new());
        gen.fractal_2d(
            |seed, x, y| {
                seen.borrow_mut().push((seed, x, y));
                0.0
            },
            1.0,
            2.0,
        );
        assert_eq!(
            seen.into_inner(),
            vec![(77, 1.0, 2.0), (78, 2.0, 4.0), (79, 4.0, 8.0)]
        );
    }

    #[test]
    fn test_fbm_of_constant_is_normalized() {
        // Constant octaves sum to exactly the inverse of the bounding.
        let gen = generator(FractalType::Fbm, 4);
        let v = gen.fractal_3d(|_, _, _, _| 1.0, 0.0, 0.0, 0.0);
        assert!((v - 1.0).abs() < 1e-6, "normalized FBM was {}", v);
    }

    #[test]
    fn test_rigid_multi_not_normalized() {
        // 1 - (0.5 + 0.25) with every octave sampling zero.
        let gen = generator(FractalType::RigidMulti, 3);
        assert_eq!(gen.fractal_2d(|_, _, _| 0.0, 0.0, 0.0), 0.25);
    }

    #[test]
    fn test_seed_wraps() {
        let mut config = NoiseConfig::new(i32::MAX);
        config.set_fractal_octaves(2).unwrap();
        let gen = NoiseGenerator::new(config).unwrap();
        let seeds = std::cell::RefCell::new(Vec::new());
        gen.fractal_2d(
            |seed, _, _| {
                seeds.borrow_mut().push(seed);
                0.0
            },
            0.0,
            0.0,
        );
        assert_eq!(seeds.into_inner(), vec![i32::MAX, i32::MIN]);
    }
}
