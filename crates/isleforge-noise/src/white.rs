//! White noise: the lattice hash applied to raw coordinate bits.
//!
//! The float entry points hash the coordinates exactly as given, without
//! the configured frequency. [`NoiseGenerator::get_noise_2d`] scales first
//! when the noise type is `white_noise`.

use crate::generator::NoiseGenerator;
use crate::hash::{val_coord_2d, val_coord_3d, val_coord_4d};

/// Folds the double-precision bit pattern of `f` into an `i32`.
#[inline]
fn float_cast_to_int(f: f32) -> i32 {
    let bits = f64::from(f).to_bits() as i64;
    (bits ^ (bits >> 32)) as i32
}

impl NoiseGenerator<'_> {
    /// White noise for a 2D coordinate.
    pub fn white_noise_2d(&self, x: f32, y: f32) -> f32 {
        val_coord_2d(
            self.config().seed(),
            float_cast_to_int(x),
            float_cast_to_int(y),
        )
    }

    /// White noise for a 3D coordinate.
    pub fn white_noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        val_coord_3d(
            self.config().seed(),
            float_cast_to_int(x),
            float_cast_to_int(y),
            float_cast_to_int(z),
        )
    }

    /// White noise for a 4D coordinate.
    pub fn white_noise_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        val_coord_4d(
            self.config().seed(),
            float_cast_to_int(x),
            float_cast_to_int(y),
            float_cast_to_int(z),
            float_cast_to_int(w),
        )
    }

    /// White noise for an integer 2D coordinate.
    pub fn white_noise_int_2d(&self, x: i32, y: i32) -> f32 {
        val_coord_2d(self.config().seed(), x, y)
    }

    /// White noise for an integer 3D coordinate.
    pub fn white_noise_int_3d(&self, x: i32, y: i32, z: i32) -> f32 {
        val_coord_3d(self.config().seed(), x, y, z)
    }

    /// White noise for an integer 4D coordinate.
    pub fn white_noise_int_4d(&self, x: i32, y: i32, z: i32, w: i32) -> f32 {
        val_coord_4d(self.config().seed(), x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseConfig;

    #[test]
    fn test_float_cast_to_int() {
        assert_eq!(float_cast_to_int(0.0), 0);
        // 1.0f64 is 0x3FF0_0000_0000_0000.
        assert_eq!(float_cast_to_int(1.0), 0x3FF0_0000);
        // The sign bit survives the fold into the low word.
        assert_eq!(float_cast_to_int(-2.0), 0xC000_0000u32 as i32);
    }

    #[test]
    fn test_white_noise_ignores_frequency() {
        let mut a = NoiseConfig::new(3);
        a.set_frequency(0.5);
        let mut b = NoiseConfig::new(3);
        b.set_frequency(4.0);
        let a = NoiseGenerator::new(a).unwrap();
        let b = NoiseGenerator::new(b).unwrap();
        assert_eq!(a.white_noise_2d(1.5, 2.5), b.white_noise_2d(1.5, 2.5));
    }

    #[test]
    fn test_int_variant_hashes_directly() {
        let gen = NoiseGenerator::new(NoiseConfig::new(1337)).unwrap();
        assert_eq!(gen.white_noise_int_2d(1, 1), val_coord_2d(1337, 1, 1));
        assert_eq!(gen.white_noise_int_4d(1, 2, 3, 4), val_coord_4d(1337, 1, 2, 3, 4));
    }

    #[test]
    fn test_white_noise_decorrelated() {
        let gen = NoiseGenerator::new(NoiseConfig::new(1337)).unwrap();
        let a = gen.white_noise_3d(0.1, 0.2, 0.3);
        let b = gen.white_noise_3d(0.1, 0.2, 0.30001);
        assert_ne!(a, b);
    }
}
