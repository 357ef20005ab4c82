//! Gradient perturbation (domain warping).
//!
//! Displaces a coordinate by a smoothly interpolated lattice vector drawn
//! from the cell-point tables. Applying it before sampling another noise
//! field warps that field's domain.

use crate::generator::NoiseGenerator;
use crate::hash::{hash_2d, hash_3d};
use crate::tables::{CELL_2D, CELL_3D};
use crate::{apply_interp, fast_floor, lerp};

impl NoiseGenerator<'_> {
    /// Displaces `(x, y)` once at the configured frequency and amplitude.
    pub fn gradient_perturb_2d(&self, x: &mut f32, y: &mut f32) {
        let config = self.config();
        self.single_perturb_2d(
            config.seed(),
            config.gradient_perturb_amp(),
            config.frequency(),
            x,
            y,
        );
    }

    /// Displaces `(x, y)` once per octave.
    ///
    /// The amplitude starts at `gradient_perturb_amp × fractal_bounding` and
    /// is multiplied by the gain per octave; frequency is multiplied by the
    /// lacunarity and the seed incremented.
    pub fn gradient_perturb_fractal_2d(&self, x: &mut f32, y: &mut f32) {
        let config = self.config();
        let mut seed = config.seed();
        let mut amp = config.gradient_perturb_amp() * config.fractal_bounding();
        let mut freq = config.frequency();

        self.single_perturb_2d(seed, amp, freq, x, y);
        for _ in 1..config.octaves() {
            freq *= config.lacunarity();
            amp *= config.gain();
            seed = seed.wrapping_add(1);
            self.single_perturb_2d(seed, amp, freq, x, y);
        }
    }

    /// Displaces `(x, y, z)` once at the configured frequency and amplitude.
    pub fn gradient_perturb_3d(&self, x: &mut f32, y: &mut f32, z: &mut f32) {
        let config = self.config();
        self.single_perturb_3d(
            config.seed(),
            config.gradient_perturb_amp(),
            config.frequency(),
            x,
            y,
            z,
        );
    }

    /// Displaces `(x, y, z)` once per octave.
    pub fn gradient_perturb_fractal_3d(&self, x: &mut f32, y: &mut f32, z: &mut f32) {
        let config = self.config();
        let mut seed = config.seed();
        let mut amp = config.gradient_perturb_amp() * config.fractal_bounding();
        let mut freq = config.frequency();

        self.single_perturb_3d(seed, amp, freq, x, y, z);
        for _ in 1..config.octaves() {
            freq *= config.lacunarity();
            amp *= config.gain();
            seed = seed.wrapping_add(1);
            self.single_perturb_3d(seed, amp, freq, x, y, z);
        }
    }

    fn single_perturb_2d(&self, seed: i32, amp: f32, freq: f32, x: &mut f32, y: &mut f32) {
        let interp = self.config().interp();
        let xf = *x * freq;
        let yf = *y * freq;

        let x0 = fast_floor(xf);
        let y0 = fast_floor(yf);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let xs = apply_interp(interp, xf - x0 as f32);
        let ys = apply_interp(interp, yf - y0 as f32);

        let edge = |yy: i32| {
            let a = CELL_2D[(hash_2d(seed, x0, yy) & 255) as usize];
            let b = CELL_2D[(hash_2d(seed, x1, yy) & 255) as usize];
            [lerp(a[0], b[0], xs), lerp(a[1], b[1], xs)]
        };
        let e0 = edge(y0);
        let e1 = edge(y1);

        *x += lerp(e0[0], e1[0], ys) * amp;
        *y += lerp(e0[1], e1[1], ys) * amp;
    }

    #[allow(clippy::too_many_arguments)]
    fn single_perturb_3d(
        &self,
        seed: i32,
        amp: f32,
        freq: f32,
        x: &mut f32,
        y: &mut f32,
        z: &mut f32,
    ) {
        let interp = self.config().interp();
        let xf = *x * freq;
        let yf = *y * freq;
        let zf = *z * freq;

        let x0 = fast_floor(xf);
        let y0 = fast_floor(yf);
        let z0 = fast_floor(zf);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);
        let z1 = z0.wrapping_add(1);

        let xs = apply_interp(interp, xf - x0 as f32);
        let ys = apply_interp(interp, yf - y0 as f32);
        let zs = apply_interp(interp, zf - z0 as f32);

        let edge = |yy: i32, zz: i32| -> [f32; 3] {
            let a = CELL_3D[(hash_3d(seed, x0, yy, zz) & 255) as usize];
            let b = CELL_3D[(hash_3d(seed, x1, yy, zz) & 255) as usize];
            std::array::from_fn(|q| lerp(a[q], b[q], xs))
        };
        let face = |zz: i32| -> [f32; 3] {
            let e0 = edge(y0, zz);
            let e1 = edge(y1, zz);
            std::array::from_fn(|q| lerp(e0[q], e1[q], ys))
        };
        let f0 = face(z0);
        let f1 = face(z1);

        *x += lerp(f0[0], f1[0], zs) * amp;
        *y += lerp(f0[1], f1[1], zs) * amp;
        *z += lerp(f0[2], f1[2], zs) * amp;
    }
}
