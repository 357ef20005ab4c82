//! Simplex noise in 2D, 3D and 4D.
//!
//! The kernels take their seed explicitly and read no configuration, so the
//! fractal compositor can call them directly.

use crate::fast_floor;
use crate::generator::NoiseGenerator;
use crate::hash::{grad_coord_2d, grad_coord_3d, grad_coord_4d};
use crate::tables::SIMPLEX_4D;

const F2: f32 = 0.366_025_4;
const G2: f32 = 0.211_324_87;
const G2_DOUBLE: f32 = 0.422_649_74;
const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;
const F4: f32 = 0.309_017;
const G4: f32 = 0.138_196_6;
const G4_DOUBLE: f32 = 0.276_393_2;
const G4_TRIPLE: f32 = 0.414_589_82;
const G4_QUAD: f32 = 0.552_786_4;

/// Falloff kernel `(r² − d²)⁴` times the gradient contribution, or zero
/// outside the radius.
#[inline]
fn contribution(n: f32, grad: impl FnOnce() -> f32) -> f32 {
    if n < 0.0 {
        0.0
    } else {
        let n = n * n;
        n * n * grad()
    }
}

pub(crate) fn single_simplex_2d(seed: i32, x: f32, y: f32) -> f32 {
    let t = (x + y) * F2;
    let i = fast_floor(x + t);
    let j = fast_floor(y + t);

    let t = i.wrapping_add(j) as f32 * G2;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;
    let x2 = x0 - 1.0 + G2_DOUBLE;
    let y2 = y0 - 1.0 + G2_DOUBLE;

    let n0 = contribution(0.5 - x0 * x0 - y0 * y0, || {
        grad_coord_2d(seed, i, j, x0, y0)
    });
    let n1 = contribution(0.5 - x1 * x1 - y1 * y1, || {
        grad_coord_2d(seed, i.wrapping_add(i1), j.wrapping_add(j1), x1, y1)
    });
    let n2 = contribution(0.5 - x2 * x2 - y2 * y2, || {
        grad_coord_2d(seed, i.wrapping_add(1), j.wrapping_add(1), x2, y2)
    });

    50.0 * (n0 + n1 + n2)
}

pub(crate) fn single_simplex_3d(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    let t = (x + y + z) * F3;
    let i = fast_floor(x + t);
    let j = fast_floor(y + t);
    let k = fast_floor(z + t);

    let t = i.wrapping_add(j).wrapping_add(k) as f32 * G3;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);
    let z0 = z - (k as f32 - t);

    // Offsets of the second and third simplex corners.
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as f32 + G3;
    let y1 = y0 - j1 as f32 + G3;
    let z1 = z0 - k1 as f32 + G3;
    let x2 = x0 - i2 as f32 + F3;
    let y2 = y0 - j2 as f32 + F3;
    let z2 = z0 - k2 as f32 + F3;
    let x3 = x0 - 0.5;
    let y3 = y0 - 0.5;
    let z3 = z0 - 0.5;

    let n0 = contribution(0.6 - x0 * x0 - y0 * y0 - z0 * z0, || {
        grad_coord_3d(seed, i, j, k, x0, y0, z0)
    });
    let n1 = contribution(0.6 - x1 * x1 - y1 * y1 - z1 * z1, || {
        grad_coord_3d(
            seed,
            i.wrapping_add(i1),
            j.wrapping_add(j1),
            k.wrapping_add(k1),
            x1,
            y1,
            z1,
        )
    });
    let n2 = contribution(0.6 - x2 * x2 - y2 * y2 - z2 * z2, || {
        grad_coord_3d(
            seed,
            i.wrapping_add(i2),
            j.wrapping_add(j2),
            k.wrapping_add(k2),
            x2,
            y2,
            z2,
        )
    });
    let n3 = contribution(0.6 - x3 * x3 - y3 * y3 - z3 * z3, || {
        grad_coord_3d(
            seed,
            i.wrapping_add(1),
            j.wrapping_add(1),
            k.wrapping_add(1),
            x3,
            y3,
            z3,
        )
    });

    32.0 * (n0 + n1 + n2 + n3)
}

pub(crate) fn single_simplex_4d(seed: i32, x: f32, y: f32, z: f32, w: f32) -> f32 {
    let t = (x + y + z + w) * F4;
    let i = fast_floor(x + t);
    let j = fast_floor(y + t);
    let k = fast_floor(z + t);
    let l = fast_floor(w + t);

    let t = i.wrapping_add(j).wrapping_add(k).wrapping_add(l) as f32 * G4;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);
    let z0 = z - (k as f32 - t);
    let w0 = w - (l as f32 - t);

    // Six pairwise comparisons select the traversal order.
    let mut c = 0usize;
    if x0 > y0 {
        c |= 32;
    }
    if x0 > z0 {
        c |= 16;
    }
    if y0 > z0 {
        c |= 8;
    }
    if x0 > w0 {
        c |= 4;
    }
    if y0 > w0 {
        c |= 2;
    }
    if z0 > w0 {
        c |= 1;
    }
    let rank = &SIMPLEX_4D[c << 2..(c << 2) + 4];
    let step = |threshold: u8| -> [i32; 4] {
        std::array::from_fn(|q| i32::from(rank[q] >= threshold))
    };
    let o1 = step(3);
    let o2 = step(2);
    let o3 = step(1);

    let base = [x0, y0, z0, w0];
    let lattice = [i, j, k, l];
    let corner = |offset: [i32; 4], g: f32| -> [f32; 4] {
        std::array::from_fn(|q| base[q] - offset[q] as f32 + g)
    };
    let p1 = corner(o1, G4);
    let p2 = corner(o2, G4_DOUBLE);
    let p3 = corner(o3, G4_TRIPLE);
    let p4 = corner([1; 4], G4_QUAD);

    let term = |p: [f32; 4], offset: [i32; 4]| {
        let n = 0.6 - p[0] * p[0] - p[1] * p[1] - p[2] * p[2] - p[3] * p[3];
        contribution(n, || {
            grad_coord_4d(
                seed,
                lattice[0].wrapping_add(offset[0]),
                lattice[1].wrapping_add(offset[1]),
                lattice[2].wrapping_add(offset[2]),
                lattice[3].wrapping_add(offset[3]),
                p[0],
                p[1],
                p[2],
                p[3],
            )
        })
    };

    27.0 * (term(base, [0; 4]) + term(p1, o1) + term(p2, o2) + term(p3, o3) + term(p4, [1; 4]))
}

impl NoiseGenerator<'_> {
    /// Single-octave simplex noise at a frequency-scaled coordinate.
    pub fn simplex_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        single_simplex_2d(self.config().seed(), x * freq, y * freq)
    }

    /// Single-octave simplex noise at a frequency-scaled coordinate.
    pub fn simplex_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        single_simplex_3d(self.config().seed(), x * freq, y * freq, z * freq)
    }

    /// Single-octave 4D simplex noise at a frequency-scaled coordinate.
    pub fn simplex_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        let freq = self.config().frequency();
        single_simplex_4d(self.config().seed(), x * freq, y * freq, z * freq, w * freq)
    }

    /// Fractal simplex noise.
    pub fn simplex_fractal_2d(&self, x: f32, y: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_2d(single_simplex_2d, x * freq, y * freq)
    }

    /// Fractal simplex noise.
    pub fn simplex_fractal_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let freq = self.config().frequency();
        self.fractal_3d(single_simplex_3d, x * freq, y * freq, z * freq)
    }
}
