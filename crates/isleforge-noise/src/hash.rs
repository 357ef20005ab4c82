//! Lattice hashing.
//!
//! Every function here is total over `i32` inputs. Multiplications wrap on
//! overflow and the right shift is arithmetic; both are part of the output
//! contract, so seeds keep producing the same lattice.

use crate::tables::{GRAD_2D, GRAD_3D};

/// Lattice prime for the x axis.
pub const X_PRIME: i32 = 1619;
/// Lattice prime for the y axis.
pub const Y_PRIME: i32 = 31337;
/// Lattice prime for the z axis.
pub const Z_PRIME: i32 = 6971;
/// Lattice prime for the w axis.
pub const W_PRIME: i32 = 1013;

const CUBE_PRIME: i32 = 60493;

/// Scale mapping a full-range `i32` into [-1, 1].
const VAL_SCALE: f32 = 2_147_483_648.0;

#[inline]
fn cube_mix(n: i32) -> i32 {
    n.wrapping_mul(n).wrapping_mul(n).wrapping_mul(CUBE_PRIME)
}

#[inline]
fn avalanche(n: i32) -> i32 {
    let n = cube_mix(n);
    (n >> 13) ^ n
}

#[inline]
fn seed_2d(seed: i32, x: i32, y: i32) -> i32 {
    seed ^ X_PRIME.wrapping_mul(x) ^ Y_PRIME.wrapping_mul(y)
}

#[inline]
fn seed_3d(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    seed_2d(seed, x, y) ^ Z_PRIME.wrapping_mul(z)
}

#[inline]
fn seed_4d(seed: i32, x: i32, y: i32, z: i32, w: i32) -> i32 {
    seed_3d(seed, x, y, z) ^ W_PRIME.wrapping_mul(w)
}

/// Hashes a 2D lattice point.
#[inline]
pub fn hash_2d(seed: i32, x: i32, y: i32) -> i32 {
    avalanche(seed_2d(seed, x, y))
}

/// Hashes a 3D lattice point.
#[inline]
pub fn hash_3d(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    avalanche(seed_3d(seed, x, y, z))
}

/// Hashes a 4D lattice point.
#[inline]
pub fn hash_4d(seed: i32, x: i32, y: i32, z: i32, w: i32) -> i32 {
    avalanche(seed_4d(seed, x, y, z, w))
}

/// Pseudo-random scalar in [-1, 1] for a 2D lattice point.
#[inline]
pub fn val_coord_2d(seed: i32, x: i32, y: i32) -> f32 {
    cube_mix(seed_2d(seed, x, y)) as f32 / VAL_SCALE
}

/// Pseudo-random scalar in [-1, 1] for a 3D lattice point.
#[inline]
pub fn val_coord_3d(seed: i32, x: i32, y: i32, z: i32) -> f32 {
    cube_mix(seed_3d(seed, x, y, z)) as f32 / VAL_SCALE
}

/// Pseudo-random scalar in [-1, 1] for a 4D lattice point.
#[inline]
pub fn val_coord_4d(seed: i32, x: i32, y: i32, z: i32, w: i32) -> f32 {
    cube_mix(seed_4d(seed, x, y, z, w)) as f32 / VAL_SCALE
}

/// Dot product of the lattice point's gradient with the offset `(xd, yd)`.
#[inline]
pub fn grad_coord_2d(seed: i32, x: i32, y: i32, xd: f32, yd: f32) -> f32 {
    let [gx, gy] = GRAD_2D[(hash_2d(seed, x, y) & 7) as usize];
    xd * gx + yd * gy
}

/// Dot product of the lattice point's gradient with the offset `(xd, yd, zd)`.
#[inline]
pub fn grad_coord_3d(seed: i32, x: i32, y: i32, z: i32, xd: f32, yd: f32, zd: f32) -> f32 {
    let [gx, gy, gz] = GRAD_3D[(hash_3d(seed, x, y, z) & 15) as usize];
    xd * gx + yd * gy + zd * gz
}

/// 4D gradient contribution.
///
/// The low five hash bits pick one of four axis triples (bits 3-4) and a
/// sign for each of its three components (bits 0-2).
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn grad_coord_4d(
    seed: i32,
    x: i32,
    y: i32,
    z: i32,
    w: i32,
    xd: f32,
    yd: f32,
    zd: f32,
    wd: f32,
) -> f32 {
    let hash = hash_4d(seed, x, y, z, w) & 31;
    let (a, b, c) = match hash >> 3 {
        1 => (wd, xd, yd),
        2 => (zd, wd, xd),
        _ => (yd, zd, wd),
    };
    let signed = |value: f32, bit: i32| if hash & bit == 0 { -value } else { value };
    signed(a, 4) + signed(b, 2) + signed(c, 1)
}
