//! Golden-value regression tests.
//!
//! These pin exact single-precision outputs. Any change to hashing order,
//! wrapping behavior, table contents or interpolation shows up here first.

use isleforge_noise::hash::{hash_2d, hash_3d, hash_4d, val_coord_2d, val_coord_3d, val_coord_4d};
use isleforge_noise::{
    CellularDistanceFunction, CellularReturnType, FractalType, NoiseConfig, NoiseGenerator,
    NoiseType,
};

fn unit_frequency(seed: i32) -> NoiseConfig {
    let mut config = NoiseConfig::new(seed);
    config.set_frequency(1.0);
    config
}

fn generator(config: NoiseConfig) -> NoiseGenerator<'static> {
    NoiseGenerator::new(config).expect("valid config")
}

// ============================================================================
// Lattice hashing
// ============================================================================

#[test]
fn test_hash_2d_golden() {
    let cases = [
        ((1337, 0, 0), 143_937_226, -0.067_017_846),
        ((1337, 1, 1), 2_052_800_987, 0.955_828_1),
        ((42, -5, 17), 256_519_685, -0.119_455_86),
        ((0, 123_456, -654_321), 482_480_988, 0.224_699_65),
        ((-1, i32::MAX, i32::MIN), 1_436_879_850, -0.669_178_84),
    ];
    for ((seed, x, y), hash, value) in cases {
        assert_eq!(hash_2d(seed, x, y), hash, "hash_2d({}, {}, {})", seed, x, y);
        assert_eq!(
            val_coord_2d(seed, x, y),
            value,
            "val_coord_2d({}, {}, {})",
            seed,
            x,
            y
        );
    }
}

#[test]
fn test_hash_3d_4d_golden() {
    assert_eq!(hash_3d(1337, 1, 2, 3), 628_685_451);
    assert_eq!(hash_4d(1337, 1, 2, 3, 4), 1_344_787_243);
    assert_eq!(val_coord_3d(1337, 1, 2, 3), 0.292_780_07);
    assert_eq!(val_coord_4d(1337, 1, 2, 3, 4), 0.626_138_9);
}

// ============================================================================
// Single-octave families
// ============================================================================

const POINTS_2D: [(f32, f32); 3] = [(0.5, 0.25), (12.75, -3.5), (-7.1, 2.9)];
const Z: f32 = 1.75;

fn assert_samples(noise_type: NoiseType, expected_2d: [f32; 3], expected_3d: [f32; 3]) {
    let mut config = unit_frequency(1337);
    config.set_noise_type(noise_type);
    let gen = generator(config);

    for (i, &(x, y)) in POINTS_2D.iter().enumerate() {
        assert_eq!(
            gen.get_noise_2d(x, y),
            expected_2d[i],
            "{:?} 2D sample at ({}, {})",
            noise_type,
            x,
            y
        );
        assert_eq!(
            gen.get_noise_3d(x, y, Z),
            expected_3d[i],
            "{:?} 3D sample at ({}, {}, {})",
            noise_type,
            x,
            y,
            Z
        );
    }
}

#[test]
fn test_value_golden() {
    assert_samples(
        NoiseType::Value,
        [0.254_033_5, -0.294_630_32, 0.398_153_6],
        [0.309_743_34, 0.049_502_283, 0.167_399_88],
    );
}

#[test]
fn test_perlin_golden() {
    assert_samples(
        NoiseType::Perlin,
        [-0.25, -0.137_939_45, 0.089_742_66],
        [0.274_084_57, 0.155_939_1, 0.187_025_58],
    );
}

#[test]
fn test_simplex_golden() {
    assert_samples(
        NoiseType::Simplex,
        [-0.453_768_76, 0.603_487_9, 0.353_355_3],
        [-0.135_873_42, 0.416_981_76, 0.062_106_747],
    );
}

#[test]
fn test_simplex_4d_golden() {
    let gen = generator(unit_frequency(1337));
    assert_eq!(gen.simplex_4d(0.5, 0.25, -1.5, 2.0), -0.060_537_152);
}

#[test]
fn test_cubic_golden() {
    assert_samples(
        NoiseType::Cubic,
        [0.231_448_75, -0.114_891_61, 0.137_079_54],
        [0.166_927_56, 0.038_017_448, 0.018_790_439],
    );
}

#[test]
fn test_cellular_cell_value_golden() {
    assert_samples(
        NoiseType::Cellular,
        [-0.067_017_846, -0.707_586_2, 0.418_006_54],
        [0.710_967_4, 0.819_851_04, 0.286_439_12],
    );
}

#[test]
fn test_cellular_return_types_golden() {
    let cases = [
        (CellularReturnType::Distance, 0.696_135_8),
        (CellularReturnType::Distance2, 0.862_407_7),
        (CellularReturnType::Distance2Add, 1.558_543_4),
        (CellularReturnType::Distance2Sub, 0.166_271_87),
        (CellularReturnType::Distance2Mul, 0.600_352_9),
        (CellularReturnType::Distance2Div, 0.807_200_4),
    ];
    for (return_type, expected) in cases {
        let mut config = unit_frequency(1337);
        config.set_cellular_return_type(return_type);
        let gen = generator(config);
        assert_eq!(
            gen.cellular_2d(12.75, -3.5),
            expected,
            "{:?} at (12.75, -3.5)",
            return_type
        );
    }
}

#[test]
fn test_cellular_natural_distance_golden() {
    let mut config = unit_frequency(1337);
    config.set_cellular_distance_function(CellularDistanceFunction::Natural);
    config.set_cellular_return_type(CellularReturnType::Distance);
    let gen = generator(config);
    assert_eq!(gen.cellular_3d(12.75, -3.5, 1.75), 1.146_856);
}

// ============================================================================
// Fractal compositing
// ============================================================================

#[test]
fn test_fractal_golden() {
    let cases = [
        (FractalType::Fbm, 0.074_224_584, 0.229_516_07),
        (FractalType::Billow, -0.795_426_55, -0.477_053_3),
        (FractalType::RigidMulti, 0.172_522_68, 0.651_653_1),
    ];
    for (fractal_type, perlin, simplex) in cases {
        let mut config = unit_frequency(1337);
        config.set_fractal_type(fractal_type);
        let gen = generator(config);
        assert_eq!(
            gen.perlin_fractal_2d(0.3, 0.7),
            perlin,
            "{:?} Perlin fractal",
            fractal_type
        );
        assert_eq!(
            gen.simplex_fractal_3d(0.3, 0.7, 1.75),
            simplex,
            "{:?} simplex fractal",
            fractal_type
        );
    }
}

// ============================================================================
// White noise and perturbation
// ============================================================================

#[test]
fn test_white_noise_golden() {
    let gen = generator(NoiseConfig::new(1337));
    assert_eq!(gen.white_noise_2d(1.5, 2.5), 0.259_764_37);
    assert_eq!(gen.white_noise_3d(1.5, 2.5, -3.0), 0.286_863_98);
    assert_eq!(gen.white_noise_4d(1.5, 2.5, -3.0, 0.125), -0.781_495_4);
}

#[test]
fn test_white_noise_dispatch_applies_frequency() {
    let mut config = NoiseConfig::new(1337);
    config.set_noise_type(NoiseType::WhiteNoise);
    let gen = generator(config);
    assert_eq!(gen.get_noise_2d(1.5, 2.5), -0.181_584_64);
}

#[test]
fn test_gradient_perturb_golden() {
    let gen = generator(NoiseConfig::new(1337));

    let (mut x, mut y) = (123.4, -56.7);
    gen.gradient_perturb_2d(&mut x, &mut y);
    assert_eq!((x, y), (124.040_49, -56.212_9));

    let (mut x, mut y) = (123.4, -56.7);
    gen.gradient_perturb_fractal_2d(&mut x, &mut y);
    assert_eq!((x, y), (123.607_85, -56.636_665));

    let (mut x, mut y, mut z) = (123.4, -56.7, 9.0);
    gen.gradient_perturb_3d(&mut x, &mut y, &mut z);
    assert_eq!((x, y, z), (123.508_95, -55.951_06, 8.751_243));
}
