//! Float to elevation conversion.

/// Result of narrowing a float elevation to `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elevation {
    /// The stored value.
    pub value: u16,
    /// Whether the input fell outside the representable range and was
    /// clamped.
    pub saturated: bool,
}

/// Truncates toward zero into `u16`, saturating instead of wrapping.
///
/// NaN becomes 0. Inputs whose truncation is negative clamp to 0 and
/// inputs whose truncation exceeds 65535 clamp to 65535; both are reported
/// as saturated. Values in (-1, 0) truncate to 0 without saturating.
#[inline]
pub fn saturate_u16(value: f32) -> Elevation {
    if value.is_nan() {
        return Elevation {
            value: 0,
            saturated: true,
        };
    }
    let truncated = value.trunc();
    if truncated < 0.0 {
        Elevation {
            value: 0,
            saturated: true,
        }
    } else if truncated > f32::from(u16::MAX) {
        Elevation {
            value: u16::MAX,
            saturated: true,
        }
    } else {
        Elevation {
            value: truncated as u16,
            saturated: false,
        }
    }
}

/// Maps noise in [-1, 1] to [0, 1].
#[inline]
pub fn to_unit_range(n: f32) -> f32 {
    (1.0 + n) / 2.0
}
