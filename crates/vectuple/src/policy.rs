//! Numeric primitives the vector kernels are built on.
//!
//! The kernels never call `f32::sqrt` or `f32::sin` directly. They go through a [`ScalarPolicy`]
//! instead, which is chosen at compile time as a type parameter. This makes it possible to trade
//! precision for speed (see [`FastPolicy`]) or to avoid the platform math library (see
//! `LibmPolicy`, behind the `libm` feature) without touching kernel code.

/// Rounding conventions applied by the `round` kernel operations.
///
/// Every mode is total over `f32`: finite inputs map to an integral value, while `NaN` and the
/// infinities are returned unchanged (in every mode and every dimension).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round towards positive infinity.
    Ceil,
    /// Round towards negative infinity.
    Floor,
    /// Round to the nearest integer. Halfway cases are rounded away from zero, so `2.5` becomes
    /// `3.0` and `-2.5` becomes `-3.0`.
    RoundNearest,
    /// Round towards zero, discarding the fractional part.
    Truncate,
}

impl RoundingMode {
    /// All rounding modes, in declaration order.
    pub const ALL: [Self; 4] = [Self::Ceil, Self::Floor, Self::RoundNearest, Self::Truncate];
}

/// Returns whether `value` lies within `tolerance` of zero, ie. `|value| <= tolerance`.
///
/// `NaN` is never zero. A `tolerance` of `0.0` performs an exact check (`-0.0` counts as zero).
#[inline]
pub fn is_zero(value: f32, tolerance: f32) -> bool {
    value.abs() <= tolerance
}

/// A substitutable set of scalar math routines.
///
/// Implementations must be stateless: all methods are associated functions, and the kernels may
/// call them from any number of threads at once.
pub trait ScalarPolicy {
    /// Square root of `x`. Only ever called with non-negative `x`.
    fn sqrt(x: f32) -> f32;

    /// Reciprocal square root `1 / sqrt(x)`. Only ever called with positive `x`.
    fn inv_sqrt(x: f32) -> f32 {
        1.0 / Self::sqrt(x)
    }

    /// Sine of `angle` (in radians).
    fn sin(angle: f32) -> f32;

    /// Cosine of `angle` (in radians).
    fn cos(angle: f32) -> f32;

    /// Computes sine and cosine of `angle` at the same time.
    fn sin_cos(angle: f32) -> (f32, f32) {
        (Self::sin(angle), Self::cos(angle))
    }

    /// Rounds `value` according to `mode`.
    fn round(value: f32, mode: RoundingMode) -> f32;

    /// See [`is_zero`].
    #[inline]
    fn is_zero(value: f32, tolerance: f32) -> bool {
        is_zero(value, tolerance)
    }
}

/// The default policy, using the inherent `f32` methods of the standard library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdPolicy;

impl ScalarPolicy for StdPolicy {
    #[inline]
    fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn sin(angle: f32) -> f32 {
        angle.sin()
    }

    #[inline]
    fn cos(angle: f32) -> f32 {
        angle.cos()
    }

    #[inline]
    fn sin_cos(angle: f32) -> (f32, f32) {
        angle.sin_cos()
    }

    #[inline]
    fn round(value: f32, mode: RoundingMode) -> f32 {
        match mode {
            RoundingMode::Ceil => value.ceil(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::RoundNearest => value.round(),
            RoundingMode::Truncate => value.trunc(),
        }
    }
}

/// A policy that computes reciprocal square roots with the bit-level approximation popularized
/// by Quake III, refined by two Newton-Raphson steps.
///
/// The relative error of [`FastPolicy::inv_sqrt`] stays below `1e-5` for normal inputs.
/// Subnormal, zero, infinite and `NaN` inputs fall back to the exact computation. Trigonometry
/// and rounding are identical to [`StdPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastPolicy;

impl FastPolicy {
    const MAGIC: u32 = 0x5f37_59df;
}

impl ScalarPolicy for FastPolicy {
    #[inline]
    fn sqrt(x: f32) -> f32 {
        if !x.is_normal() {
            return x.sqrt();
        }
        x * Self::inv_sqrt(x)
    }

    #[inline]
    fn inv_sqrt(x: f32) -> f32 {
        if !x.is_normal() || x < 0.0 {
            return 1.0 / x.sqrt();
        }

        let half = 0.5 * x;
        let mut y = f32::from_bits(Self::MAGIC - (x.to_bits() >> 1));
        y *= 1.5 - half * y * y;
        y *= 1.5 - half * y * y;
        y
    }

    #[inline]
    fn sin(angle: f32) -> f32 {
        StdPolicy::sin(angle)
    }

    #[inline]
    fn cos(angle: f32) -> f32 {
        StdPolicy::cos(angle)
    }

    #[inline]
    fn sin_cos(angle: f32) -> (f32, f32) {
        StdPolicy::sin_cos(angle)
    }

    #[inline]
    fn round(value: f32, mode: RoundingMode) -> f32 {
        StdPolicy::round(value, mode)
    }
}

/// A policy backed by the pure-Rust [`libm`] crate.
///
/// Useful where the platform math library is unavailable or where bit-identical results across
/// targets are wanted.
#[cfg(feature = "libm")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibmPolicy;

#[cfg(feature = "libm")]
impl ScalarPolicy for LibmPolicy {
    #[inline]
    fn sqrt(x: f32) -> f32 {
        libm::sqrtf(x)
    }

    #[inline]
    fn sin(angle: f32) -> f32 {
        libm::sinf(angle)
    }

    #[inline]
    fn cos(angle: f32) -> f32 {
        libm::cosf(angle)
    }

    #[inline]
    fn sin_cos(angle: f32) -> (f32, f32) {
        libm::sincosf(angle)
    }

    #[inline]
    fn round(value: f32, mode: RoundingMode) -> f32 {
        match mode {
            RoundingMode::Ceil => libm::ceilf(value),
            RoundingMode::Floor => libm::floorf(value),
            RoundingMode::RoundNearest => libm::roundf(value),
            RoundingMode::Truncate => libm::truncf(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_check() {
        assert!(is_zero(0.0, 0.0));
        assert!(is_zero(-0.0, 0.0));
        assert!(!is_zero(f32::MIN_POSITIVE, 0.0));
        assert!(is_zero(0.5, 0.5));
        assert!(is_zero(-0.5, 0.5));
        assert!(!is_zero(0.50001, 0.5));
        assert!(!is_zero(f32::NAN, f32::INFINITY));
        assert!(is_zero(f32::MAX, f32::INFINITY));
    }

    #[test]
    fn rounding() {
        let cases = [
            (2.5, [3.0, 2.0, 3.0, 2.0]),
            (-2.5, [-2.0, -3.0, -3.0, -2.0]),
            (1.2, [2.0, 1.0, 1.0, 1.0]),
            (-1.2, [-1.0, -2.0, -1.0, -1.0]),
            (-0.7, [-0.0, -1.0, -1.0, -0.0]),
            (4.0, [4.0, 4.0, 4.0, 4.0]),
        ];
        for (value, expected) in cases {
            for (mode, expected) in RoundingMode::ALL.into_iter().zip(expected) {
                assert_eq!(
                    StdPolicy::round(value, mode),
                    expected,
                    "{value} rounded with {mode:?}"
                );
            }
        }
    }

    #[test]
    fn rounding_non_finite() {
        for mode in RoundingMode::ALL {
            assert!(StdPolicy::round(f32::NAN, mode).is_nan());
            assert_eq!(StdPolicy::round(f32::INFINITY, mode), f32::INFINITY);
            assert_eq!(StdPolicy::round(f32::NEG_INFINITY, mode), f32::NEG_INFINITY);
        }
    }

    #[test]
    fn fast_inv_sqrt() {
        for x in [1e-30, 0.001, 0.25, 1.0, 2.0, 3.0, 100.0, 12345.678, 1e30] {
            assert_relative_eq!(
                FastPolicy::inv_sqrt(x),
                StdPolicy::inv_sqrt(x),
                max_relative = 1e-5
            );
            assert_relative_eq!(FastPolicy::sqrt(x), x.sqrt(), max_relative = 1e-5);
        }
    }

    #[test]
    fn fast_special_values() {
        assert_eq!(FastPolicy::sqrt(0.0), 0.0);
        assert_eq!(FastPolicy::inv_sqrt(0.0), f32::INFINITY);
        assert_eq!(FastPolicy::sqrt(f32::INFINITY), f32::INFINITY);
        assert_eq!(FastPolicy::inv_sqrt(f32::INFINITY), 0.0);
        assert!(FastPolicy::inv_sqrt(f32::NAN).is_nan());

        let subnormal = f32::MIN_POSITIVE / 4.0;
        assert_eq!(FastPolicy::sqrt(subnormal), subnormal.sqrt());
    }

    #[cfg(feature = "libm")]
    #[test]
    fn libm_matches_std() {
        for x in [0.0, 0.5, 1.0, 2.0, 1000.0] {
            assert_relative_eq!(LibmPolicy::sqrt(x), StdPolicy::sqrt(x));
            assert_relative_eq!(LibmPolicy::sin(x), StdPolicy::sin(x), epsilon = 1e-6);
            assert_relative_eq!(LibmPolicy::cos(x), StdPolicy::cos(x), epsilon = 1e-6);
        }
        for mode in RoundingMode::ALL {
            for x in [-2.5, -0.5, 0.5, 1.5, 2.5] {
                assert_eq!(LibmPolicy::round(x, mode), StdPolicy::round(x, mode));
            }
        }
    }
}
