//! Stateless vector kernels operating on raw component arrays.
//!
//! Every operation is an associated function of [`Kernel2`] or [`Kernel3`] that takes its
//! operands by value and returns its result by value, so the caller decides where the result is
//! stored. The [`ScalarPolicy`] used for square roots, trigonometry and rounding is selected with
//! the type parameter; [`Vec2Kernel`] and [`Vec3Kernel`] use [`StdPolicy`].
//!
//! # Preconditions
//!
//! Several operations expect *unit-length* arguments and do **not** normalize or check them:
//!
//! - the `target` of `project`,
//! - the `normal` of `reflect`,
//! - the `axis` of [`Kernel3::rotate_axis_angle`],
//! - the quaternion of [`Kernel3::transform_by_quaternion`].
//!
//! Passing a non-unit value is not detected and silently yields a scaled, wrong (but
//! deterministic) result.
//!
//! [`ScalarPolicy`]: crate::ScalarPolicy
//! [`StdPolicy`]: crate::StdPolicy

mod vec2;
mod vec3;

pub use vec2::{Kernel2, Vec2Kernel};
pub use vec3::{Kernel3, Vec3Kernel};

use crate::error::{KernelError, Result};
use crate::policy::ScalarPolicy;

/// The position and value of the smallest or largest component of a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Index of the selected component (`0` for `x`, `1` for `y`, `2` for `z`).
    pub index: usize,
    /// Value of the selected component.
    pub value: f32,
}

/// Picks the component for which `better(candidate, best)` holds, scanning from index 0.
///
/// Ties keep the earlier component, so the lowest index wins. `NaN` never compares better, which
/// means a `NaN` in component 0 is returned as-is and a `NaN` anywhere else is skipped.
fn select_component<const N: usize>(v: [f32; N], better: fn(f32, f32) -> bool) -> Extremum {
    let mut best = Extremum {
        index: 0,
        value: v[0],
    };
    for (index, &value) in v.iter().enumerate().skip(1) {
        if better(value, best.value) {
            best = Extremum { index, value };
        }
    }
    best
}

pub(crate) fn min_component<const N: usize>(v: [f32; N]) -> Extremum {
    select_component(v, |candidate, best| candidate < best)
}

pub(crate) fn max_component<const N: usize>(v: [f32; N]) -> Extremum {
    select_component(v, |candidate, best| candidate > best)
}

/// Returns `(scale, squared)` such that the length of `v` is `scale * sqrt(squared)`.
///
/// `squared_length` is the plain sum of squares of `v`. If it is a normal float it is returned
/// with a scale of `1.0`. Otherwise squaring overflowed or lost precision in the subnormal range,
/// and `v` is first divided by its largest component magnitude, which puts `squared` in `[1, N]`.
/// Zero, infinite and `NaN` vectors are passed through unscaled.
pub(crate) fn rescaled_squared_length<const N: usize>(
    v: [f32; N],
    squared_length: f32,
) -> (f32, f32) {
    if squared_length.is_normal() {
        return (1.0, squared_length);
    }
    let largest = v.iter().fold(0.0f32, |acc, c| acc.max(c.abs()));
    if largest == 0.0 || !largest.is_finite() {
        return (1.0, squared_length);
    }
    let squared = v.iter().map(|c| (c / largest) * (c / largest)).sum();
    (largest, squared)
}

/// `1 / length(v)`, failing if `squared_length` (the unscaled sum of squares) is exactly zero.
pub(crate) fn checked_inv_length<P: ScalarPolicy, const N: usize>(
    v: [f32; N],
    squared_length: f32,
    op: &'static str,
) -> Result<f32> {
    if squared_length == 0.0 {
        log::trace!("`{op}` called on a zero-length operand");
        return Err(KernelError::DivideByZero { op });
    }
    let (scale, squared) = rescaled_squared_length(v, squared_length);
    Ok(P::inv_sqrt(squared) / scale)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::StdPolicy;

    #[test]
    fn extremum_ties() {
        assert_eq!(min_component([3.0, 3.0]), Extremum { index: 0, value: 3.0 });
        assert_eq!(max_component([3.0, 3.0]), Extremum { index: 0, value: 3.0 });
        assert_eq!(min_component([2.0, 1.0, 1.0]), Extremum { index: 1, value: 1.0 });
        assert_eq!(max_component([1.0, 5.0, 5.0]), Extremum { index: 1, value: 5.0 });
        assert_eq!(max_component([-0.0, 0.0]).index, 0);
    }

    #[test]
    fn extremum_nan() {
        let first = min_component([f32::NAN, 1.0, -1.0]);
        assert_eq!(first.index, 0);
        assert!(first.value.is_nan());

        assert_eq!(min_component([2.0, f32::NAN, -1.0]), Extremum { index: 2, value: -1.0 });
        assert_eq!(max_component([2.0, f32::NAN, -1.0]), Extremum { index: 0, value: 2.0 });
    }

    #[test]
    fn inv_length_zero() {
        assert_eq!(
            checked_inv_length::<StdPolicy, 2>([0.0, 0.0], 0.0, "op"),
            Err(KernelError::DivideByZero { op: "op" })
        );
        assert_eq!(checked_inv_length::<StdPolicy, 2>([0.0, 2.0], 4.0, "op"), Ok(0.5));
        // Only an exactly zero squared length is rejected, even if it underflowed.
        assert!(checked_inv_length::<StdPolicy, 2>([1e-30, 0.0], 0.0, "op").is_err());
        let big = 2f32.powi(64);
        let inv = checked_inv_length::<StdPolicy, 2>([3.0 * big, 4.0 * big], f32::INFINITY, "op");
        assert_relative_eq!(inv.unwrap(), 0.2 / big, max_relative = 1e-6);
    }

    #[test]
    fn rescaling() {
        assert_eq!(rescaled_squared_length([3.0, 4.0], 25.0), (1.0, 25.0));
        assert_eq!(rescaled_squared_length([0.0, 0.0], 0.0), (1.0, 0.0));

        // Squares overflow to infinity.
        let big = 2f32.powi(64);
        let rescaled = rescaled_squared_length([3.0 * big, 4.0 * big], f32::INFINITY);
        assert_eq!(rescaled, (4.0 * big, 1.5625));

        // Squares are subnormal.
        let small = 2f32.powi(-76);
        let squared = 16.0 * small * small + 9.0 * small * small;
        assert!(squared > 0.0 && !squared.is_normal());
        let rescaled = rescaled_squared_length([4.0 * small, -3.0 * small], squared);
        assert_eq!(rescaled, (4.0 * small, 1.5625));

        let (scale, squared) = rescaled_squared_length([f32::INFINITY, 1.0], f32::INFINITY);
        assert_eq!((scale, squared), (1.0, f32::INFINITY));
    }
}
