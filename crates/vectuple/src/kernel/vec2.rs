use std::marker::PhantomData;

use crate::{
    error::{KernelError, Result},
    policy::{RoundingMode, ScalarPolicy, StdPolicy},
    tolerance::Tolerance,
};

use super::Extremum;

/// Two-component vector operations, parameterized over a [`ScalarPolicy`].
///
/// This type is never instantiated; it only namespaces the operations. Use [`Vec2Kernel`] for
/// the default policy.
///
/// # Examples
///
/// ```
/// # use vectuple::*;
/// assert_eq!(Vec2Kernel::add([1.0, 2.0], [3.0, 4.0]), [4.0, 6.0]);
/// assert_eq!(Vec2Kernel::length([3.0, 4.0], Tolerance::EXACT), 5.0);
///
/// let fast = Kernel2::<FastPolicy>::normalize([3.0, 4.0], Tolerance::EXACT);
/// assert!((fast[0] - 0.6).abs() < 1e-5);
/// ```
pub struct Kernel2<P>(PhantomData<P>);

/// [`Kernel2`] using the [`StdPolicy`].
pub type Vec2Kernel = Kernel2<StdPolicy>;

impl<P: ScalarPolicy> Kernel2<P> {
    /// Component-wise addition.
    #[inline]
    pub fn add([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> [f32; 2] {
        [ax + bx, ay + by]
    }

    /// Component-wise subtraction.
    #[inline]
    pub fn sub([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> [f32; 2] {
        [ax - bx, ay - by]
    }

    /// Component-wise multiplication.
    #[inline]
    pub fn mul([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> [f32; 2] {
        [ax * bx, ay * by]
    }

    /// Component-wise division.
    ///
    /// A zero divisor component is not an error: the corresponding result component follows
    /// IEEE-754 and becomes `±Inf` or `NaN`.
    #[inline]
    pub fn div([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> [f32; 2] {
        [ax / bx, ay / by]
    }

    /// Multiplies each component by `factor`.
    #[inline]
    pub fn scale([x, y]: [f32; 2], factor: f32) -> [f32; 2] {
        [x * factor, y * factor]
    }

    /// Component-wise negation.
    #[inline]
    pub fn negate([x, y]: [f32; 2]) -> [f32; 2] {
        [-x, -y]
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs([x, y]: [f32; 2]) -> [f32; 2] {
        [x.abs(), y.abs()]
    }

    /// Component-wise minimum, following [`f32::min`] for `NaN`s.
    #[inline]
    pub fn min([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> [f32; 2] {
        [ax.min(bx), ay.min(by)]
    }

    /// Component-wise maximum, following [`f32::max`] for `NaN`s.
    #[inline]
    pub fn max([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> [f32; 2] {
        [ax.max(bx), ay.max(by)]
    }

    /// `x + y`.
    #[inline]
    pub fn sum_components([x, y]: [f32; 2]) -> f32 {
        x + y
    }

    /// The dot product `ax * bx + ay * by`.
    #[inline]
    pub fn dot([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> f32 {
        ax * bx + ay * by
    }

    /// The [perpendicular dot product] `ax * by - ay * bx`.
    ///
    /// This is the Z component of the cross product of `a` and `b` extended with `z = 0`. It is
    /// positive when `b` lies counterclockwise of `a`.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    #[inline]
    pub fn perp_dot([ax, ay]: [f32; 2], [bx, by]: [f32; 2]) -> f32 {
        ax * by - ay * bx
    }

    /// Rotates `v` counterclockwise by a quarter turn: `(x, y)` becomes `(-y, x)`.
    #[inline]
    pub fn perpendicular([x, y]: [f32; 2]) -> [f32; 2] {
        [-y, x]
    }

    /// `x * x + y * y`. Never fails.
    #[inline]
    pub fn squared_length(v: [f32; 2]) -> f32 {
        Self::dot(v, v)
    }

    /// Length of `v`, or `0.0` if `v` is zero-equivalent under `tolerance`.
    ///
    /// The tolerance applies to the length itself (see [`Tolerance`]).
    #[inline]
    pub fn length(v: [f32; 2], tolerance: Tolerance) -> f32 {
        let (scale, squared) = super::rescaled_squared_length(v, Self::squared_length(v));
        if tolerance.admits_scaled(scale, squared) {
            0.0
        } else {
            scale * P::sqrt(squared)
        }
    }

    /// Returns whether the length of `v` is at most `tolerance`.
    #[inline]
    pub fn is_zero(v: [f32; 2], tolerance: Tolerance) -> bool {
        let (scale, squared) = super::rescaled_squared_length(v, Self::squared_length(v));
        tolerance.admits_scaled(scale, squared)
    }

    /// `1 / length(v)`.
    ///
    /// # Errors
    ///
    /// Fails with [`KernelError::DivideByZero`] if [`Kernel2::squared_length`] of `v` is exactly
    /// zero, which includes vectors so short that squaring them underflows.
    ///
    /// [`KernelError::DivideByZero`]: crate::KernelError::DivideByZero
    pub fn reciprocal_length(v: [f32; 2]) -> Result<f32> {
        super::checked_inv_length::<P, 2>(v, Self::squared_length(v), "reciprocal_length")
    }

    /// Component-wise reciprocal `(1 / x, 1 / y)`.
    ///
    /// Only a vector of exactly zero length is rejected. A single zero component produces an
    /// infinite result component, like [`Kernel2::div`].
    ///
    /// # Errors
    ///
    /// Fails with [`KernelError::DivideByZero`] if `v` has an exactly zero length.
    ///
    /// [`KernelError::DivideByZero`]: crate::KernelError::DivideByZero
    pub fn reciprocal(v: [f32; 2]) -> Result<[f32; 2]> {
        if Self::squared_length(v) == 0.0 {
            log::trace!("`reciprocal` called on zero vector {v:?}");
            return Err(KernelError::DivideByZero { op: "reciprocal" });
        }
        Ok(Self::div([1.0, 1.0], v))
    }

    /// Squared length of `a - b`. Never fails.
    #[inline]
    pub fn distance_squared(a: [f32; 2], b: [f32; 2]) -> f32 {
        Self::squared_length(Self::sub(a, b))
    }

    /// Distance between `a` and `b`, with the same tolerance handling as [`Kernel2::length`].
    #[inline]
    pub fn distance(a: [f32; 2], b: [f32; 2], tolerance: Tolerance) -> f32 {
        Self::length(Self::sub(a, b), tolerance)
    }

    /// `1 / distance(a, b)`.
    ///
    /// # Errors
    ///
    /// Fails with [`KernelError::DivideByZero`] if the squared distance is exactly zero.
    ///
    /// [`KernelError::DivideByZero`]: crate::KernelError::DivideByZero
    pub fn inverse_distance_to(a: [f32; 2], b: [f32; 2]) -> Result<f32> {
        let d = Self::sub(a, b);
        super::checked_inv_length::<P, 2>(d, Self::squared_length(d), "inverse_distance_to")
    }

    /// Scales `v` to unit length.
    ///
    /// If `v` is zero-equivalent under `tolerance`, the exact zero vector is returned instead.
    /// This never fails. Any other finite `v` yields a unit vector, even when its squared length
    /// overflows or underflows `f32`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectuple::*;
    /// assert_eq!(Vec2Kernel::normalize([0.0, -5.0], Tolerance::EXACT), [0.0, -1.0]);
    /// assert_eq!(Vec2Kernel::normalize([0.0, 1e30], Tolerance::EXACT), [0.0, 1.0]);
    /// assert_eq!(Vec2Kernel::normalize([0.0; 2], Tolerance::EXACT), [0.0; 2]);
    /// ```
    pub fn normalize(v: [f32; 2], tolerance: Tolerance) -> [f32; 2] {
        let (scale, squared) = super::rescaled_squared_length(v, Self::squared_length(v));
        if tolerance.admits_scaled(scale, squared) {
            return [0.0; 2];
        }
        Self::scale(v.map(|c| c / scale), P::inv_sqrt(squared))
    }

    /// Rotates `v` counterclockwise by `radians` (with the Y axis pointing up).
    ///
    /// Negative angles rotate clockwise.
    pub fn rotate([x, y]: [f32; 2], radians: f32) -> [f32; 2] {
        let (sin, cos) = P::sin_cos(radians);
        [x * cos - y * sin, x * sin + y * cos]
    }

    /// Projects `v` onto the direction `target`.
    ///
    /// `target` **must** be of unit length; it is not normalized here.
    #[inline]
    pub fn project(v: [f32; 2], target: [f32; 2]) -> [f32; 2] {
        Self::scale(target, Self::dot(v, target))
    }

    /// Reflects `v` off a surface with the given `normal`: `v - 2 * dot(v, n) * n`.
    ///
    /// `normal` **must** be of unit length; it is not normalized here.
    #[inline]
    pub fn reflect(v: [f32; 2], normal: [f32; 2]) -> [f32; 2] {
        Self::sub(v, Self::scale(normal, 2.0 * Self::dot(v, normal)))
    }

    /// The smallest component. Ties resolve to the lowest index.
    #[inline]
    pub fn min_component(v: [f32; 2]) -> Extremum {
        super::min_component(v)
    }

    /// The largest component. Ties resolve to the lowest index.
    #[inline]
    pub fn max_component(v: [f32; 2]) -> Extremum {
        super::max_component(v)
    }

    /// Rounds each component with [`ScalarPolicy::round`] in the given `mode`.
    #[inline]
    pub fn round([x, y]: [f32; 2], mode: RoundingMode) -> [f32; 2] {
        [P::round(x, mode), P::round(y, mode)]
    }

    /// Advances `v` by `delta * alpha`.
    ///
    /// This is a single explicit Euler step with a unit time step: `alpha` is an unbounded scale
    /// factor applied to `delta` alone (eg. a velocity times an elapsed time). It is **not** an
    /// interpolation parameter; see [`Kernel2::lerp`] for that.
    #[inline]
    pub fn integrate_linear([x, y]: [f32; 2], [dx, dy]: [f32; 2], alpha: f32) -> [f32; 2] {
        [x + dx * alpha, y + dy * alpha]
    }

    /// Linear interpolation between `a` (at `t = 0`) and `b` (at `t = 1`).
    #[inline]
    pub fn lerp([ax, ay]: [f32; 2], [bx, by]: [f32; 2], t: f32) -> [f32; 2] {
        [ax + (bx - ax) * t, ay + (by - ay) * t]
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::FastPolicy;

    type K = Vec2Kernel;

    #[test]
    fn arithmetic() {
        assert_eq!(K::add([1.0, 2.0], [3.0, 4.0]), [4.0, 6.0]);
        assert_eq!(K::sub([1.0, 2.0], [3.0, 5.0]), [-2.0, -3.0]);
        assert_eq!(K::mul([1.0, 2.0], [3.0, 4.0]), [3.0, 8.0]);
        assert_eq!(K::div([1.0, 2.0], [4.0, 4.0]), [0.25, 0.5]);
        assert_eq!(K::scale([1.0, -2.0], 3.0), [3.0, -6.0]);
        assert_eq!(K::negate([1.0, -2.0]), [-1.0, 2.0]);
        assert_eq!(K::abs([-1.0, 2.0]), [1.0, 2.0]);
        assert_eq!(K::sum_components([1.5, 2.0]), 3.5);
        assert_eq!(K::min([1.0, 5.0], [2.0, 3.0]), [1.0, 3.0]);
        assert_eq!(K::max([1.0, 5.0], [2.0, 3.0]), [2.0, 5.0]);
    }

    #[test]
    fn div_by_zero_component() {
        let [x, y] = K::div([1.0, 0.0], [0.0, 0.0]);
        assert_eq!(x, f32::INFINITY);
        assert!(y.is_nan());
    }

    #[test]
    fn products() {
        assert_eq!(K::dot([1.0, 3.0], [4.0, -2.0]), -2.0);
        assert_eq!(K::perp_dot([1.0, 0.0], [0.0, 1.0]), 1.0);
        assert_eq!(K::perp_dot([0.0, 1.0], [1.0, 0.0]), -1.0);
        assert_eq!(K::perpendicular([1.0, 0.0]), [-0.0, 1.0]);
        assert_eq!(K::dot([3.0, 7.0], K::perpendicular([3.0, 7.0])), 0.0);
    }

    #[test]
    fn length() {
        assert_eq!(K::squared_length([3.0, 4.0]), 25.0);
        assert_eq!(K::length([3.0, 4.0], Tolerance::EXACT), 5.0);
        assert_eq!(K::length([0.0, 0.0], Tolerance::EXACT), 0.0);

        let tol = Tolerance::new(5.0).unwrap();
        assert_eq!(K::length([3.0, 4.0], tol), 0.0);
        assert_eq!(K::length([3.0, 4.01], tol), K::length([3.0, 4.01], Tolerance::EXACT));

        assert!(K::is_zero([0.0, -0.0], Tolerance::EXACT));
        assert!(!K::is_zero([0.0, 1e-20], Tolerance::EXACT));
        assert!(K::is_zero([0.3, 0.4], Tolerance::new(0.51).unwrap()));
        assert!(!K::is_zero([0.3, 0.4], Tolerance::new(0.49).unwrap()));
    }

    #[test]
    fn distance() {
        assert_eq!(K::distance_squared([1.0, 1.0], [4.0, 5.0]), 25.0);
        assert_eq!(K::distance([1.0, 1.0], [4.0, 5.0], Tolerance::EXACT), 5.0);
        assert_eq!(K::inverse_distance_to([1.0, 1.0], [4.0, 5.0]), Ok(0.2));
        assert_eq!(
            K::inverse_distance_to([1.0, 1.0], [1.0, 1.0]),
            Err(KernelError::DivideByZero {
                op: "inverse_distance_to"
            })
        );
    }

    #[test]
    fn reciprocals() {
        assert_eq!(K::reciprocal_length([3.0, 4.0]), Ok(0.2));
        assert_eq!(
            K::reciprocal_length([0.0, 0.0]),
            Err(KernelError::DivideByZero {
                op: "reciprocal_length"
            })
        );
        assert_eq!(K::reciprocal([2.0, -4.0]), Ok([0.5, -0.25]));
        assert_eq!(K::reciprocal([2.0, 0.0]), Ok([0.5, f32::INFINITY]));
        assert_eq!(
            K::reciprocal([0.0, -0.0]),
            Err(KernelError::DivideByZero { op: "reciprocal" })
        );
    }

    #[test]
    fn normalize() {
        assert_eq!(K::normalize([0.0, 4.0], Tolerance::EXACT), [0.0, 1.0]);
        assert_relative_eq!(
            K::normalize([3.0, 4.0], Tolerance::EXACT)[..],
            [0.6, 0.8][..]
        );
        assert_eq!(K::normalize([0.0, 0.0], Tolerance::EXACT), [0.0, 0.0]);
        assert_eq!(
            K::normalize([0.01, 0.0], Tolerance::new(0.1).unwrap()),
            [0.0, 0.0]
        );

        let fast = Kernel2::<FastPolicy>::normalize([3.0, 4.0], Tolerance::EXACT);
        assert_relative_eq!(fast[..], [0.6, 0.8][..], max_relative = 1e-5);
    }

    #[test]
    fn rotate() {
        assert_abs_diff_eq!(K::rotate([1.0, 0.0], FRAC_PI_2)[..], [0.0, 1.0][..], epsilon = 1e-6);
        assert_abs_diff_eq!(K::rotate([0.0, 1.0], FRAC_PI_2)[..], [-1.0, 0.0][..], epsilon = 1e-6);
        assert_abs_diff_eq!(K::rotate([1.0, 0.0], -FRAC_PI_2)[..], [0.0, -1.0][..], epsilon = 1e-6);
        assert_abs_diff_eq!(K::rotate([1.0, 2.0], PI)[..], [-1.0, -2.0][..], epsilon = 1e-6);
        assert_abs_diff_eq!(K::rotate([1.0, 2.0], TAU)[..], [1.0, 2.0][..], epsilon = 1e-5);
    }

    #[test]
    fn project_reflect() {
        assert_eq!(K::project([3.0, 4.0], [1.0, 0.0]), [3.0, 0.0]);
        assert_eq!(K::project([3.0, 4.0], [0.0, 1.0]), [0.0, 4.0]);
        assert_eq!(K::reflect([1.0, -1.0], [0.0, 1.0]), [1.0, 1.0]);
        assert_eq!(K::reflect([1.0, -1.0], [1.0, 0.0]), [-1.0, -1.0]);

        // Non-unit targets are not corrected.
        assert_eq!(K::project([1.0, 0.0], [2.0, 0.0]), [4.0, 0.0]);
    }

    #[test]
    fn extremum() {
        assert_eq!(K::min_component([3.0, 3.0]), Extremum { index: 0, value: 3.0 });
        assert_eq!(K::max_component([3.0, 3.0]), Extremum { index: 0, value: 3.0 });
        assert_eq!(K::min_component([3.0, -1.0]), Extremum { index: 1, value: -1.0 });
        assert_eq!(K::max_component([3.0, -1.0]), Extremum { index: 0, value: 3.0 });
    }

    #[test]
    fn round() {
        assert_eq!(K::round([1.5, -1.5], RoundingMode::Ceil), [2.0, -1.0]);
        assert_eq!(K::round([1.5, -1.5], RoundingMode::Floor), [1.0, -2.0]);
        assert_eq!(K::round([1.5, -1.5], RoundingMode::RoundNearest), [2.0, -2.0]);
        assert_eq!(K::round([1.5, -1.5], RoundingMode::Truncate), [1.0, -1.0]);
    }

    #[test]
    fn integrate_vs_lerp() {
        assert_eq!(K::integrate_linear([1.0, 1.0], [2.0, 4.0], 0.5), [2.0, 3.0]);
        assert_eq!(K::integrate_linear([1.0, 1.0], [2.0, 4.0], 3.0), [7.0, 13.0]);
        assert_eq!(K::lerp([1.0, 1.0], [2.0, 4.0], 0.5), [1.5, 2.5]);
        assert_eq!(K::lerp([1.0, 1.0], [2.0, 4.0], 1.0), [2.0, 4.0]);
    }
}
