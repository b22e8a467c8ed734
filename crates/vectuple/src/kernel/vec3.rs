use std::marker::PhantomData;

use crate::{
    error::{KernelError, Result},
    policy::{RoundingMode, ScalarPolicy, StdPolicy},
    tolerance::Tolerance,
};

use super::Extremum;

/// Three-component vector operations, parameterized over a [`ScalarPolicy`].
///
/// Provides the same operations as [`Kernel2`][super::Kernel2], plus the cross product and
/// rotations around arbitrary axes. Use [`Vec3Kernel`] for the default policy.
///
/// # Examples
///
/// ```
/// # use vectuple::*;
/// let z = Vec3Kernel::cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
/// assert_eq!(z, [0.0, 0.0, 1.0]);
/// ```
pub struct Kernel3<P>(PhantomData<P>);

/// [`Kernel3`] using the [`StdPolicy`].
pub type Vec3Kernel = Kernel3<StdPolicy>;

impl<P: ScalarPolicy> Kernel3<P> {
    /// Component-wise addition.
    #[inline]
    pub fn add([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> [f32; 3] {
        [ax + bx, ay + by, az + bz]
    }

    /// Component-wise subtraction.
    #[inline]
    pub fn sub([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> [f32; 3] {
        [ax - bx, ay - by, az - bz]
    }

    /// Component-wise multiplication.
    #[inline]
    pub fn mul([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> [f32; 3] {
        [ax * bx, ay * by, az * bz]
    }

    /// Component-wise division, with IEEE-754 semantics for zero divisors.
    #[inline]
    pub fn div([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> [f32; 3] {
        [ax / bx, ay / by, az / bz]
    }

    /// Multiplies each component by `factor`.
    #[inline]
    pub fn scale([x, y, z]: [f32; 3], factor: f32) -> [f32; 3] {
        [x * factor, y * factor, z * factor]
    }

    /// Component-wise negation.
    #[inline]
    pub fn negate([x, y, z]: [f32; 3]) -> [f32; 3] {
        [-x, -y, -z]
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs([x, y, z]: [f32; 3]) -> [f32; 3] {
        [x.abs(), y.abs(), z.abs()]
    }

    /// Component-wise minimum, following [`f32::min`] for `NaN`s.
    #[inline]
    pub fn min([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> [f32; 3] {
        [ax.min(bx), ay.min(by), az.min(bz)]
    }

    /// Component-wise maximum, following [`f32::max`] for `NaN`s.
    #[inline]
    pub fn max([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> [f32; 3] {
        [ax.max(bx), ay.max(by), az.max(bz)]
    }

    /// `x + y + z`.
    #[inline]
    pub fn sum_components([x, y, z]: [f32; 3]) -> f32 {
        x + y + z
    }

    /// The dot product `ax * bx + ay * by + az * bz`.
    #[inline]
    pub fn dot([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> f32 {
        ax * bx + ay * by + az * bz
    }

    /// Computes the cross product of `a` and `b`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule. Swapping the
    /// arguments negates it.
    #[inline]
    pub fn cross([ax, ay, az]: [f32; 3], [bx, by, bz]: [f32; 3]) -> [f32; 3] {
        #[rustfmt::skip]
        let cross = [
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ];
        cross
    }

    /// The scalar triple product `dot(a, cross(b, c))`, ie. the signed volume of the
    /// parallelepiped spanned by the three vectors.
    #[inline]
    pub fn triple_product(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> f32 {
        Self::dot(a, Self::cross(b, c))
    }

    /// `x * x + y * y + z * z`. Never fails.
    #[inline]
    pub fn squared_length(v: [f32; 3]) -> f32 {
        Self::dot(v, v)
    }

    /// Length of `v`, or `0.0` if `v` is zero-equivalent under `tolerance`.
    #[inline]
    pub fn length(v: [f32; 3], tolerance: Tolerance) -> f32 {
        let (scale, squared) = super::rescaled_squared_length(v, Self::squared_length(v));
        if tolerance.admits_scaled(scale, squared) {
            0.0
        } else {
            scale * P::sqrt(squared)
        }
    }

    /// Returns whether the length of `v` is at most `tolerance`.
    #[inline]
    pub fn is_zero(v: [f32; 3], tolerance: Tolerance) -> bool {
        let (scale, squared) = super::rescaled_squared_length(v, Self::squared_length(v));
        tolerance.admits_scaled(scale, squared)
    }

    /// `1 / length(v)`, failing with [`KernelError::DivideByZero`] if the squared length of `v`
    /// is exactly zero.
    pub fn reciprocal_length(v: [f32; 3]) -> Result<f32> {
        super::checked_inv_length::<P, 3>(v, Self::squared_length(v), "reciprocal_length")
    }

    /// Component-wise reciprocal, failing with [`KernelError::DivideByZero`] for a zero-length
    /// `v`. Individual zero components yield infinities.
    pub fn reciprocal(v: [f32; 3]) -> Result<[f32; 3]> {
        if Self::squared_length(v) == 0.0 {
            log::trace!("`reciprocal` called on zero vector {v:?}");
            return Err(KernelError::DivideByZero { op: "reciprocal" });
        }
        Ok(Self::div([1.0; 3], v))
    }

    /// Squared length of `a - b`. Never fails.
    #[inline]
    pub fn distance_squared(a: [f32; 3], b: [f32; 3]) -> f32 {
        Self::squared_length(Self::sub(a, b))
    }

    /// Distance between `a` and `b`, with the same tolerance handling as [`Kernel3::length`].
    #[inline]
    pub fn distance(a: [f32; 3], b: [f32; 3], tolerance: Tolerance) -> f32 {
        Self::length(Self::sub(a, b), tolerance)
    }

    /// `1 / distance(a, b)`, failing with [`KernelError::DivideByZero`] if the squared distance
    /// is exactly zero.
    pub fn inverse_distance_to(a: [f32; 3], b: [f32; 3]) -> Result<f32> {
        let d = Self::sub(a, b);
        super::checked_inv_length::<P, 3>(d, Self::squared_length(d), "inverse_distance_to")
    }

    /// Scales `v` to unit length, or returns the zero vector if `v` is zero-equivalent under
    /// `tolerance`.
    ///
    /// Vectors whose squared length is not representable as a normal `f32` are rescaled by their
    /// largest component first, so every finite, non-zero-equivalent `v` yields a unit vector.
    pub fn normalize(v: [f32; 3], tolerance: Tolerance) -> [f32; 3] {
        let (scale, squared) = super::rescaled_squared_length(v, Self::squared_length(v));
        if tolerance.admits_scaled(scale, squared) {
            return [0.0; 3];
        }
        Self::scale(v.map(|c| c / scale), P::inv_sqrt(squared))
    }

    /// Rotates `v` by `radians` around `axis`, using [Rodrigues' rotation formula]:
    ///
    /// `v * cos(a) + (axis × v) * sin(a) + axis * (axis · v) * (1 - cos(a))`
    ///
    /// Positive angles rotate counterclockwise when looking down the axis towards the origin.
    /// `axis` **must** be of unit length; it is not normalized here.
    ///
    /// [Rodrigues' rotation formula]: https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
    pub fn rotate_axis_angle(v: [f32; 3], axis: [f32; 3], radians: f32) -> [f32; 3] {
        let (sin, cos) = P::sin_cos(radians);
        let axis_cross_v = Self::cross(axis, v);
        let parallel = Self::dot(axis, v) * (1.0 - cos);

        let [x, y, z] = v;
        let [kx, ky, kz] = axis;
        let [cx, cy, cz] = axis_cross_v;
        [
            x * cos + cx * sin + kx * parallel,
            y * cos + cy * sin + ky * parallel,
            z * cos + cz * sin + kz * parallel,
        ]
    }

    /// Rotates `v` by the quaternion `[w, x, y, z]` (real part first), computing `q v q⁻¹`.
    ///
    /// Uses the expanded form `v + w t + q⃗ × t` with `t = 2 (q⃗ × v)`, which equals the
    /// sandwich product only for unit quaternions. `quat` **must** be of unit length; a non-unit
    /// quaternion additionally scales and skews the result.
    pub fn transform_by_quaternion(v: [f32; 3], [w, qx, qy, qz]: [f32; 4]) -> [f32; 3] {
        let imag = [qx, qy, qz];
        let t = Self::scale(Self::cross(imag, v), 2.0);
        Self::add(Self::add(v, Self::scale(t, w)), Self::cross(imag, t))
    }

    /// Rotates `v` around the Z axis by `radians` (counterclockwise in the XY plane).
    pub fn rotate_z([x, y, z]: [f32; 3], radians: f32) -> [f32; 3] {
        let (sin, cos) = P::sin_cos(radians);
        [x * cos - y * sin, x * sin + y * cos, z]
    }

    /// Projects `v` onto `target`, which **must** be of unit length.
    #[inline]
    pub fn project(v: [f32; 3], target: [f32; 3]) -> [f32; 3] {
        Self::scale(target, Self::dot(v, target))
    }

    /// Reflects `v` off a surface with the given unit-length `normal`.
    #[inline]
    pub fn reflect(v: [f32; 3], normal: [f32; 3]) -> [f32; 3] {
        Self::sub(v, Self::scale(normal, 2.0 * Self::dot(v, normal)))
    }

    /// The smallest component. Ties resolve to the lowest index.
    #[inline]
    pub fn min_component(v: [f32; 3]) -> Extremum {
        super::min_component(v)
    }

    /// The largest component. Ties resolve to the lowest index.
    #[inline]
    pub fn max_component(v: [f32; 3]) -> Extremum {
        super::max_component(v)
    }

    /// Rounds each component with [`ScalarPolicy::round`] in the given `mode`.
    #[inline]
    pub fn round([x, y, z]: [f32; 3], mode: RoundingMode) -> [f32; 3] {
        [P::round(x, mode), P::round(y, mode), P::round(z, mode)]
    }

    /// Advances `v` by `delta * alpha`, with `alpha` an unbounded scale factor on `delta` (not an
    /// interpolation parameter).
    ///
    /// See [`Kernel2::integrate_linear`][super::Kernel2::integrate_linear].
    #[inline]
    pub fn integrate_linear(
        [x, y, z]: [f32; 3],
        [dx, dy, dz]: [f32; 3],
        alpha: f32,
    ) -> [f32; 3] {
        [x + dx * alpha, y + dy * alpha, z + dz * alpha]
    }

    /// Linear interpolation `a + (b - a) * t`.
    #[inline]
    pub fn lerp(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
        Self::integrate_linear(a, Self::sub(b, a), t)
    }
}
