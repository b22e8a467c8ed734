use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::{
    error::{KernelError, Result},
    kernel::{Extremum, Vec2Kernel, Vec3Kernel},
    policy::RoundingMode,
    tolerance::Tolerance,
};

mod approx_eq;
mod ops;

/// A 2-dimensional vector with [`f32`] components.
///
/// All methods delegate to [`Vec2Kernel`]. To use a different [`ScalarPolicy`], call the kernel
/// of that policy on [`Vec2::to_array`] directly.
///
/// # Construction
///
/// - [`Vec2::new`] and the freestanding [`vec2`] function create a vector from its components.
/// - [`Vec2::splat`] copies one value into both components.
/// - [`Vec2::ZERO`], [`Vec2::ONE`], [`Vec2::X`] and [`Vec2::Y`] are provided as constants.
/// - [`From`] impls convert from `[f32; 2]` and `(f32, f32)`, and [`Vec2::try_from_slice`]
///   converts from a slice of the right length.
///
/// [`ScalarPolicy`]: crate::ScalarPolicy
#[derive(Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-dimensional vector with [`f32`] components.
///
/// All methods delegate to [`Vec3Kernel`]. See [`Vec2`] for the available constructors.
#[derive(Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Constructs a [`Vec2`] from its two components.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3 { x, y, z }
}

impl Vec2 {
    /// A vector with both components set to 0.
    pub const ZERO: Self = vec2(0.0, 0.0);
    /// A vector with both components set to 1.
    pub const ONE: Self = vec2(1.0, 1.0);
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec2(1.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec2(0.0, 1.0);

    /// Creates a vector from its components. Equivalent to [`vec2`].
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        vec2(x, y)
    }

    /// Creates a vector with both components set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectuple::*;
    /// assert_eq!(Vec2::splat(1.0), Vec2::ONE);
    /// ```
    #[inline]
    pub const fn splat(value: f32) -> Self {
        vec2(value, value)
    }

    /// Creates a vector from an `[x, y]` array.
    #[inline]
    pub const fn from_array([x, y]: [f32; 2]) -> Self {
        vec2(x, y)
    }

    /// Returns the components as an `[x, y]` array, the form the kernels operate on.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Appends a Z component, yielding a [`Vec3`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectuple::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        vec3(self.x, self.y, z)
    }

    /// Rotates `self` counterclockwise by `radians` (with the Y axis pointing up).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectuple::*;
    /// use std::f32::consts::TAU;
    /// use approx::assert_abs_diff_eq;
    ///
    /// assert_abs_diff_eq!(Vec2::X.rotate(TAU / 4.0), Vec2::Y, epsilon = 1e-6);
    /// assert_abs_diff_eq!(Vec2::Y.rotate(-TAU / 4.0), Vec2::X, epsilon = 1e-6);
    /// ```
    #[inline]
    pub fn rotate(self, radians: f32) -> Self {
        Vec2Kernel::rotate(self.to_array(), radians).into()
    }

    /// See [`Kernel2::perp_dot`][crate::Kernel2::perp_dot].
    #[inline]
    pub fn perp_dot(self, other: Self) -> f32 {
        Vec2Kernel::perp_dot(self.to_array(), other.to_array())
    }

    /// Returns `self` rotated counterclockwise by a quarter turn.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Vec2Kernel::perpendicular(self.to_array()).into()
    }
}

impl Vec3 {
    /// A vector with all components set to 0.
    pub const ZERO: Self = vec3(0.0, 0.0, 0.0);
    /// A vector with all components set to 1.
    pub const ONE: Self = vec3(1.0, 1.0, 1.0);
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    /// Creates a vector from its components. Equivalent to [`vec3`].
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        vec3(x, y, z)
    }

    /// Creates a vector with all components set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        vec3(value, value, value)
    }

    /// Creates a vector from an `[x, y, z]` array.
    #[inline]
    pub const fn from_array([x, y, z]: [f32; 3]) -> Self {
        vec3(x, y, z)
    }

    /// Returns the components as an `[x, y, z]` array, the form the kernels operate on.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Removes the Z component, yielding a [`Vec2`].
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectuple::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Vec3Kernel::cross(self.to_array(), other.to_array()).into()
    }

    /// Computes `self · (b × c)`, the signed volume of the parallelepiped spanned by the three
    /// vectors.
    #[inline]
    pub fn triple_product(self, b: Self, c: Self) -> f32 {
        Vec3Kernel::triple_product(self.to_array(), b.to_array(), c.to_array())
    }

    /// Rotates `self` by `radians` around the unit-length `axis`.
    ///
    /// See [`Kernel3::rotate_axis_angle`][crate::Kernel3::rotate_axis_angle] for details.
    #[inline]
    pub fn rotate_axis_angle(self, axis: Self, radians: f32) -> Self {
        Vec3Kernel::rotate_axis_angle(self.to_array(), axis.to_array(), radians).into()
    }

    /// Rotates `self` by the unit quaternion `[w, x, y, z]`.
    #[inline]
    pub fn transform_by_quaternion(self, quat: [f32; 4]) -> Self {
        Vec3Kernel::transform_by_quaternion(self.to_array(), quat).into()
    }

    /// Rotates `self` counterclockwise around the Z axis, leaving `z` unchanged.
    #[inline]
    pub fn rotate_z(self, radians: f32) -> Self {
        Vec3Kernel::rotate_z(self.to_array(), radians).into()
    }
}

/// Methods shared by [`Vec2`] and [`Vec3`], forwarding to their kernel.
macro_rules! kernel_methods {
    ($ty:ident, $kernel:ty, $n:literal) => {
        impl $ty {
            /// Returns a reference to the components as an array.
            #[inline]
            pub fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            /// Returns a mutable reference to the components as an array.
            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            /// Creates a vector from a slice holding exactly as many elements as the vector has
            /// components.
            ///
            /// # Errors
            ///
            /// Returns [`KernelError::InvalidArgument`] if the slice length is wrong.
            pub fn try_from_slice(slice: &[f32]) -> Result<Self> {
                <[f32; $n]>::try_from(slice)
                    .map(Self::from_array)
                    .map_err(|_| KernelError::InvalidArgument {
                        name: "slice",
                        reason: concat!("expected exactly ", $n, " elements"),
                    })
            }

            /// Applies `f` to each component.
            #[inline]
            pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
                Self::from_array(self.to_array().map(f))
            }

            /// Computes the dot product of `self` and `other`.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                <$kernel>::dot(self.to_array(), other.to_array())
            }

            /// Returns the sum of all components.
            #[inline]
            pub fn sum_components(self) -> f32 {
                <$kernel>::sum_components(self.to_array())
            }

            /// Returns the squared length of `self`. This never fails, but may overflow to
            /// infinity for very large components.
            #[inline]
            pub fn squared_length(self) -> f32 {
                <$kernel>::squared_length(self.to_array())
            }

            /// Returns the exact length of `self`.
            #[inline]
            pub fn length(self) -> f32 {
                self.length_within(Tolerance::EXACT)
            }

            /// Returns the length of `self`, or `0.0` if it does not exceed `tolerance`.
            #[inline]
            pub fn length_within(self, tolerance: Tolerance) -> f32 {
                <$kernel>::length(self.to_array(), tolerance)
            }

            /// Returns whether the squared length of `self` is exactly zero.
            #[inline]
            pub fn is_zero(self) -> bool {
                self.is_zero_within(Tolerance::EXACT)
            }

            /// Returns whether the length of `self` is at most `tolerance`.
            #[inline]
            pub fn is_zero_within(self, tolerance: Tolerance) -> bool {
                <$kernel>::is_zero(self.to_array(), tolerance)
            }

            /// Returns `1 / self.length()`.
            ///
            /// # Errors
            ///
            /// Returns [`KernelError::DivideByZero`] if `self` is exactly zero.
            #[inline]
            pub fn reciprocal_length(self) -> Result<f32> {
                <$kernel>::reciprocal_length(self.to_array())
            }

            /// Returns the component-wise reciprocal of `self`.
            ///
            /// # Errors
            ///
            /// Returns [`KernelError::DivideByZero`] if `self` is exactly zero.
            #[inline]
            pub fn reciprocal(self) -> Result<Self> {
                <$kernel>::reciprocal(self.to_array()).map(Self::from_array)
            }

            /// Returns the squared distance between `self` and `other`.
            #[inline]
            pub fn distance_squared(self, other: Self) -> f32 {
                <$kernel>::distance_squared(self.to_array(), other.to_array())
            }

            /// Returns the exact distance between `self` and `other`.
            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                self.distance_within(other, Tolerance::EXACT)
            }

            /// Returns the distance between `self` and `other`, or `0.0` if it does not exceed
            /// `tolerance`.
            #[inline]
            pub fn distance_within(self, other: Self, tolerance: Tolerance) -> f32 {
                <$kernel>::distance(self.to_array(), other.to_array(), tolerance)
            }

            /// Returns `1 / self.distance(other)`.
            ///
            /// # Errors
            ///
            /// Returns [`KernelError::DivideByZero`] if `self == other`.
            #[inline]
            pub fn inverse_distance_to(self, other: Self) -> Result<f32> {
                <$kernel>::inverse_distance_to(self.to_array(), other.to_array())
            }

            /// Scales `self` to unit length. The zero vector normalizes to itself.
            #[inline]
            pub fn normalize(self) -> Self {
                self.normalize_within(Tolerance::EXACT)
            }

            /// Scales `self` to unit length, or returns the zero vector if the length of `self`
            /// does not exceed `tolerance`.
            #[inline]
            pub fn normalize_within(self, tolerance: Tolerance) -> Self {
                <$kernel>::normalize(self.to_array(), tolerance).into()
            }

            /// Projects `self` onto the unit-length vector `target`.
            #[inline]
            pub fn project_onto(self, target: Self) -> Self {
                <$kernel>::project(self.to_array(), target.to_array()).into()
            }

            /// Reflects `self` off a surface with the unit-length `normal`.
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                <$kernel>::reflect(self.to_array(), normal.to_array()).into()
            }

            /// Returns the smallest component and its index. Ties resolve to the lowest index.
            #[inline]
            pub fn min_component(self) -> Extremum {
                <$kernel>::min_component(self.to_array())
            }

            /// Returns the largest component and its index. Ties resolve to the lowest index.
            #[inline]
            pub fn max_component(self) -> Extremum {
                <$kernel>::max_component(self.to_array())
            }

            /// Rounds each component in the given `mode`.
            #[inline]
            pub fn round(self, mode: RoundingMode) -> Self {
                <$kernel>::round(self.to_array(), mode).into()
            }

            /// Returns the component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                <$kernel>::abs(self.to_array()).into()
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                <$kernel>::min(self.to_array(), other.to_array()).into()
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                <$kernel>::max(self.to_array(), other.to_array()).into()
            }

            /// Returns `self + delta * alpha`; `alpha` scales `delta` only.
            #[inline]
            pub fn integrate_linear(self, delta: Self, alpha: f32) -> Self {
                <$kernel>::integrate_linear(self.to_array(), delta.to_array(), alpha).into()
            }

            /// Linear interpolation from `self` (`t = 0`) to `other` (`t = 1`).
            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                <$kernel>::lerp(self.to_array(), other.to_array(), t).into()
            }
        }

        impl From<[f32; $n]> for $ty {
            #[inline]
            fn from(value: [f32; $n]) -> Self {
                Self::from_array(value)
            }
        }

        impl From<$ty> for [f32; $n] {
            #[inline]
            fn from(value: $ty) -> Self {
                value.to_array()
            }
        }

        impl TryFrom<&[f32]> for $ty {
            type Error = KernelError;

            fn try_from(slice: &[f32]) -> Result<Self> {
                Self::try_from_slice(slice)
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut tup = f.debug_tuple("");
                for elem in self.as_array() {
                    tup.field(elem);
                }
                tup.finish()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                for (i, elem) in self.as_array().iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(elem, f)?;
                }
                f.write_str(")")
            }
        }
    };
}

kernel_methods!(Vec2, Vec2Kernel, 2);
kernel_methods!(Vec3, Vec3Kernel, 3);

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        vec2(x, y)
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        vec3(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn access() {
        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        v.as_mut_array()[1] = 777.0;
        assert_eq!(v.y, 777.0);
        assert_eq!(v[1], 777.0);
        v[2] = 9.0;
        assert_eq!(v, vec3(1.0, 777.0, 9.0));

        assert_eq!(Vec2::X.extend(3.0).truncate(), Vec2::X);
        assert_eq!(Vec2::from((1.0, 2.0)), vec2(1.0, 2.0));
        assert_eq!(<[f32; 2]>::from(vec2(1.0, 2.0)), [1.0, 2.0]);
    }

    #[test]
    fn from_slice() {
        assert_eq!(Vec2::try_from_slice(&[1.0, 2.0]), Ok(vec2(1.0, 2.0)));
        assert_eq!(Vec3::try_from(&[1.0, 2.0, 3.0][..]), Ok(vec3(1.0, 2.0, 3.0)));
        assert_eq!(
            Vec3::try_from_slice(&[1.0, 2.0]),
            Err(KernelError::InvalidArgument {
                name: "slice",
                reason: "expected exactly 3 elements",
            })
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec3::Z), "(0, 0, 1)");
        assert_eq!(format!("{:?}", Vec3::Z), "(0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec2(0.5, -2.0)), "(0.5, -2)");
    }

    #[test]
    fn zero_handling() {
        assert!(Vec2::ZERO.is_zero());
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        assert_eq!(Vec3::ZERO.length(), 0.0);
        assert!(Vec3::ZERO.reciprocal_length().is_err());
        assert!(Vec3::ZERO.reciprocal().is_err());
        assert!(Vec2::X.inverse_distance_to(Vec2::X).is_err());

        let tol = Tolerance::new(0.1).unwrap();
        let small = vec3(0.05, 0.0, 0.05);
        assert!(!small.is_zero());
        assert!(small.is_zero_within(tol));
        assert_eq!(small.normalize_within(tol), Vec3::ZERO);
        assert_eq!(small.length_within(tol), 0.0);
        assert_eq!(small.distance_within(Vec3::ZERO, tol), 0.0);
    }

    #[test]
    fn geometry() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0, 4.0).reciprocal_length(), Ok(0.2));
        assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
        assert_eq!(vec3(1.0, 2.0, 3.0).project_onto(Vec3::Y), vec3(0.0, 2.0, 0.0));
        assert_eq!(vec2(1.0, -1.0).reflect(Vec2::Y), vec2(1.0, 1.0));
        assert_eq!(Vec2::X.perp_dot(Vec2::Y), 1.0);
        assert_eq!(Vec2::X.perpendicular(), Vec2::Y);
        assert_eq!(Vec3::X.triple_product(Vec3::Y, Vec3::Z), 1.0);
        assert_abs_diff_eq!(Vec3::X.rotate_axis_angle(Vec3::Z, TAU / 4.0), Vec3::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2::Y.rotate(TAU / 2.0), -Vec2::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(
            vec3(1.0, 0.0, 2.0).rotate_z(TAU / 4.0),
            vec3(0.0, 1.0, 2.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Vec3::X.transform_by_quaternion([0.0, 0.0, 0.0, 1.0]),
            -Vec3::X,
            epsilon = 1e-6
        );
    }

    #[test]
    fn components() {
        let v = vec3(3.0, -1.0, 3.0);
        assert_eq!(v.min_component(), Extremum { index: 1, value: -1.0 });
        assert_eq!(v.max_component(), Extremum { index: 0, value: 3.0 });
        assert_eq!(v.sum_components(), 5.0);
        assert_eq!(v.abs(), vec3(3.0, 1.0, 3.0));
        assert_eq!(v.map(|c| c * 2.0), vec3(6.0, -2.0, 6.0));
        assert_eq!(vec2(0.4, -1.6).round(RoundingMode::RoundNearest), vec2(0.0, -2.0));
        assert_eq!(v.min(Vec3::ZERO), vec3(0.0, -1.0, 0.0));
        assert_eq!(v.max(Vec3::ZERO), vec3(3.0, 0.0, 3.0));
    }

    #[test]
    fn integrate() {
        let pos = vec2(1.0, 1.0);
        let vel = vec2(2.0, -2.0);
        assert_eq!(pos.integrate_linear(vel, 0.5), vec2(2.0, 0.0));
        assert_eq!(pos.lerp(vel, 0.5), vec2(1.5, -0.5));
    }
}
