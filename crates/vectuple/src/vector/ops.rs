//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::kernel::{Vec2Kernel, Vec3Kernel};

use super::{Vec2, Vec3};

// NB: both vector-vector (element-wise) and vector-scalar multiplication and division are
// supported. Division keeps IEEE-754 semantics; dividing by zero is never reported as an error.

macro_rules! vector_ops {
    ($ty:ident, $kernel:ty, $n:literal) => {
        impl Index<usize> for $ty {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.as_mut_array()[index]
            }
        }

        impl Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                <$kernel>::negate(self.to_array()).into()
            }
        }

        /// Element-wise addition.
        impl Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                <$kernel>::add(self.to_array(), rhs.to_array()).into()
            }
        }

        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        /// Element-wise subtraction.
        impl Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                <$kernel>::sub(self.to_array(), rhs.to_array()).into()
            }
        }

        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        /// Element-wise multiplication.
        impl Mul for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                <$kernel>::mul(self.to_array(), rhs.to_array()).into()
            }
        }

        /// Vector-Scalar multiplication (scaling).
        impl Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                <$kernel>::scale(self.to_array(), rhs).into()
            }
        }

        /// Scalar-Vector multiplication (scaling).
        impl Mul<$ty> for f32 {
            type Output = $ty;

            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        /// Element-wise division.
        impl Div for $ty {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                <$kernel>::div(self.to_array(), rhs.to_array()).into()
            }
        }

        /// Vector-Scalar division.
        impl Div<f32> for $ty {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                <$kernel>::div(self.to_array(), [rhs; $n]).into()
            }
        }

        impl DivAssign<f32> for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

vector_ops!(Vec2, Vec2Kernel, 2);
vector_ops!(Vec3, Vec3Kernel, 3);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(vec2(1.0, 2.0) + vec2(3.0, 4.0), vec2(4.0, 6.0));
        assert_eq!(vec3(1.0, 2.0, 3.0) - Vec3::ONE, vec3(0.0, 1.0, 2.0));
        assert_eq!(vec2(1.0, 2.0) * vec2(3.0, 4.0), vec2(3.0, 8.0));
        assert_eq!(vec2(1.0, 2.0) * 2.0, vec2(2.0, 4.0));
        assert_eq!(2.0 * vec3(1.0, 2.0, 3.0), vec3(2.0, 4.0, 6.0));
        assert_eq!(vec3(2.0, 4.0, 6.0) / 2.0, vec3(1.0, 2.0, 3.0));
        assert_eq!(vec2(2.0, 9.0) / vec2(2.0, 3.0), vec2(1.0, 3.0));
        assert_eq!(-vec2(1.0, -2.0), vec2(-1.0, 2.0));
    }

    #[test]
    fn assign() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += Vec3::ONE;
        assert_eq!(v, vec3(2.0, 3.0, 4.0));
        v -= Vec3::X;
        assert_eq!(v, vec3(1.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, vec3(2.0, 6.0, 8.0));
        v /= 4.0;
        assert_eq!(v, vec3(0.5, 1.5, 2.0));
    }

    #[test]
    fn div_by_zero_is_ieee() {
        let v = vec2(1.0, -1.0) / 0.0;
        assert_eq!(v, vec2(f32::INFINITY, f32::NEG_INFINITY));
        assert!((Vec2::ZERO / 0.0).x.is_nan());
    }

    #[test]
    fn index() {
        let mut v = vec2(5.0, 6.0);
        assert_eq!(v[0], 5.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = Vec3::ZERO;
        let _ = v[3];
    }
}
