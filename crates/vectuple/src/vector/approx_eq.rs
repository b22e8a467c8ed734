//! Approximate equality via the [`approx`] traits.
//!
//! Compound vectors compare equal if all of their components do.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::{Vec2, Vec3};

macro_rules! approx_impls {
    ($ty:ident) => {
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.as_array()
                    .iter()
                    .zip(other.as_array())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.as_array()
                    .iter()
                    .zip(other.as_array())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $ty {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.as_array()
                    .iter()
                    .zip(other.as_array())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

approx_impls!(Vec2);
approx_impls!(Vec3);

#[cfg(test)]
mod tests {
    use approx::{assert_relative_eq, assert_relative_ne, assert_ulps_eq};

    use crate::{vec2, vec3};

    #[test]
    fn componentwise() {
        assert_relative_eq!(vec2(1.0, 2.0), vec2(1.0, 2.0 + f32::EPSILON));
        assert_relative_ne!(vec2(1.0, 2.0), vec2(1.0, 2.1));
        assert_relative_eq!(vec3(100.0, 0.0, 1.0), vec3(99.0, 0.0, 1.0), max_relative = 0.02);
        assert_ulps_eq!(vec3(1.0, 1.0, 1.0), vec3(1.0, 1.0 + f32::EPSILON, 1.0), max_ulps = 1);
    }

    #[test]
    fn nan_is_never_equal() {
        assert_relative_ne!(vec2(f32::NAN, 0.0), vec2(f32::NAN, 0.0));
    }
}
