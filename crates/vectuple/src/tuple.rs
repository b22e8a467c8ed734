//! Adapters between the kernels and caller-owned component storage.
//!
//! The kernels only ever see plain `[f32; N]` arrays. The traits in this module let any type
//! holding `N` ordered float components take part:
//!
//! - [`Components`] reads the components out of a value.
//! - [`WriteComponents`] writes a kernel result into an existing value (an *extraction
//!   parameter*), without allocating.
//! - [`FromComponents`] constructs a new value of a type chosen at compile time.
//!
//! # Examples
//!
//! ```
//! # use vectuple::*;
//! use vectuple::tuple::{self, Components};
//!
//! // Compute with tuples, store into a `Vec2`.
//! let a: (f32, f32) = (1.0, 2.0);
//! let b = [3.0f32, 4.0];
//! let mut out = Vec2::ZERO;
//! tuple::write_into(&mut out, Vec2Kernel::add(a.components(), b.components()));
//! assert_eq!(out, vec2(4.0, 6.0));
//!
//! // Build a new value of any supported type.
//! let sum = tuple::convert::<(f32, f32), _, 2>(&out);
//! assert_eq!(sum, (4.0, 6.0));
//! ```

use crate::{
    error::{KernelError, Result},
    vector::{Vec2, Vec3},
};

/// Types exposing `N` ordered `f32` components.
pub trait Components<const N: usize> {
    /// Returns the components in order.
    fn components(&self) -> [f32; N];
}

/// Types that can receive `N` ordered `f32` components in place.
pub trait WriteComponents<const N: usize> {
    /// Overwrites all components of `self`.
    fn write_components(&mut self, components: [f32; N]);
}

/// Types that can be constructed from `N` ordered `f32` components.
pub trait FromComponents<const N: usize>: Sized {
    /// Creates a value holding `components`.
    fn from_components(components: [f32; N]) -> Self;
}

/// Reads the components of `src`.
#[inline]
pub fn read<S: Components<N> + ?Sized, const N: usize>(src: &S) -> [f32; N] {
    src.components()
}

/// Stores `components` into the caller-owned `out`.
#[inline]
pub fn write_into<D: WriteComponents<N> + ?Sized, const N: usize>(
    out: &mut D,
    components: [f32; N],
) {
    out.write_components(components);
}

/// Creates a new `T` holding the components of `src`.
#[inline]
pub fn convert<T, S, const N: usize>(src: &S) -> T
where
    T: FromComponents<N>,
    S: Components<N> + ?Sized,
{
    T::from_components(src.components())
}

/// Stores `components` into `out`, starting at `offset`.
///
/// This supports the common layout of many vectors packed into one flat buffer.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] if `out` is too short to hold `N` elements starting
/// at `offset`. Nothing is written in that case.
pub fn write_slice<const N: usize>(
    out: &mut [f32],
    offset: usize,
    components: [f32; N],
) -> Result<()> {
    let dest = offset
        .checked_add(N)
        .and_then(|end| out.get_mut(offset..end))
        .ok_or(KernelError::InvalidArgument {
            name: "offset",
            reason: "destination slice is too short",
        })?;
    dest.copy_from_slice(&components);
    Ok(())
}

/// Reads `N` components from `src`, starting at `offset`.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] if `src` holds fewer than `N` elements starting at
/// `offset`.
pub fn read_slice<const N: usize>(src: &[f32], offset: usize) -> Result<[f32; N]> {
    offset
        .checked_add(N)
        .and_then(|end| src.get(offset..end))
        .and_then(|elems| <[f32; N]>::try_from(elems).ok())
        .ok_or(KernelError::InvalidArgument {
            name: "offset",
            reason: "source slice is too short",
        })
}

impl<const N: usize> Components<N> for [f32; N] {
    #[inline]
    fn components(&self) -> [f32; N] {
        *self
    }
}

impl<const N: usize> WriteComponents<N> for [f32; N] {
    #[inline]
    fn write_components(&mut self, components: [f32; N]) {
        *self = components;
    }
}

impl<const N: usize> FromComponents<N> for [f32; N] {
    #[inline]
    fn from_components(components: [f32; N]) -> Self {
        components
    }
}

impl<T: Components<N> + ?Sized, const N: usize> Components<N> for &T {
    #[inline]
    fn components(&self) -> [f32; N] {
        (**self).components()
    }
}

impl<T: Components<N> + ?Sized, const N: usize> Components<N> for &mut T {
    #[inline]
    fn components(&self) -> [f32; N] {
        (**self).components()
    }
}

impl<T: WriteComponents<N> + ?Sized, const N: usize> WriteComponents<N> for &mut T {
    #[inline]
    fn write_components(&mut self, components: [f32; N]) {
        (**self).write_components(components);
    }
}

impl Components<2> for (f32, f32) {
    #[inline]
    fn components(&self) -> [f32; 2] {
        [self.0, self.1]
    }
}

impl WriteComponents<2> for (f32, f32) {
    #[inline]
    fn write_components(&mut self, [x, y]: [f32; 2]) {
        *self = (x, y);
    }
}

impl FromComponents<2> for (f32, f32) {
    #[inline]
    fn from_components([x, y]: [f32; 2]) -> Self {
        (x, y)
    }
}

impl Components<3> for (f32, f32, f32) {
    #[inline]
    fn components(&self) -> [f32; 3] {
        [self.0, self.1, self.2]
    }
}

impl WriteComponents<3> for (f32, f32, f32) {
    #[inline]
    fn write_components(&mut self, [x, y, z]: [f32; 3]) {
        *self = (x, y, z);
    }
}

impl FromComponents<3> for (f32, f32, f32) {
    #[inline]
    fn from_components([x, y, z]: [f32; 3]) -> Self {
        (x, y, z)
    }
}

macro_rules! vector_components {
    ($ty:ident, $n:literal) => {
        impl Components<$n> for $ty {
            #[inline]
            fn components(&self) -> [f32; $n] {
                self.to_array()
            }
        }

        impl WriteComponents<$n> for $ty {
            #[inline]
            fn write_components(&mut self, components: [f32; $n]) {
                *self.as_mut_array() = components;
            }
        }

        impl FromComponents<$n> for $ty {
            #[inline]
            fn from_components(components: [f32; $n]) -> Self {
                Self::from_array(components)
            }
        }
    };
}

vector_components!(Vec2, 2);
vector_components!(Vec3, 3);
