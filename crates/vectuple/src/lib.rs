//! Stateless 2D and 3D vector math on plain `f32` components.
//!
//! # Motivation
//!
//! Code that interfaces with foreign data (flat GPU buffers, tuples from a parser, arrays from a
//! file format) often needs a handful of vector operations without adopting a full linear algebra
//! library and its types. This library offers those operations as free-standing kernels over
//! `[f32; 2]` and `[f32; 3]`, plus thin [`Vec2`] and [`Vec3`] wrappers for when owning a vector
//! type *is* convenient.
//!
//! # Goals & Non-Goals
//!
//! - Only support 2 and 3 dimensions, and only `f32` components. Generic element types and
//!   arbitrary dimensions are out of scope.
//! - Keep every kernel pure: no hidden state, no allocation, no I/O. The only logging happens when
//!   an operation reports an error.
//! - Make the numerical backend swappable at compile time via [`ScalarPolicy`] instead of a global
//!   setting, so that fast approximations and the exact `std` functions can coexist in one
//!   program.
//! - Report only the errors that are genuine misuse: a reciprocal of zero length, or invalid
//!   constructor arguments. Everything else follows IEEE-754 semantics.
//! - Don't provide matrices, quaternion arithmetic, or SIMD batch kernels.
//!
//! # Example
//!
//! ```
//! use vectuple::*;
//!
//! let n = Vec3Kernel::normalize([3.0, 0.0, 4.0], Tolerance::EXACT);
//! assert_eq!(n, [0.6, 0.0, 0.8]);
//!
//! let fast = Kernel3::<FastPolicy>::normalize([3.0, 0.0, 4.0], Tolerance::EXACT);
//! approx::assert_relative_eq!(fast[2], 0.8, max_relative = 1e-5);
//!
//! assert!(Vec3Kernel::reciprocal_length([0.0; 3]).is_err());
//! ```

mod error;
pub mod kernel;
pub mod policy;
mod tolerance;
pub mod tuple;
mod vector;

pub use error::{KernelError, Result};
pub use kernel::{Extremum, Kernel2, Kernel3, Vec2Kernel, Vec3Kernel};
#[cfg(feature = "libm")]
pub use policy::LibmPolicy;
pub use policy::{FastPolicy, RoundingMode, ScalarPolicy, StdPolicy};
pub use tolerance::Tolerance;
pub use vector::*;
