use std::fmt;

use crate::error::{KernelError, Result};

/// A validated, non-negative margin around zero.
///
/// Kernel operations that accept a [`Tolerance`] treat a vector as *zero-equivalent* when its
/// length is at most the tolerance. The comparison is performed on the component scale: a
/// tolerance of `0.1` means "length `<= 0.1`", not "squared length `<= 0.1`". Internally the
/// kernels compare the squared length against the squared tolerance, which is equivalent but
/// avoids a square root.
///
/// The [`Default`] tolerance is [`Tolerance::EXACT`].
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Tolerance(f32);

impl Tolerance {
    /// A tolerance of `0.0`: only vectors with an exactly zero length are zero-equivalent.
    pub const EXACT: Self = Self(0.0);

    /// A tolerance of [`f32::EPSILON`].
    pub const EPSILON: Self = Self(f32::EPSILON);

    /// Validates `value` and wraps it in a [`Tolerance`].
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] if `value` is negative or `NaN`. Infinite
    /// tolerances are accepted (every finite vector is then zero-equivalent).
    pub fn new(value: f32) -> Result<Self> {
        let reason = if value.is_nan() {
            "must not be NaN"
        } else if value < 0.0 {
            "must not be negative"
        } else {
            return Ok(Self(value));
        };

        log::debug!("rejecting tolerance {value}: {reason}");
        Err(KernelError::InvalidArgument {
            name: "tolerance",
            reason,
        })
    }

    /// Wraps `value` without validating it.
    ///
    /// The caller is responsible for passing a non-negative, non-`NaN` value. Invalid values do
    /// not cause undefined behavior, but make tolerance-based operations return meaningless
    /// results.
    #[inline]
    pub const fn new_unchecked(value: f32) -> Self {
        Self(value)
    }

    /// Returns the tolerance as a raw `f32`.
    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Returns whether a vector is zero-equivalent, given its length as `scale * sqrt(squared)`.
    ///
    /// With `scale == 1.0` this is `squared <= tolerance²`. A larger or smaller `scale` moves the
    /// tolerance onto the rescaled vector instead, so lengths whose square overflows or underflows
    /// still compare correctly.
    #[inline]
    pub(crate) fn admits_scaled(self, scale: f32, squared: f32) -> bool {
        let tolerance = self.0 / scale;
        squared <= tolerance * tolerance
    }
}

impl TryFrom<f32> for Tolerance {
    type Error = KernelError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Tolerance> for f32 {
    fn from(value: Tolerance) -> Self {
        value.0
    }
}

impl fmt::Debug for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tolerance").field(&self.0).finish()
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
