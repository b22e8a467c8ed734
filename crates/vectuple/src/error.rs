use thiserror::Error;

/// Errors reported by the vector kernels.
///
/// Most degenerate inputs (near-zero vectors, non-unit axes or normals) are *not* errors: they
/// have fully defined, if sometimes surprising, results. Only the operations that divide by an
/// exact length can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KernelError {
    /// An operation divided by the length of a vector whose length is exactly zero.
    ///
    /// Raised by `reciprocal`, `reciprocal_length` and `inverse_distance_to`. The check is on
    /// the exact squared length; no tolerance is applied.
    #[error("division by zero in `{op}`: operand has zero length")]
    DivideByZero { op: &'static str },

    /// A caller-supplied argument violates its contract (eg. a negative tolerance).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}

/// Result type of the fallible kernel operations.
pub type Result<T, E = KernelError> = std::result::Result<T, E>;
