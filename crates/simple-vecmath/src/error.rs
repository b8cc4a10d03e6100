//! Error type for fallible constructors.

use thiserror::Error;

/// Errors raised when building a value from a flat array.
///
/// Numeric degeneracies (singular matrices, zero-length vectors) are *not* errors; they propagate
/// as `NaN`/`Inf` components instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input array has fewer components than the target type needs.
    #[error("expected at least {expected} components, got {actual}")]
    OutOfRange {
        /// Number of components the target type reads.
        expected: usize,
        /// Length of the array that was passed in.
        actual: usize,
    },

    /// A sub-range `offset..offset + size` reaches past the end of the input array.
    #[error("range {offset}..{offset}+{size} is out of bounds for an array of length {len}")]
    SliceRange {
        offset: usize,
        size: usize,
        len: usize,
    },

    /// `width * height` does not fit in a `usize`.
    #[error("a {width}x{height} matrix has more elements than fit in memory")]
    DimensionOverflow { width: usize, height: usize },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `data` holds at least `expected` components.
pub(crate) fn check_len(data: &[f32], expected: usize) -> Result<()> {
    if data.len() < expected {
        return Err(Error::OutOfRange {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
