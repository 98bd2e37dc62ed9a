//! Error types for hologram synthesis and reconstruction.

use std::fmt;

/// Errors surfaced by grid construction, field construction, and the
/// synthesis entry points.
///
/// All failures are local and synchronous: they are raised before any
/// transform or accumulation starts, and there are no partial results.
/// Retrying with unchanged inputs is meaningless — the computations are
/// deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoloError {
    /// A physical parameter is non-positive, non-finite, or otherwise
    /// outside its valid domain.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An input array's length disagrees with the implied N×N grid.
    ShapeMismatch {
        /// Expected number of samples (`size * size`).
        expected: usize,
        /// Actual number of samples supplied.
        actual: usize,
    },
}

impl fmt::Display for HoloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter '{name}': {value}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected} samples, got {actual}")
            }
        }
    }
}

impl std::error::Error for HoloError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_parameter() {
        let err = HoloError::InvalidParameter {
            name: "wavelength",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid parameter 'wavelength': -1");
    }

    #[test]
    fn display_shape_mismatch() {
        let err = HoloError::ShapeMismatch {
            expected: 16,
            actual: 9,
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 16 samples, got 9");
    }
}
