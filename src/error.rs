//! Error types for labeled-array construction and integrator preconditions.

use thiserror::Error;

/// Error type for labeled-field construction.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Value buffer length does not match the coordinate axes.
    #[error("Field '{name}' has {actual} values, expected {nz} levels x {nt} steps = {expected}")]
    ShapeMismatch {
        name: String,
        nz: usize,
        nt: usize,
        expected: usize,
        actual: usize,
    },

    /// Depth coordinate is not strictly monotonic.
    #[error("Depth coordinate of field '{name}' is not strictly monotonic at level {level}")]
    NonMonotonicDepth { name: String, level: usize },

    /// A coordinate axis has no entries.
    #[error("Field '{name}' has an empty {axis} axis")]
    EmptyAxis { name: String, axis: &'static str },
}

/// Error type for Stokes drift integrator preconditions.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Two parallel input arrays have different lengths.
    #[error("Array '{name}' has length {actual}, expected {expected} to match the frequency axis")]
    Mismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Empty input where at least one element is required.
    #[error("Array '{name}' is empty")]
    Empty { name: &'static str },

    /// A scalar parameter violates its invariant.
    #[error("Parameter '{name}' must be strictly positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_message() {
        let err = ShapeError::Mismatch {
            name: "xcmp",
            expected: 5,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("xcmp"), "message should name the array: {}", msg);
        assert!(msg.contains('5') && msg.contains('4'));
    }

    #[test]
    fn test_field_error_message() {
        let err = FieldError::NonMonotonicDepth {
            name: "temp".to_string(),
            level: 3,
        };
        assert!(err.to_string().contains("temp"));
    }
}
