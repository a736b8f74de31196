//! Error types for tinydsp's checked entry points.
//!
//! The kernels themselves never fail. These errors are only produced by the
//! functions in [`crate::checked`], which validate buffer lengths before
//! handing the call to the kernels.

use core::fmt;

/// Errors reported by the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TinyDspError {
    /// The destination buffer cannot hold every element of the source.
    LengthMismatch {
        /// Number of elements in the source buffer.
        source_len: usize,
        /// Number of elements in the destination buffer.
        destination_len: usize,
    },
}

impl fmt::Display for TinyDspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TinyDspError::LengthMismatch {
                source_len,
                destination_len,
            } => write!(
                f,
                "Length mismatch: destination holds {} elements but source has {}",
                destination_len, source_len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TinyDspError {}

/// Result type alias for tinydsp operations.
pub type Result<T> = core::result::Result<T, TinyDspError>;

/// Creates a length mismatch error.
pub fn length_mismatch(source_len: usize, destination_len: usize) -> TinyDspError {
    TinyDspError::LengthMismatch {
        source_len,
        destination_len,
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = length_mismatch(8, 5);
        let display = format!("{}", error);
        assert!(display.contains("Length mismatch"));
        assert!(display.contains("destination holds 5 elements"));
        assert!(display.contains("source has 8"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = length_mismatch(4, 3);
        let error2 = length_mismatch(4, 3);
        let error3 = length_mismatch(4, 2);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = length_mismatch(16, 0);

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
