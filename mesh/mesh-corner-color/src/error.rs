//! Error types for corner-color recoloring.

use mesh_types::StreamError;
use thiserror::Error;

/// Errors that can occur while recoloring a triangle stream.
///
/// A degenerate bounding rectangle is not an error: the stream passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CornerColorError {
    /// Vertex count is not a multiple of three.
    #[error("Triangle stream has {len} vertices (must be a multiple of 3)")]
    MalformedStream {
        /// Offending vertex count.
        len: usize,
    },

    /// Subdivision count outside the supported range.
    #[error("Invalid subdivision count: {count} (must be <= {max})")]
    InvalidSubdivisions {
        /// Requested pass count.
        count: u32,
        /// Largest supported pass count.
        max: u32,
    },
}

impl From<StreamError> for CornerColorError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::MalformedLength { len } => Self::MalformedStream { len },
        }
    }
}

/// Result type for corner-color operations.
pub type CornerColorResult<T> = std::result::Result<T, CornerColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CornerColorError::MalformedStream { len: 7 };
        assert!(format!("{err}").contains('7'));

        let err = CornerColorError::InvalidSubdivisions { count: 9, max: 5 };
        let display = format!("{err}");
        assert!(display.contains('9'));
        assert!(display.contains('5'));
    }

    #[test]
    fn test_from_stream_error() {
        let err: CornerColorError = StreamError::MalformedLength { len: 2 }.into();
        assert_eq!(err, CornerColorError::MalformedStream { len: 2 });
    }
}
