//! Error types for ring buffer operations.

use thiserror::Error;

/// Returned by operations that need at least one live block.
///
/// The buffer is left untouched when this error is produced, so it is always
/// safe to keep using it afterwards.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ring buffer: no block to process")]
pub struct EmptyBufferError;

/// Result type alias for ring buffer operations.
pub type Result<T> = std::result::Result<T, EmptyBufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_error_display() {
        assert_eq!(format!("{}", EmptyBufferError), "ring buffer: no block to process");
    }

    #[test]
    fn test_empty_buffer_error_equality() {
        let err: Result<i32> = Err(EmptyBufferError);
        assert_eq!(err, Err(EmptyBufferError));
    }

    #[test]
    fn test_empty_buffer_error_is_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(EmptyBufferError);
        assert!(err.source().is_none());
    }
}
