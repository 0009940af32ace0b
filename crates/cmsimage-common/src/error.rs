//! Common error types used throughout cmsimage.
//!
//! Image retrieval reports failures through this type. Validation never does:
//! it collapses every failure to `false`.

/// Common error type for cmsimage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested image could not be found.
    #[error("Image not found: {0}")]
    NotFound(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A host facility (path mapping, settings) is missing or misconfigured.
    #[error("Host unavailable: {0}")]
    HostUnavailable(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new HostUnavailable error.
    pub fn host_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::HostUnavailable(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a new Io error from a message (for transport errors, etc).
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Self::Io(std::io::Error::other(msg.into()))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("logo.png");
        assert_eq!(err.to_string(), "Image not found: logo.png");

        let err = Error::invalid_input("missing id");
        assert_eq!(err.to_string(), "Invalid input: missing id");

        let err = Error::host_unavailable("no path mapper");
        assert_eq!(err.to_string(), "Host unavailable: no path mapper");

        let err = Error::internal("unexpected state");
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_io_from_message() {
        let err = Error::io("connection reset");
        assert_eq!(err.to_string(), "IO error: connection reset");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::not_found("x"), Error::NotFound(_)));
        assert!(matches!(Error::invalid_input("x"), Error::InvalidInput(_)));
        assert!(matches!(Error::host_unavailable("x"), Error::HostUnavailable(_)));
        assert!(matches!(Error::internal("x"), Error::Internal(_)));
    }
}
