//! Error types for U-Packing.

use thiserror::Error;

/// Result type alias for U-Packing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a packer.
///
/// Failing to find a container that holds every box is not an error; the
/// packer reports that as an empty result instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid box geometry provided.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid container provided.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidGeometry("width of 'B1' must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid geometry: width of 'B1' must be positive"
        );

        let err = Error::ConfigError("no containers".into());
        assert_eq!(err.to_string(), "Configuration error: no containers");
    }
}
