//! Error types for Iconforge.
//!
//! No failure here is recoverable locally: every error propagates to the
//! entry point, which reports it and exits non-zero. A rerun overwrites
//! whatever an aborted run left behind.

use thiserror::Error;

/// Main error type for Iconforge.
#[derive(Debug, Error)]
pub enum IconforgeError {
    /// Image dimensions the PNG header cannot describe.
    #[error("Invalid dimensions: {width}x{height} (width and height must be at least 1)")]
    InvalidDimension {
        /// Requested image width in pixels.
        width: u32,
        /// Requested image height in pixels.
        height: u32,
    },

    /// Directory creation or file write failure.
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message.
        message: String,
        /// Actionable hint for the user.
        hint: Option<String>,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl IconforgeError {
    /// Create an invalid-dimension error.
    pub fn invalid_dimension(width: u32, height: u32) -> Self {
        Self::InvalidDimension { width, height }
    }

    /// Create a new I/O error.
    pub fn io(message: impl Into<String>, hint: Option<&str>) -> Self {
        Self::Io { message: message.into(), hint: hint.map(String::from), source: None }
    }

    /// Create a new I/O error with source.
    pub fn io_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io { message: message.into(), hint: None, source: Some(Box::new(source)) }
    }

    /// Get an actionable hint for the user.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidDimension { .. } => {
                Some("Icon dimensions are fixed constants; check for a bad edit")
            }
            Self::Io { hint, .. } => {
                hint.as_deref().or(Some("Check file permissions and disk space"))
            }
        }
    }
}

/// Convert from std::io::Error to IconforgeError.
impl From<std::io::Error> for IconforgeError {
    fn from(err: std::io::Error) -> Self {
        IconforgeError::Io {
            message: err.to_string(),
            hint: Some("Check file permissions and disk space".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
