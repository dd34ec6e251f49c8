//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Spec parsing error.
    #[error("spec parse error: {0}")]
    Parse(#[from] yavl_schema::ParseError),

    /// Spec validation error.
    #[error("spec error: {0}")]
    Schema(#[from] yavl_schema::SchemaError),

    /// IO error while writing the artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown declaration style.
    #[error("unknown declaration style '{name}'")]
    UnknownStyle {
        /// Requested style name.
        name: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unknown style error.
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle { name: name.into() }
    }
}

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, CodegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_message() {
        let err = CodegenError::unknown_style("pascal");
        assert_eq!(err.to_string(), "unknown declaration style 'pascal'");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::other("sink closed");
        let err: CodegenError = io.into();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
