//! Error types for spec loading and validation.

use thiserror::Error;

/// Error type for spec parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid spec structure.
    #[error("invalid spec structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// A type definition that cannot be turned into a map, enum or alias.
    #[error("invalid {kind} definition '{type_name}': {message}")]
    InvalidType {
        /// Type name.
        type_name: String,
        /// Kind the definition was classified as.
        kind: String,
        /// Error message.
        message: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, enum choice, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },
}

/// Error type for spec validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A required key is absent.
    #[error("Missing key \"{key}\" during conversion to type \"{element}\"")]
    MissingKey {
        /// Element the key belongs to.
        element: String,
        /// Missing key.
        key: String,
    },

    /// A key outside the allowed set is present.
    #[error("Superfluous key \"{key}\" during conversion to type \"{element}\"")]
    SuperfluousKey {
        /// Element the key was found on.
        element: String,
        /// Offending key.
        key: String,
    },

    /// A type definition has an invalid shape.
    #[error("invalid type '{type_name}': {message}")]
    InvalidType {
        /// Type name.
        type_name: String,
        /// Error message.
        message: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Creates an invalid type error.
    pub fn invalid_type(
        type_name: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            type_name: type_name.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl SchemaError {
    /// Creates a missing key error.
    pub fn missing_key(element: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            element: element.into(),
            key: key.into(),
        }
    }

    /// Creates a superfluous key error.
    pub fn superfluous_key(element: impl Into<String>, key: impl Into<String>) -> Self {
        Self::SuperfluousKey {
            element: element.into(),
            key: key.into(),
        }
    }

    /// Creates an invalid type error.
    pub fn invalid_type(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidType {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Creates a generic validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = SchemaError::missing_key("SpecType", "Types");
        assert_eq!(
            err.to_string(),
            "Missing key \"Types\" during conversion to type \"SpecType\""
        );
    }

    #[test]
    fn test_superfluous_key_message() {
        let err = SchemaError::superfluous_key("SpecType", "Extra");
        assert_eq!(
            err.to_string(),
            "Superfluous key \"Extra\" during conversion to type \"SpecType\""
        );
    }

    #[test]
    fn test_invalid_type_message() {
        let err = ParseError::invalid_type("Point", "map", "field 'x' has no type");
        assert_eq!(
            err.to_string(),
            "invalid map definition 'Point': field 'x' has no type"
        );
    }

    #[test]
    fn test_parse_error_wraps_into_schema_error() {
        let err: SchemaError = ParseError::duplicate("enum choice", "Red").into();
        assert!(matches!(err, SchemaError::Parse(_)));
        let message = err.to_string();
        assert!(message.contains("duplicate enum choice definition: 'Red'"));
    }
}
