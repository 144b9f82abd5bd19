//! Error types for populating and describing configuration

/// Opaque error returned by custom parsers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while walking a configuration type.
///
/// Every variant names the environment variable whose position in the
/// traversal failed, so callers can report precisely which key to fix.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The resolved string does not match the target type's grammar.
    ///
    /// Covers malformed numbers and booleans, integers outside the declared
    /// width, and mapping entries without a `:` separator.
    #[error("Failed to parse environment variable '{name}' value '{value}' as {type_name}: {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// The offending string
        value: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the parser
        message: String,
    },

    /// The field's type has no shape the traversal understands.
    ///
    /// Function pointers, references, raw pointers, trait objects, tuples
    /// and channels cannot be populated from a string.
    #[error("Environment variable '{name}' targets unsupported type {type_name}")]
    Unsupported {
        /// Name of the environment variable for the field
        name: String,
        /// Fully qualified name of the unsupported type
        type_name: String,
    },

    /// An [`UnmarshalText`](crate::UnmarshalText) implementation rejected its input.
    #[error("Failed to unmarshal environment variable '{name}': {source}")]
    Unmarshal {
        /// Name of the environment variable being unmarshaled
        name: String,
        /// Error reported by the implementation
        source: BoxError,
    },

    /// Failed to read from a file specified by `{VAR}_FILE` environment variable.
    #[error("Failed to read file '{path}' for environment variable '{name}': {source}")]
    FileRead {
        /// Name of the `{VAR}_FILE` environment variable (e.g., "API_KEY_FILE")
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },
}

impl EnvError {
    /// Create a parse error (used by macro-generated code)
    #[doc(hidden)]
    pub fn parse_error<T>(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            name: name.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an unsupported type error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unsupported<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::Unsupported {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Name of the environment variable the error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Parse { name, .. }
            | Self::Unsupported { name, .. }
            | Self::Unmarshal { name, .. }
            | Self::FileRead { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_contains_type_info() {
        let err = EnvError::parse_error::<u8>("UINT8", "256", "number too large");
        match &err {
            EnvError::Parse {
                type_name, value, ..
            } => {
                assert_eq!(type_name, "u8");
                assert_eq!(value, "256");
            }
            _ => panic!("Expected Parse error"),
        }
        assert_eq!(
            err.to_string(),
            "Failed to parse environment variable 'UINT8' value '256' as u8: number too large"
        );
    }

    #[test]
    fn test_unsupported_accepts_unsized_types() {
        let err = EnvError::unsupported::<dyn Fn()>("CALLBACK");
        assert_eq!(err.name(), "CALLBACK");
        assert!(matches!(err, EnvError::Unsupported { .. }));
    }
}
