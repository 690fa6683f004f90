//! Error types and result handling for data generation.

use std::fmt;

/// Error type covering everything that can go wrong while setting up generation
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Generator or configuration bounds are malformed
    InvalidConfiguration { message: String },

    /// A binding selector does not resolve to a public field of the target type
    InvalidPropertyExpression {
        target: &'static str,
        message: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidConfiguration { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            GenerateError::InvalidPropertyExpression { target, message } => {
                write!(f, "Invalid property expression for {}: {}", target, message)
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Result of constructing a generator, binding or configuration
pub type GenerateResult<T> = Result<T, GenerateError>;

impl GenerateError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an invalid property expression error for a target type
    pub fn invalid_property_expression(
        target: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPropertyExpression {
            target,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_configuration_display() {
        let error = GenerateError::invalid_configuration("min 5 is greater than max 2");
        assert_eq!(
            format!("{}", error),
            "Invalid configuration: min 5 is greater than max 2"
        );
    }

    #[test]
    fn test_invalid_property_expression_display() {
        let error = GenerateError::invalid_property_expression(
            "Account",
            "selector must be a direct access to a public field",
        );
        let display = format!("{}", error);
        assert!(display.contains("Invalid property expression for Account"));
        assert!(display.contains("direct access to a public field"));
    }

    #[test]
    fn test_helper_constructors() {
        let error = GenerateError::invalid_configuration("empty candidate set");
        match error {
            GenerateError::InvalidConfiguration { message } => {
                assert_eq!(message, "empty candidate set");
            }
            _ => panic!("Expected InvalidConfiguration variant"),
        }

        let error = GenerateError::invalid_property_expression("Order", "not a field");
        match error {
            GenerateError::InvalidPropertyExpression { target, message } => {
                assert_eq!(target, "Order");
                assert_eq!(message, "not a field");
            }
            _ => panic!("Expected InvalidPropertyExpression variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let error = GenerateError::invalid_configuration("bad bounds");
        assert!(error.source().is_none());
    }
}
