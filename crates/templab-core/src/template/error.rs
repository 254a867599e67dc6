//! Template error types

use std::fmt;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Format string could not be tokenized
    MalformedSyntax {
        /// Error message
        message: String,
        /// Byte offset in the format string where the problem was detected
        offset: usize,
    },

    /// Placeholder refers to an argument that was not supplied
    MissingArgument {
        /// Index named (explicitly or implicitly) by the placeholder
        index: usize,
        /// Number of arguments supplied
        count: usize,
    },

    /// Argument supplied but never referenced by a placeholder
    UnusedArgument {
        /// Index of the unreferenced argument
        index: usize,
    },

    /// Format specifier is not understood for the given kind of value
    InvalidFormatSpecifier {
        /// The specifier as written
        specifier: String,
        /// Kind of value being formatted
        kind: &'static str,
    },

    /// A processor cannot render a value of this kind
    UnsupportedValue {
        /// Kind of value being formatted
        kind: &'static str,
        /// What the processor was trying to produce
        context: String,
    },

    /// A placeholder token vanished from the text being rendered
    TokenNotFound {
        /// The token that could not be located
        token: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MalformedSyntax { message, offset } => {
                write!(f, "Malformed syntax at offset {}: {}", offset, message)
            }
            TemplateError::MissingArgument { index, count } => {
                write!(
                    f,
                    "Placeholder refers to argument {} but only {} argument(s) were supplied",
                    index, count
                )
            }
            TemplateError::UnusedArgument { index } => {
                write!(f, "Argument {} is not referenced by any placeholder", index)
            }
            TemplateError::InvalidFormatSpecifier { specifier, kind } => {
                write!(
                    f,
                    "Format specifier '{}' is not valid for {} values",
                    specifier, kind
                )
            }
            TemplateError::UnsupportedValue { kind, context } => {
                write!(f, "Could not render {} of type '{}'", context, kind)
            }
            TemplateError::TokenNotFound { token } => {
                write!(
                    f,
                    "Placeholder token '{}' is missing from the rendered text",
                    token
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
