use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplabError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse render options: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_NOT_FOUND: render options file '{path}' could not be read")]
    ConfigNotFound { path: PathBuf },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::error::TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TemplabError>;
