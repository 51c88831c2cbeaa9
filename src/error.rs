use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stripegen operations
#[derive(Error, Diagnostic, Debug)]
pub enum StripeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(stripegen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(stripegen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid colour format: {value}")]
    #[diagnostic(code(stripegen::colour))]
    InvalidColourFormat {
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid canvas dimensions: {width}x{height}")]
    #[diagnostic(code(stripegen::dimensions))]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(stripegen::parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(stripegen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, StripeError>;
