//! Error types for the plotstyle library.

use std::fmt;
use std::io;

/// The main error type for plotstyle operations.
#[derive(Debug)]
pub enum StyleError {
    /// Error during IO operations (theme file loading, etc.)
    Io(io::Error),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// A brush held a different variant than the one requested
    BrushKind {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Io(err) => write!(f, "IO error: {}", err),
            StyleError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            StyleError::BrushKind { expected, found } => {
                write!(f, "Brush kind mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for StyleError {
    fn from(err: io::Error) -> Self {
        StyleError::Io(err)
    }
}

/// Result type alias for plotstyle operations.
pub type StyleResult<T> = Result<T, StyleError>;
