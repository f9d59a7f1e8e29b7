//! Unified error type for the colortools-lib crate.
//!
//! [`ColortoolsError`] wraps the color engine's [`ColorError`] along with I/O
//! and configuration failures. `From` impls let `?` propagate across module
//! boundaries.

use std::fmt;

use crate::color::ColorError;

/// Unified error type for colortools-lib operations.
#[derive(Debug)]
pub enum ColortoolsError {
    /// Color notation or channel range error.
    Color(ColorError),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
    /// Configuration validation error.
    Config(String),
}

impl fmt::Display for ColortoolsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColortoolsError::Color(e) => write!(f, "{e}"),
            ColortoolsError::Io(e) => write!(f, "I/O error: {e}"),
            ColortoolsError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for ColortoolsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColortoolsError::Color(e) => Some(e),
            ColortoolsError::Io(e) => Some(e),
            ColortoolsError::Config(_) => None,
        }
    }
}

impl From<ColorError> for ColortoolsError {
    fn from(e: ColorError) -> Self {
        ColortoolsError::Color(e)
    }
}

impl From<std::io::Error> for ColortoolsError {
    fn from(e: std::io::Error) -> Self {
        ColortoolsError::Io(e)
    }
}

/// Crate-level Result alias using [`ColortoolsError`].
pub type Result<T> = std::result::Result<T, ColortoolsError>;
