//! colortools — color notation parsing and RGB/HSL/HSV conversion.

pub mod color;
pub mod config;
pub mod error;

pub use color::{Color, ColorError};
pub use error::ColortoolsError;
