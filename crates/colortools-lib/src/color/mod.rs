//! Color parsing and conversion — classify, canonicalize, decode, derive.
//!
//! [`Color::parse`] runs the whole pipeline eagerly and returns an immutable
//! value holding every representation, or a [`ColorError`].

mod format;
mod hex;
mod model;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use format::{Format, classify};
pub use hex::{HexCode, canonicalize};
pub use model::{Hsl, Hsv, Rgb, rgb_to_hsl, rgb_to_hsv};

/// An RGB channel, named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Why a raw string could not be turned into a [`Color`].
///
/// Both variants carry the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string matches none of the supported notations.
    Format { raw: String },
    /// A list-notation channel lies outside 0-255.
    Range {
        raw: String,
        channel: Channel,
        value: String,
    },
}

impl ColorError {
    /// The input that failed.
    pub fn raw(&self) -> &str {
        match self {
            ColorError::Format { raw } | ColorError::Range { raw, .. } => raw,
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Format { raw } => {
                write!(f, "unrecognized color notation: {raw:?}")
            }
            ColorError::Range {
                raw,
                channel,
                value,
            } => write!(
                f,
                "{channel} channel value {value} is out of range 0-255 in {raw:?}"
            ),
        }
    }
}

impl std::error::Error for ColorError {}

pub type Result<T> = std::result::Result<T, ColorError>;

/// A color with all of its representations derived up front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    raw: String,
    format: Format,
    hex: HexCode,
    rgb: Rgb,
    hsl: Hsl,
    hsv: Hsv,
}

impl Color {
    /// Parse a color written as hex (`#003366`, `036`) or a channel list
    /// (`0, 51, 102`, `rgb(0,51,102)`).
    pub fn parse(raw: &str) -> Result<Self> {
        let (format, hex) = canonicalize(raw)?;
        let rgb = hex.decode();
        log::debug!("{raw:?}: {format} -> {hex}");
        Ok(Color {
            raw: raw.to_string(),
            format,
            hex,
            rgb,
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
        })
    }

    /// The input as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn hex(&self) -> &HexCode {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex)
    }
}
