//! Canonical hex — the 6-digit uppercase form every notation is reduced to.

use std::fmt;

use serde::Serialize;

use super::format::{Notation, sniff};
use super::model::Rgb;
use super::{Channel, ColorError, Format, Result};

/// Six uppercase hex digits, two per channel, no `#`.
///
/// Only constructible from validated input, so [`HexCode::decode`] is total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexCode(String);

impl HexCode {
    /// Accepts exactly 6 hex digits in either case, without `#`.
    pub fn new(digits: &str) -> Option<Self> {
        if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(HexCode(digits.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub(crate) fn from_rgb(rgb: Rgb) -> Self {
        HexCode(format!("{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the pairs at `[0:2]`, `[2:4]`, `[4:6]` into channels.
    pub fn decode(&self) -> Rgb {
        let d = self.0.as_bytes();
        Rgb::new(pair(d[0], d[1]), pair(d[2], d[3]), pair(d[4], d[5]))
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn pair(hi: u8, lo: u8) -> u8 {
    nibble(hi) << 4 | nibble(lo)
}

fn nibble(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'A'..=b'F' => ch - b'A' + 10,
        _ => unreachable!("HexCode holds only [0-9A-F], found {:?}", ch as char),
    }
}

/// Reduce a raw color string to its notation and canonical hex.
pub fn canonicalize(raw: &str) -> Result<(Format, HexCode)> {
    let notation = sniff(raw);
    let hex = match notation {
        Notation::FullHex(digits) => HexCode(digits.to_ascii_uppercase()),
        Notation::ShortHex(digits) => HexCode(expand_short(digits)),
        Notation::List([r, g, b]) => Rgb::new(
            channel(raw, Channel::Red, r)?,
            channel(raw, Channel::Green, g)?,
            channel(raw, Channel::Blue, b)?,
        )
        .to_hex(),
        Notation::Unrecognized => {
            return Err(ColorError::Format {
                raw: raw.to_string(),
            });
        }
    };
    Ok((notation.format(), hex))
}

/// `"a0F"` → `"AA00FF"`: each digit character written twice.
fn expand_short(digits: &str) -> String {
    digits
        .chars()
        .flat_map(|c| {
            let c = c.to_ascii_uppercase();
            [c, c]
        })
        .collect()
}

/// Parse one list component; anything outside 0..=255 is an error, never clamped.
fn channel(raw: &str, which: Channel, text: &str) -> Result<u8> {
    text.parse::<i64>()
        .ok()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| ColorError::Range {
            raw: raw.to_string(),
            channel: which,
            value: text.to_string(),
        })
}
