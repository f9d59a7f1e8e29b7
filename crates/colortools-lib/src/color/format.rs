//! Notation sniffing — decides which grammar a raw color string is written in.
//!
//! Accepts (surrounding whitespace ignored):
//! - Full hex: `"#003366"`, `"003366"`, `"#0a0B0c"`
//! - Short hex: `"#036"`, `"036"`
//! - List: `"0, 51, 102"`, `"rgb(0,51,102)"`, `"rgba(0, 51, 102, 0.5)"`, `"(0,51,102)"`

use std::fmt;

use serde::Serialize;

/// Which notation a raw color string uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// `#RRGGBB` or `RRGGBB`.
    FullHex,
    /// `#RGB` or `RGB`.
    ShortHex,
    /// Comma-separated decimal channels, optionally wrapped in `rgb(...)`/`rgba(...)`.
    ListNotation,
    Unrecognized,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::FullHex => write!(f, "full hex"),
            Format::ShortHex => write!(f, "short hex"),
            Format::ListNotation => write!(f, "list"),
            Format::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// A classified input, borrowing the parts the canonicalizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Notation<'a> {
    /// The 6 hex digits, `#` stripped.
    FullHex(&'a str),
    /// The 3 hex digits, `#` stripped.
    ShortHex(&'a str),
    /// Red, green and blue components as written. Alpha, if any, is dropped.
    List([&'a str; 3]),
    Unrecognized,
}

impl Notation<'_> {
    pub(crate) fn format(&self) -> Format {
        match self {
            Notation::FullHex(_) => Format::FullHex,
            Notation::ShortHex(_) => Format::ShortHex,
            Notation::List(_) => Format::ListNotation,
            Notation::Unrecognized => Format::Unrecognized,
        }
    }
}

/// Classify a raw color string without converting it.
pub fn classify(raw: &str) -> Format {
    sniff(raw).format()
}

/// Classify a raw color string, keeping slices of the matched parts.
pub(crate) fn sniff(raw: &str) -> Notation<'_> {
    let s = raw.trim();

    if let Some(digits) = hex_digits(s) {
        // Length alone separates the two hex grammars.
        match digits.len() {
            6 => return Notation::FullHex(digits),
            3 => return Notation::ShortHex(digits),
            _ => {}
        }
    }

    match list_components(s) {
        Some(channels) => Notation::List(channels),
        None => Notation::Unrecognized,
    }
}

/// Strip an optional `#`; return the rest if it is non-empty and all hex digits.
fn hex_digits(s: &str) -> Option<&str> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(digits)
    } else {
        None
    }
}

fn list_components(s: &str) -> Option<[&str; 3]> {
    let body = strip_function_name(s);
    let body = match body.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')')?,
        None => body,
    };

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let (r, g, b) = match parts.as_slice() {
        [r, g, b] => (*r, *g, *b),
        [r, g, b, a] if is_alpha(a) => (*r, *g, *b),
        _ => return None,
    };

    if [r, g, b].iter().all(|c| is_integer(c)) {
        Some([r, g, b])
    } else {
        None
    }
}

/// Drop a leading `rgba`/`rgb` (any case) and the whitespace after it.
fn strip_function_name(s: &str) -> &str {
    for name in ["rgba", "rgb"] {
        if let Some(head) = s.get(..name.len())
            && head.eq_ignore_ascii_case(name)
        {
            return s[name.len()..].trim_start();
        }
    }
    s
}

/// Decimal integer with an optional leading `-`.
///
/// Negatives are grammatical so that they surface as range errors, not format errors.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `1`, `0.5`, `.5`, `1.`
fn is_alpha(s: &str) -> bool {
    let (int, frac) = s.split_once('.').unwrap_or((s, ""));
    !(int.is_empty() && frac.is_empty())
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}
