//! Color models — 8-bit RGB and the HSL/HSV cylinders derived from it.
//!
//! All HSL/HSV components are fractions in `[0, 1]`; hue is a fraction of a
//! full turn. `Display` renders CSS-style units (degrees, percent).

use std::fmt;

use serde::Serialize;

use super::hex::HexCode;

/// 8-bit RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a tuple, in R, G, B order.
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Encode as canonical hex, two zero-padded uppercase digits per channel.
    pub fn to_hex(self) -> HexCode {
        HexCode::from_rgb(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn components(self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.lightness)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            css_number(self.hue * 360.0),
            css_number(self.saturation * 100.0),
            css_number(self.lightness * 100.0)
        )
    }
}

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub const fn components(self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.value)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}%, {}%)",
            css_number(self.hue * 360.0),
            css_number(self.saturation * 100.0),
            css_number(self.value * 100.0)
        )
    }
}

/// Round to at most two decimals; `Display` for f64 drops trailing zeros.
fn css_number(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Normalized channels plus their extremes, shared by both derivations.
struct Spread {
    r: f64,
    g: f64,
    b: f64,
    min: f64,
    max: f64,
}

impl Spread {
    fn of(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        Self {
            r,
            g,
            b,
            min: r.min(g).min(b),
            max: r.max(g).max(b),
        }
    }

    fn delta(&self) -> f64 {
        self.max - self.min
    }

    fn is_achromatic(&self) -> bool {
        self.max == self.min
    }

    /// Hue as a fraction of a turn in `[0, 1)`. Zero for grays.
    fn hue(&self) -> f64 {
        if self.is_achromatic() {
            return 0.0;
        }
        let delta = self.delta();
        let sector = if self.max == self.r {
            let wrap = if self.g < self.b { 6.0 } else { 0.0 };
            (self.g - self.b) / delta + wrap
        } else if self.max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        sector / 6.0
    }
}

/// Derive HSL from 8-bit RGB.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let s = Spread::of(rgb);
    let lightness = (s.max + s.min) / 2.0;

    let saturation = if s.is_achromatic() {
        0.0
    } else if lightness > 0.5 {
        s.delta() / (2.0 - s.max - s.min)
    } else {
        s.delta() / (s.max + s.min)
    };

    Hsl {
        hue: s.hue(),
        saturation,
        lightness,
    }
}

/// Derive HSV from 8-bit RGB.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let s = Spread::of(rgb);

    // True division: a floored ratio would zero every saturation below 1.
    let saturation = if s.max == 0.0 { 0.0 } else { s.delta() / s.max };

    Hsv {
        hue: s.hue(),
        saturation,
        value: s.max,
    }
}
