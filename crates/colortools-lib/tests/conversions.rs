//! Integration tests: the public conversion API end to end.
//!
//! These exercise `Color::parse` across notations, checking the properties
//! that must hold between the canonical hex, RGB, HSL and HSV forms.

use colortools_lib::color::{Channel, Format, classify};
use colortools_lib::{Color, ColorError};

const EPS: f64 = 1e-4;

fn assert_close(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
    let ok = (actual.0 - expected.0).abs() < EPS
        && (actual.1 - expected.1).abs() < EPS
        && (actual.2 - expected.2).abs() < EPS;
    assert!(ok, "{actual:?} != {expected:?}");
}

// ── hex notations ──

#[test]
fn full_hex_canonical_is_uppercase_without_hash() {
    for raw in ["#003366", "003366", "#a1b2c3", "DeadBe", "#ffffff"] {
        let c = Color::parse(raw).unwrap();
        let expected = raw.trim_start_matches('#').to_ascii_uppercase();
        assert_eq!(c.hex().as_str(), expected, "{raw}");
        assert_eq!(c.format(), Format::FullHex);
    }
}

#[test]
fn short_hex_duplicates_every_digit() {
    for raw in ["036", "#036", "fff", "#A0c", "000", "9e1"] {
        let digits = raw.trim_start_matches('#').to_ascii_uppercase();
        let expected: String = digits.chars().flat_map(|c| [c, c]).collect();
        let c = Color::parse(raw).unwrap();
        assert_eq!(c.hex().as_str(), expected, "{raw}");
        assert_eq!(c.format(), Format::ShortHex);
    }
    assert_eq!(Color::parse("036").unwrap().hex().as_str(), "003366");
}

#[test]
fn every_short_hex_digit_matches_times_17() {
    for d in "0123456789ABCDEF".chars() {
        let c = Color::parse(&format!("{d}{d}{d}")).unwrap();
        let v = d.to_digit(16).unwrap() as u8 * 17;
        assert_eq!(c.rgb().channels(), (v, v, v));
    }
}

// ── list notation ──

#[test]
fn list_round_trips_channels() {
    // Strided walk over the cube plus its edges.
    let values: Vec<u8> = (0..=255u8).step_by(15).chain([1, 254, 255]).collect();
    for &r in &values {
        for &g in &values {
            for &b in &values {
                let c = Color::parse(&format!("{r},{g},{b}")).unwrap();
                assert_eq!(c.rgb().channels(), (r, g, b));
            }
        }
    }
}

#[test]
fn list_round_trips_each_channel_fully() {
    for v in 0..=255u8 {
        for (raw, expected) in [
            (format!("{v}, 0, 0"), (v, 0, 0)),
            (format!("rgb(0, {v}, 0)"), (0, v, 0)),
            (format!("rgba(0,0,{v},0.5)"), (0, 0, v)),
        ] {
            assert_eq!(Color::parse(&raw).unwrap().rgb().channels(), expected);
        }
    }
}

#[test]
fn rgb_equals_decoded_hex() {
    for raw in ["#123456", "abc", "10, 20, 30", "rgb(255,128,0)"] {
        let c = Color::parse(raw).unwrap();
        assert_eq!(c.rgb(), c.hex().decode(), "{raw}");
        assert_eq!(c.rgb().to_hex(), *c.hex(), "{raw}");
    }
}

// ── derived spaces ──

#[test]
fn achromatic_colors_have_zero_hue_and_saturation() {
    for v in 0..=255u8 {
        let c = Color::parse(&format!("{v},{v},{v}")).unwrap();
        let l = f64::from(v) / 255.0;
        assert_eq!(c.hsl().components(), (0.0, 0.0, l));
        assert_eq!(c.hsv().components(), (0.0, 0.0, l));
    }
}

#[test]
fn derived_components_stay_in_unit_range() {
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(51) {
                let c = Color::parse(&format!("{r},{g},{b}")).unwrap();
                let (h, s, l) = c.hsl().components();
                let (h2, s2, v) = c.hsv().components();
                for x in [s, l, s2, v] {
                    assert!((0.0..=1.0 + 1e-12).contains(&x), "{x} for {r},{g},{b}");
                }
                for x in [h, h2] {
                    assert!((0.0..1.0).contains(&x), "hue {x} for {r},{g},{b}");
                }
            }
        }
    }
}

#[test]
fn favorite_color_scenario() {
    let c = Color::parse("#003366").unwrap();
    assert_eq!(c.hex().as_str(), "003366");
    assert_eq!(c.rgb().channels(), (0, 51, 102));
    assert_close(c.hsl().components(), (0.5833, 1.0, 0.2));
    assert_close(c.hsv().components(), (0.5833, 1.0, 0.4));
}

#[test]
fn white_scenario() {
    let c = Color::parse("FFFFFF").unwrap();
    assert_eq!(c.rgb().channels(), (255, 255, 255));
    assert_eq!(c.hsl().components(), (0.0, 0.0, 1.0));
    assert_eq!(c.hsv().components(), (0.0, 0.0, 1.0));
}

#[test]
fn black_scenario() {
    let c = Color::parse("000000").unwrap();
    assert_eq!(c.rgb().channels(), (0, 0, 0));
    assert_eq!(c.hsl().components(), (0.0, 0.0, 0.0));
    assert_eq!(c.hsv().components(), (0.0, 0.0, 0.0));
}

#[test]
fn hsv_saturation_is_not_floored() {
    // delta / max = 0.5 here; a floored ratio would report 0.
    let c = Color::parse("#804040").unwrap();
    assert_close(c.hsv().components(), (0.0, 0.5, 128.0 / 255.0));
}

#[test]
fn orange_scenario() {
    let c = Color::parse("rgb(255, 128, 0)").unwrap();
    let hue = (128.0 / 255.0) / 6.0;
    assert_close(c.hsl().components(), (hue, 1.0, 0.5));
    assert_close(c.hsv().components(), (hue, 1.0, 1.0));
}

// ── errors ──

#[test]
fn channel_above_255_is_range_error() {
    let err = Color::parse("256,0,0").unwrap_err();
    assert_eq!(
        err,
        ColorError::Range {
            raw: "256,0,0".into(),
            channel: Channel::Red,
            value: "256".into(),
        }
    );
}

#[test]
fn unrecognized_is_format_error() {
    let err = Color::parse("not-a-color").unwrap_err();
    assert_eq!(
        err,
        ColorError::Format {
            raw: "not-a-color".into()
        }
    );
    assert_eq!(classify("not-a-color"), Format::Unrecognized);
}

#[test]
fn errors_mention_input() {
    for raw in ["#12345", "1,2,999", "rgb()"] {
        let err = Color::parse(raw).unwrap_err();
        assert!(err.to_string().contains(raw), "{err}");
    }
}

// ── concurrency ──

#[test]
fn parses_concurrently_without_sharing() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            std::thread::spawn(move || {
                let v = i * 30;
                Color::parse(&format!("{v},{v},{v}")).unwrap()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let c = h.join().unwrap();
        let v = i as u8 * 30;
        assert_eq!(c.rgb().channels(), (v, v, v));
    }
}
