//! `convert` subcommand — print every representation of each input color.

use std::path::Path;

use super::{Color, Config, ConvertOutput, Result, format_kv, kv_width, print_json};

const KEYS: [&str; 6] = ["Input:", "Format:", "Hex:", "RGB:", "HSL:", "HSV:"];

pub(super) fn cmd_convert(inputs: &[String], json: bool, custom_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(custom_path);
    config.check()?;

    // Parse everything first so a bad input prints nothing.
    let colors = inputs
        .iter()
        .map(|raw| Color::parse(raw))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if json {
        return print_json(&ConvertOutput {
            count: colors.len(),
            colors,
        });
    }

    for (i, color) in colors.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in render(color, &config) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Human-readable lines for one color, honoring the output settings.
pub(super) fn render(color: &Color, config: &Config) -> Vec<String> {
    let w = kv_width(&KEYS, &[]);

    let hex = if config.hash_prefix {
        format!("#{}", color.hex())
    } else {
        color.hex().to_string()
    };
    let (r, g, b) = color.rgb().channels();
    let (hsl, hsv) = if config.css_units {
        (color.hsl().to_string(), color.hsv().to_string())
    } else {
        (
            fractions(color.hsl().components(), config.precision),
            fractions(color.hsv().components(), config.precision),
        )
    };

    vec![
        format_kv("Input:", color.raw(), w),
        format_kv("Format:", color.format(), w),
        format_kv("Hex:", hex, w),
        format_kv("RGB:", format_args!("{r}, {g}, {b}"), w),
        format_kv("HSL:", hsl, w),
        format_kv("HSV:", hsv, w),
    ]
}

fn fractions((a, b, c): (f64, f64, f64), p: usize) -> String {
    format!("{a:.p$}, {b:.p$}, {c:.p$}")
}
