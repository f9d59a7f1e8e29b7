//! CLI subcommands — convert, classify, config.

mod classify;
mod config_cmd;
mod convert;

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

pub(super) use colortools_lib::color::{self, Color, Format};
pub(super) use colortools_lib::config::Config;
pub(super) use colortools_lib::error::{ColortoolsError, Result};

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{key:<width$}{value}", width = w);
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

/// Pretty-print a JSON document to stdout.
pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

/// Load the config from `custom_path`, or the platform default.
pub(super) fn load_config(custom_path: Option<&Path>) -> Config {
    match custom_path {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ConvertOutput {
    pub count: usize,
    pub colors: Vec<Color>,
}

#[derive(Serialize)]
pub(super) struct ClassifyOutput {
    pub count: usize,
    pub results: Vec<ClassifyJson>,
}

#[derive(Serialize)]
pub(super) struct ClassifyJson {
    pub input: String,
    pub format: Format,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub valid: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert colors to hex, RGB, HSL and HSV
    Convert {
        /// Colors such as "#003366", "036", "0,51,102" or "rgb(0, 51, 102)"
        #[arg(required = true, allow_hyphen_values = true)]
        colors: Vec<String>,
    },

    /// Show which notation each input is written in
    Classify {
        /// Raw color strings to inspect
        #[arg(required = true, allow_hyphen_values = true)]
        colors: Vec<String>,
    },

    /// Show current configuration and file path
    Config {
        /// Write a default config file instead of showing the current one
        #[arg(long)]
        init: bool,
        /// With --init, overwrite an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Flags shared by every subcommand.
pub struct Options {
    pub json: bool,
    pub config_path: Option<PathBuf>,
}

pub fn run(cmd: Command, opts: &Options) -> Result<()> {
    let custom_path = opts.config_path.as_deref();
    match cmd {
        Command::Convert { colors } => convert::cmd_convert(&colors, opts.json, custom_path),
        Command::Classify { colors } => classify::cmd_classify(&colors, opts.json),
        Command::Config { init: true, force } => config_cmd::cmd_config_init(force, custom_path),
        Command::Config { init: false, .. } => config_cmd::cmd_config(opts.json, custom_path),
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn kv_width_top_only() {
        let w = kv_width(&["Short:", "Longer key:"], &[]);
        // "Longer key:" = 11 + PADDING = 13
        assert_eq!(w, 13);
    }

    #[test]
    fn kv_width_indent_drives_width() {
        let w = kv_width(&["A:"], &["Very long indent key:"]);
        // "Very long indent key:" = 21 + PADDING + 2 = 25
        assert_eq!(w, 25);
    }

    #[test]
    fn values_align_across_levels() {
        let w = kv_width(&["Top:"], &["Indent:"]);
        let top = format_kv("Top:", "V", w);
        let indent = format!("  {:<width$}{}", "Indent:", "V", width = w - 2);
        assert_eq!(top.find('V'), indent.find('V'));
    }

    #[test]
    fn format_kv_exceeding_width() {
        assert_eq!(format_kv("ExactWidth:", "val", 10), "ExactWidth:val");
    }

    #[test]
    fn kv_width_empty_both() {
        assert_eq!(kv_width(&[], &[]), 0);
    }
}
