//! `config` subcommand — show current configuration and file path, or write a default one.

use std::path::Path;

use super::{ColortoolsError, Config, ConfigOutput, Result, kv, kv_indent, kv_width, print_json};

pub(super) fn cmd_config(json: bool, custom_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(custom_path);
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());
    let validation = config.validate();

    if json {
        return print_json(&ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config,
            valid: validation.is_ok(),
        });
    }

    let w = kv_width(
        &["Config file:"],
        &["precision:", "hash_prefix:", "css_units:"],
    );

    match &config_path {
        Some(p) if config_exists => kv("Config file:", format_args!("{} (loaded)", p.display()), w),
        Some(p) => kv(
            "Config file:",
            format_args!("{} (not found, using defaults)", p.display()),
            w,
        ),
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("precision:", config.precision, w);
    kv_indent("hash_prefix:", config.hash_prefix, w);
    kv_indent("css_units:", config.css_units, w);

    if let Err(errors) = validation {
        println!();
        println!("Problems:");
        for e in &errors {
            println!("  {e}");
        }
    }
    Ok(())
}

/// Write the default settings to `custom_path` or the platform config path.
pub(super) fn cmd_config_init(force: bool, custom_path: Option<&Path>) -> Result<()> {
    let Some(path) = custom_path.map(|p| p.to_path_buf()).or_else(Config::path) else {
        return Err(ColortoolsError::Config("no config directory".into()));
    };
    if path.exists() && !force {
        return Err(ColortoolsError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(&path)?;
    log::info!("wrote default config to {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
