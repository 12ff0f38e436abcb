use crate::output::{Output, OutputFormat};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use media_tracker_config::{Config, PathManager};
use media_tracker_models::FilterMode;
use serde_json::json;
use std::path::Path;

pub fn run_config(cmd: crate::ConfigCommands, config_path: &Path, config: &Config, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(config_path, config, output),
        crate::ConfigCommands::Init { force } => {
            let log_file = PathManager::default().default_log_file();
            init_config(config_path, &log_file, force, output)
        }
        crate::ConfigCommands::Path => {
            match output.format() {
                OutputFormat::Human => output.info(config_path.display().to_string()),
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    output.json(&json!({ "config_file": config_path.display().to_string() }))
                }
            }
            Ok(())
        }
    }
}

fn show_config(config_path: &Path, config: &Config, output: &Output) -> Result<()> {
    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            if !config_path.exists() {
                output.warn(format!(
                    "Configuration file not found at {}; showing defaults. Run 'media-tracker config init' to create one.",
                    config_path.display()
                ));
            }
            println!("{}", settings_table(config_path, config));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let settings = serde_json::to_value(config).wrap_err("Failed to serialize configuration")?;
            output.json(&json!({
                "config_file": config_path.display().to_string(),
                "exists": config_path.exists(),
                "settings": settings
            }));
        }
    }
    Ok(())
}

/// Write defaults, with file logging pointed at `log_file` so diagnostics
/// stay off the terminal the shell is using.
fn init_config(config_path: &Path, log_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_path.exists() && !force {
        output.warn(format!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        ));
        return Ok(());
    }

    let mut config = Config::default();
    config.logging.file = Some(log_file.to_path_buf());
    config
        .save_to_file(config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_path.display(), e))?;

    tracing::info!(path = %config_path.display(), "Wrote default configuration");
    output.success(format!("Default configuration written to {}", config_path.display()));
    Ok(())
}

fn settings_table(config_path: &Path, config: &Config) -> Table {
    let filter_mode = match config.tracker.filter_mode {
        FilterMode::FirstRecognized => "first_recognized",
        FilterMode::All => "all",
    };
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(stderr)".to_string());

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_path.display().to_string())]);
    table.add_row(vec![Cell::new("tracker.filter_mode"), Cell::new(filter_mode)]);
    table.add_row(vec![Cell::new("display.table"), Cell::new(config.display.table)]);
    table.add_row(vec![Cell::new("logging.level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![Cell::new("logging.json"), Cell::new(config.logging.json)]);
    table.add_row(vec![Cell::new("logging.file"), Cell::new(log_file)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
