use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Table};
use filmstats_config::{Config, PathManager};
use std::path::Path;

pub fn run_config(cmd: ConfigCommands, config: &Config, config_path: &Path, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config, config_path, output),
        ConfigCommands::Init { force } => init_config(config_path, force, output),
    }
}

fn show_config(config: &Config, config_path: &Path, output: &Output) -> Result<()> {
    if !config_path.exists() {
        output.warn(format!(
            "Configuration file not found at {}; showing defaults",
            config_path.display()
        ));
    }

    if output.format() != OutputFormat::Human {
        output.result(&serde_json::to_value(config)?);
        return Ok(());
    }

    let data_dir = config
        .store
        .data_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| format!("{} (default)", PathManager::default().data_dir().display()));

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Config File").add_attribute(Attribute::Bold),
        Cell::new(config_path.display().to_string()),
    ]);
    table.add_row(vec!["Data directory".to_string(), data_dir]);
    table.add_row(vec!["Films collection".to_string(), config.store.films_collection.clone()]);
    table.add_row(vec!["Reviews collection".to_string(), config.store.reviews_collection.clone()]);
    table.add_row(vec!["Store timeout".to_string(), format!("{}s", config.store.timeout_secs)]);
    table.add_row(vec!["Log level".to_string(), config.logging.level.clone()]);
    table.add_row(vec![
        "Log file".to_string(),
        config
            .logging
            .file
            .as_ref()
            .map(|f| f.display().to_string())
            .unwrap_or_else(|| "stderr".to_string()),
    ]);
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    output.table(&table);
    Ok(())
}

fn init_config(config_path: &Path, force: bool, output: &Output) -> Result<()> {
    if config_path.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
        return Ok(());
    }

    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create directories: {}", e))?;

    let config = Config::for_paths(&path_manager);
    config
        .save_to_file(config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_path.display(), e))?;

    output.success(format!("Configuration written to {}", config_path.display()));
    output.info(format!(
        "Place {}.json and {}.json in {}",
        config.store.films_collection,
        config.store.reviews_collection,
        path_manager.data_dir().display()
    ));
    Ok(())
}
