//! `quakemap config` - inspect and edit `config.ini`.
//!
//! Every listing shows the built-in default beside the stored value, so it is
//! obvious which settings the file actually overrides.

use clap::Subcommand;
use console::style;
use quakemap::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

const NOT_SET: &str = "(not set)";

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting and its default
    Get {
        /// Setting name as section.key, e.g. map.zoom
        key: String,
    },

    /// Store a setting (an empty value clears optional settings)
    Set {
        /// Setting name as section.key, e.g. map.zoom
        key: String,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Put a setting back to its built-in default
    Reset {
        /// Setting name as section.key, e.g. map.zoom
        key: String,
    },

    /// Show every setting next to its default
    List,

    /// Print where the config file lives
    Path,
}

/// One line of `config list`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SettingRow {
    key: ConfigKey,
    value: String,
    default: String,
}

impl SettingRow {
    fn new(key: ConfigKey, config: &ConfigFile, defaults: &ConfigFile) -> Self {
        Self {
            key,
            value: key.get(config),
            default: key.get(defaults),
        }
    }

    fn is_overridden(&self) -> bool {
        self.value != self.default
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        NOT_SET
    } else {
        value
    }
}

fn setting_rows(config: &ConfigFile) -> Vec<SettingRow> {
    let defaults = ConfigFile::default();
    ConfigKey::all()
        .iter()
        .map(|&key| SettingRow::new(key, config, &defaults))
        .collect()
}

fn lookup(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "no setting named '{}' (run 'quakemap config list' for the full set)",
            key
        ))
    })
}

pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let row = SettingRow::new(lookup(&key)?, &ConfigFile::load()?, &ConfigFile::default());
            println!("{}", display_value(&row.value));
            if row.is_overridden() {
                println!(
                    "{}",
                    style(format!("default: {}", display_value(&row.default))).dim()
                );
            }
            Ok(())
        }
        ConfigCommands::Set { key, value } => update(&key, |key, config| key.set(config, &value)),
        ConfigCommands::Reset { key } => update(&key, reset),
        ConfigCommands::List => {
            print_rows(&setting_rows(&ConfigFile::load()?));
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
    }
}

/// Loads the file, applies `change` to one key, and saves only on success.
fn update<F>(key: &str, change: F) -> Result<(), CliError>
where
    F: FnOnce(ConfigKey, &mut ConfigFile) -> Result<(), quakemap::config::ConfigError>,
{
    let key = lookup(key)?;
    let mut config = ConfigFile::load()?;
    let before = key.get(&config);

    change(key, &mut config)?;
    config.save()?;

    println!(
        "{}: {} -> {}",
        style(key.name()).bold(),
        display_value(&before),
        style(display_value(&key.get(&config))).green()
    );
    Ok(())
}

fn reset(key: ConfigKey, config: &mut ConfigFile) -> Result<(), quakemap::config::ConfigError> {
    key.set(config, &key.get(&ConfigFile::default()))
}

fn print_rows(rows: &[SettingRow]) {
    let width = rows
        .iter()
        .map(|row| row.key.name().len())
        .max()
        .unwrap_or(0);

    println!("{:<width$}  {:<32}  DEFAULT", "SETTING", "VALUE", width = width);
    for row in rows {
        let value = format!("{:<32}", display_value(&row.value));
        let value = if row.is_overridden() {
            style(value).yellow()
        } else {
            style(value)
        };
        println!(
            "{:<width$}  {}  {}",
            row.key.name(),
            value,
            style(display_value(&row.default)).dim(),
            width = width
        );
    }
    println!();
    println!("Overridden settings are highlighted. File: {}", config_file_path().display());
}
