//! Configuration module for the roadmap browser

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the configuration directory
const DIR_VARIABLE: &str = "$ROADMAP";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Data source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base directory or URL the document location is relative to
    #[serde(default)]
    pub base: String,
    /// Document location (relative path or URL)
    #[serde(default)]
    pub location: String,
}

/// Page layout configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Tab identifiers in display order
    #[serde(default)]
    pub tabs: Vec<String>,
    /// Tab shown when the address has no fragment
    #[serde(default)]
    pub default_tab: String,
    /// Tab whose panel holds the roadmap cards
    #[serde(default)]
    pub roadmap_tab: String,
    /// Directory rendered pages are written to
    #[serde(default)]
    pub output_dir: String,
}

/// Key-value storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the store
    #[serde(default)]
    pub file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Data source settings
    #[serde(default)]
    pub source: SourceConfig,
    /// Page settings
    #[serde(default)]
    pub site: SiteConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override data source base
    pub source_base: Option<String>,
    /// Override data source location
    pub source_location: Option<String>,
    /// Override rendered page output directory
    pub output_dir: Option<String>,
    /// Override storage file
    pub storage_file: Option<String>,
}

/// Copy `default` into `value` when `value` is empty; returns whether it changed
fn fill_if_empty(value: &mut String, default: &str) -> bool {
    if value.is_empty() && !default.is_empty() {
        default.clone_into(value);
        true
    } else {
        false
    }
}

fn parse_tab_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tab| !tab.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl Config {
    /// Get the `$ROADMAP` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/roadmap`
    /// - macOS: `~/Library/Application Support/roadmap`
    /// - Windows: `%APPDATA%\roadmap`
    #[must_use]
    pub fn get_roadmap_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roadmap")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// updated, so upgrading adds new settings without touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = fill_if_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_if_empty(&mut self.logging.file, &defaults.logging.file);

        changed |= fill_if_empty(&mut self.source.base, &defaults.source.base);
        changed |= fill_if_empty(&mut self.source.location, &defaults.source.location);

        if self.site.tabs.is_empty() && !defaults.site.tabs.is_empty() {
            self.site.tabs.clone_from(&defaults.site.tabs);
            changed = true;
        }
        changed |= fill_if_empty(&mut self.site.default_tab, &defaults.site.default_tab);
        changed |= fill_if_empty(&mut self.site.roadmap_tab, &defaults.site.roadmap_tab);
        changed |= fill_if_empty(&mut self.site.output_dir, &defaults.site.output_dir);

        changed |= fill_if_empty(&mut self.storage.file, &defaults.storage.file);

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; the configuration file is not modified.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(base) = &overrides.source_base {
            self.source.base.clone_from(base);
        }
        if let Some(location) = &overrides.source_location {
            self.source.location.clone_from(location);
        }
        if let Some(output_dir) = &overrides.output_dir {
            self.site.output_dir.clone_from(output_dir);
        }
        if let Some(storage_file) = &overrides.storage_file {
            self.storage.file.clone_from(storage_file);
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_roadmap_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ROADMAP` in a string to the configuration directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let roadmap_dir = Self::get_roadmap_dir();
            value.replace(DIR_VARIABLE, roadmap_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings, `false`, empty
    /// lists). `$ROADMAP` is expanded in path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.source.base = Self::expand_variables(&config.source.base);
        config.source.location = Self::expand_variables(&config.source.location);
        config.site.output_dir = Self::expand_variables(&config.site.output_dir);
        config.storage.file = Self::expand_variables(&config.storage.file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user file, creating it from defaults on first run
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults if missing
    ///
    /// An existing file gets any newly added default fields merged in and is
    /// saved back when that changed something.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        if let Ok(content) = fs::read_to_string(config_file) {
            if let Ok(mut config) = Self::from_toml(&content) {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                return config;
            }
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, serialization
    /// fails, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, serialization
    /// fails, or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`, `file`, `verbose`: logging
    /// - `base`, `location`: data source
    /// - `tabs` (comma-separated), `default_tab`, `roadmap_tab`, `output_dir`: page
    /// - `storage_file`: key-value store file
    ///
    /// Hyphenated spellings (`default-tab`, `output-dir`, ...) are accepted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "base" => Some(self.source.base.clone()),
            "location" => Some(self.source.location.clone()),
            "tabs" => Some(self.site.tabs.join(",")),
            "default_tab" | "default-tab" => Some(self.site.default_tab.clone()),
            "roadmap_tab" | "roadmap-tab" => Some(self.site.roadmap_tab.clone()),
            "output_dir" | "output-dir" => Some(self.site.output_dir.clone()),
            "storage_file" | "storage-file" => Some(self.storage.file.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g. "maybe" for `verbose`, an unknown level, an empty tab list)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                if crate::logger::Level::parse(value).is_none() {
                    return Err(format!("Invalid log level: '{value}'"));
                }
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "base" => self.source.base = value.to_string(),
            "location" => self.source.location = value.to_string(),
            "tabs" => {
                let tabs = parse_tab_list(value);
                if tabs.is_empty() {
                    return Err("Tab list must name at least one tab".to_string());
                }
                self.site.tabs = tabs;
            }
            "default_tab" | "default-tab" => self.site.default_tab = value.to_string(),
            "roadmap_tab" | "roadmap-tab" => self.site.roadmap_tab = value.to_string(),
            "output_dir" | "output-dir" => self.site.output_dir = value.to_string(),
            "storage_file" | "storage-file" => self.storage.file = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "base" => self.source.base.clone_from(&defaults.source.base),
            "location" => self.source.location.clone_from(&defaults.source.location),
            "tabs" => self.site.tabs.clone_from(&defaults.site.tabs),
            "default_tab" | "default-tab" => {
                self.site.default_tab.clone_from(&defaults.site.default_tab);
            }
            "roadmap_tab" | "roadmap-tab" => {
                self.site.roadmap_tab.clone_from(&defaults.site.roadmap_tab);
            }
            "output_dir" | "output-dir" => {
                self.site.output_dir.clone_from(&defaults.site.output_dir);
            }
            "storage_file" | "storage-file" => {
                self.storage.file.clone_from(&defaults.storage.file);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the user file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when there is
    /// no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[source]")?;
        writeln!(f, "  base = \"{}\"", self.source.base)?;
        writeln!(f, "  location = \"{}\"", self.source.location)?;

        writeln!(f, "\n[site]")?;
        writeln!(f, "  tabs = \"{}\"", self.site.tabs.join(","))?;
        writeln!(f, "  default_tab = \"{}\"", self.site.default_tab)?;
        writeln!(f, "  roadmap_tab = \"{}\"", self.site.roadmap_tab)?;
        writeln!(f, "  output_dir = \"{}\"", self.site.output_dir)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  file = \"{}\"", self.storage.file)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_list() {
        assert_eq!(parse_tab_list(" home, css ,,js "), ["home", "css", "js"]);
        assert!(parse_tab_list(" , ").is_empty());
    }

    #[test]
    fn test_fill_if_empty() {
        let mut value = String::new();
        assert!(fill_if_empty(&mut value, "x"));
        assert_eq!(value, "x");
        assert!(!fill_if_empty(&mut value, "y"));
        assert_eq!(value, "x");
    }

    #[test]
    fn test_expand_variables_leaves_plain_values() {
        assert_eq!(Config::expand_variables("./out"), "./out");
        assert!(!Config::expand_variables("$ROADMAP/out").contains(DIR_VARIABLE));
    }
}
