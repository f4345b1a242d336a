//! CLI argument definitions for the roadmap browser

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use roadmap_browser::config::ConfigOverrides;
use roadmap_browser::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `base`, `tabs`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum StorageSubcommand {
    /// Print the JSON value stored under KEY
    Get {
        /// Storage key
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Store VALUE under KEY. VALUE is parsed as JSON, or stored as a string otherwise.
    Set {
        /// Storage key
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to store
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Delete the entry under KEY
    Remove {
        /// Storage key
        #[arg(value_name = "KEY")]
        key: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Load the roadmap and render the page as HTML.
    ///
    /// Writes `index.html` into the output directory unless `--output` names a file.
    Render {
        /// Document location, relative to the source base (defaults to config `location`)
        #[arg(long, value_name = "LOCATION")]
        source: Option<String>,

        /// Tab to open, as an address fragment (e.g. `#roadmap`)
        #[arg(long, value_name = "FRAGMENT")]
        tab: Option<String>,

        /// Open the detail view for the course with this name
        #[arg(long, value_name = "COURSE")]
        select: Option<String>,

        /// Output file path (defaults to `<output_dir>/index.html`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List every specialization and its courses.
    List {
        /// Document location, relative to the source base (defaults to config `location`)
        #[arg(long, value_name = "LOCATION")]
        source: Option<String>,
    },
    /// Show the details of one course.
    Show {
        /// Course name
        #[arg(value_name = "COURSE")]
        course: String,

        /// Document location, relative to the source base (defaults to config `location`)
        #[arg(long, value_name = "LOCATION")]
        source: Option<String>,
    },
    /// Inspect the persisted key-value store.
    Storage {
        #[command(subcommand)]
        subcommand: StorageSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "roadmap",
    about = "Roadmap browser command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config source base (directory or URL)
    #[arg(long = "config-base", value_name = "BASE")]
    pub config_base: Option<String>,

    /// Override config source base (short form)
    #[arg(long = "base", value_name = "BASE")]
    pub base: Option<String>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override config storage file
    #[arg(long = "storage-file", value_name = "PATH")]
    pub storage_file: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--base`) take precedence over long-form flags
    /// (e.g., `--config-base`) when both are provided. A `--source` given to a
    /// document subcommand overrides the configured location.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let source_location = match &self.command {
            Command::Render { source, .. }
            | Command::List { source }
            | Command::Show { source, .. } => source.clone(),
            Command::Config { .. } | Command::Storage { .. } => None,
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            source_base: self.base.clone().or_else(|| self.config_base.clone()),
            source_location,
            output_dir: self
                .out_dir
                .as_ref()
                .or(self.config_out_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            storage_file: self
                .storage_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
