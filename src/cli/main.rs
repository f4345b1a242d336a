//! Command-line interface entry point for the roadmap browser

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::render::RenderOptions;
use roadmap_browser::config::Config;
use roadmap_browser::info;
use roadmap_browser::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Page components are single-threaded, so commands run on a current-thread runtime
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("✗ Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Render {
            tab,
            select,
            output,
            ..
        } => {
            let options = RenderOptions {
                tab,
                select,
                output,
            };
            runtime.block_on(commands::render::run(&config, options));
        }
        Command::List { .. } => {
            runtime.block_on(commands::list::run(&config, verbose));
        }
        Command::Show { course, .. } => {
            runtime.block_on(commands::show::run(&config, &course));
        }
        Command::Storage { subcommand } => {
            commands::storage::run(subcommand, &config);
        }
    }
}
