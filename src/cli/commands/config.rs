//! Config command handler

use crate::args::ConfigSubcommand;
use roadmap_browser::config::Config;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// Exits with status 1 when a set/unset/reset fails.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => Ok(show(config, None)),
        Some(ConfigSubcommand::Get { key }) => Ok(show(config, key.as_deref())),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    };

    match result {
        Ok(message) => print!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Text for `config get`: one value, or the whole configuration
fn show(config: &Config, key: Option<&str>) -> String {
    match key {
        Some(k) => config
            .get(k)
            .map_or_else(|| format!("Unknown config key: '{k}'\n"), |value| format!("{value}\n")),
        None => format!("\n=== Configuration ===\n\n{config}"),
    }
}

/// Handle the config set subcommand
fn set(config: &mut Config, key: &str, value: &str) -> Result<String, String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    Ok(format!("✓ Set {key} = {value}\n"))
}

/// Handle the config unset subcommand
fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<String, String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    Ok(format!("✓ Reset {key} to default\n"))
}

/// Handle the config reset subcommand, asking for confirmation on `input`
fn reset(input: &mut impl BufRead) -> Result<String, String> {
    if !Config::get_config_file_path().exists() {
        return Ok("✓ Config is already at defaults\n".to_string());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if !confirmed(input) {
        return Ok("✗ Reset cancelled\n".to_string());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    Ok("✓ Config reset to defaults\n".to_string())
}

/// Read one line and accept `y` or `yes` in any case
fn confirmed(input: &mut impl BufRead) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed() {
        assert!(confirmed(&mut "y\n".as_bytes()));
        assert!(confirmed(&mut "YES\n".as_bytes()));
        assert!(!confirmed(&mut "n\n".as_bytes()));
        assert!(!confirmed(&mut "".as_bytes()));
    }

    #[test]
    fn test_show_single_key() {
        let config = Config::from_defaults();
        assert_eq!(show(&config, Some("default_tab")), "home\n");
        assert!(show(&config, Some("nope")).starts_with("Unknown config key"));
        assert!(show(&config, None).contains("[site]"));
    }
}
