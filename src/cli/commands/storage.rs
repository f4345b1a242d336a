//! Storage command handler

use crate::args::StorageSubcommand;
use roadmap_browser::config::Config;
use roadmap_browser::core::storage::{FileBackend, LocalStore};
use serde_json::Value;

/// Dispatch storage subcommands against the configured store file
pub fn run(subcommand: StorageSubcommand, config: &Config) {
    let mut store = LocalStore::new(FileBackend::new(&config.storage.file));

    match subcommand {
        StorageSubcommand::Get { key } => match store.get_raw(&key) {
            Some(raw) => println!("{raw}"),
            None => println!("(not set)"),
        },
        StorageSubcommand::Set { key, value } => {
            store.set(&key, &parse_value(&value));
            println!("✓ Stored {key}");
        }
        StorageSubcommand::Remove { key } => {
            store.remove(&key);
            println!("✓ Removed {key}");
        }
    }
}

/// Parse a CLI value as JSON, falling back to a plain string
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), Value::from(42));
        assert_eq!(parse_value("[1,2]"), serde_json::json!([1, 2]));
        assert_eq!(parse_value("dark"), Value::String("dark".to_string()));
    }
}
