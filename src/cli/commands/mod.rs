//! CLI command handlers for the roadmap browser.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod list;
pub mod render;
pub mod show;
pub mod storage;

use roadmap_browser::config::Config;
use roadmap_browser::core::loader::{DataSource, SourceLocator};
use roadmap_browser::core::models::Roadmap;
use roadmap_browser::{debug, error};

/// Fetch and parse the roadmap document named by the configuration
///
/// # Errors
/// Returns a `✗`-prefixed message when the location is invalid, the fetch
/// fails, or the document is malformed
pub async fn fetch_roadmap(config: &Config) -> Result<Roadmap, String> {
    let source = SourceLocator::resolve(&config.source.base, &config.source.location)
        .map_err(|e| format!("✗ Invalid roadmap location: {e}"))?;
    debug!("Resolved roadmap source: {}", source.describe());

    let body = source.fetch().await.map_err(|e| {
        error!("Error loading roadmap: {e}");
        format!("✗ Failed to load {}: {e}", source.describe())
    })?;

    Roadmap::from_json(&body).map_err(|e| {
        error!("Error loading roadmap: {e}");
        format!("✗ Failed to parse {}: {e}", source.describe())
    })
}
