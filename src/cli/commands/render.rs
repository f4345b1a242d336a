//! Render command handler
//!
//! Runs the page once: activates the requested tab, loads the roadmap,
//! optionally opens a course's detail view, and writes the resulting HTML.

use roadmap_browser::config::Config;
use roadmap_browser::core::app::{App, AppSettings};
use roadmap_browser::core::loader::LoadOutcome;
use roadmap_browser::{info, verbose};
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when only an output directory is known
const INDEX_FILE: &str = "index.html";

/// Options for a single render
#[derive(Debug, Default)]
pub struct RenderOptions {
    /// Address fragment naming the tab to open
    pub tab: Option<String>,
    /// Course whose detail view should be open
    pub select: Option<String>,
    /// Explicit output file
    pub output: Option<PathBuf>,
}

/// Run the render command.
pub async fn run(config: &Config, options: RenderOptions) {
    match render_page(config, &options).await {
        Ok(path) => println!("✓ Page rendered: {}", path.display()),
        Err(e) => eprintln!("{e}"),
    }
}

/// Render the page and write it to disk, returning the written path
///
/// A failed load still produces a page: it shows the load error message in
/// place of the cards.
///
/// # Errors
/// Returns a `✗`-prefixed message if the selected course does not exist or
/// the page cannot be rendered or written
pub async fn render_page(config: &Config, options: &RenderOptions) -> Result<PathBuf, String> {
    let fragment = options.tab.as_deref().unwrap_or("");
    let mut app = App::new(AppSettings::from(config), fragment);

    let outcome = app.start().await;
    match &outcome {
        LoadOutcome::Loaded {
            specializations,
            courses,
        } => verbose!("Rendered {specializations} cards with {courses} courses"),
        LoadOutcome::Failed(err) => eprintln!("✗ Roadmap failed to load: {err}"),
        LoadOutcome::AlreadyAttempted => {}
    }

    if let Some(name) = &options.select {
        let id = app
            .loader()
            .last_loaded()
            .and_then(|roadmap| roadmap.find_course(name))
            .map(|(id, _)| id)
            .ok_or_else(|| format!("✗ No course named '{name}' to select"))?;
        app.click_course(id);
    }

    let html = app
        .page_html()
        .map_err(|e| format!("✗ Failed to render page: {e}"))?;

    let path = output_path(options.output.as_deref(), &config.site.output_dir);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create output directory {}: {e}", parent.display())
            })?;
        }
    }
    fs::write(&path, html).map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
    info!("Page written to {}", path.display());

    Ok(path)
}

/// Explicit output file, or `index.html` inside the output directory
fn output_path(output: Option<&Path>, output_dir: &str) -> PathBuf {
    output.map_or_else(|| Path::new(output_dir).join(INDEX_FILE), Path::to_path_buf)
}
