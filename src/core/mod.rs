//! Core page components and domain types

pub mod app;
pub mod error;
pub mod events;
pub mod history;
pub mod loader;
pub mod modal;
pub mod models;
pub mod render;
pub mod router;
pub mod storage;
pub mod viewport;

/// Returns the current version of the roadmap browser crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
