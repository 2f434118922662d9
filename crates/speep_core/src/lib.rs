//! Core domain logic for speep, the personal shortcut-key registry.
//! This crate is the single source of truth for registry invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::init_logging;
pub use model::shortcut::{ShortcutCollection, ShortcutRecord};
pub use repo::shortcut_repo::{JsonShortcutRepository, ShortcutRepository};
pub use service::shortcut_service::ShortcutService;
pub use store::{resolve_store_path, StoreConfig, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
