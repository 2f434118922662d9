//! Storage path resolution.
//!
//! # Responsibility
//! - Derive the shortcut file path from XDG-style environment configuration.
//! - Create missing containing directories before callers touch the file.
//!
//! # Invariants
//! - A non-empty `XDG_CONFIG_HOME` wins over `HOME`.
//! - The file name and sub-directory are fixed: `speep/shortcuts.json`.

use super::{StoreError, StoreResult};
use log::{debug, error, info};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const STORE_DIR_NAME: &str = "speep";
pub const STORE_FILE_NAME: &str = "shortcuts.json";

/// Computes the storage file path without touching the filesystem.
///
/// Returns `None` when neither variable carries a usable value.
pub fn store_path_from_env(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    let config_root = match xdg_config_home.filter(|value| !value.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(home.filter(|value| !value.is_empty())?).join(".config"),
    };
    Some(config_root.join(STORE_DIR_NAME).join(STORE_FILE_NAME))
}

/// Resolves the storage file path from the process environment.
///
/// # Side effects
/// - Creates `<config root>/speep` when it does not exist.
/// - Emits `store_resolve` logging events.
///
/// # Errors
/// - `StoreError::Io` when neither `XDG_CONFIG_HOME` nor `HOME` is set, or
///   when the directory cannot be created.
pub fn resolve_store_path() -> StoreResult<PathBuf> {
    let started_at = Instant::now();
    let path = store_path_from_env(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
    .ok_or_else(|| {
        error!("event=store_resolve module=store status=error error_code=no_config_root");
        StoreError::io(
            format!("$HOME/.config/{STORE_DIR_NAME}"),
            io::Error::new(
                io::ErrorKind::NotFound,
                "neither XDG_CONFIG_HOME nor HOME is set",
            ),
        )
    })?;

    ensure_parent_dir(&path)?;
    info!(
        "event=store_resolve module=store status=ok duration_ms={} path={}",
        started_at.elapsed().as_millis(),
        path.display()
    );
    Ok(path)
}

/// Creates the directory that will contain `path`, if any is missing.
pub fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
    let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }

    debug!(
        "event=store_mkdir module=store status=start dir={}",
        parent.display()
    );
    std::fs::create_dir_all(parent).map_err(|err| {
        error!(
            "event=store_mkdir module=store status=error error_code=mkdir_failed dir={} error={}",
            parent.display(),
            err
        );
        StoreError::io(parent, err)
    })
}
