//! Storage location and the unified error surface of the persistence layer.
//!
//! # Responsibility
//! - Resolve where the shortcut collection lives on disk.
//! - Carry the resolved location into repositories as explicit configuration.
//! - Define the single error type every persistence operation returns.
//!
//! # Invariants
//! - Environment variables are read only while resolving a `StoreConfig`;
//!   repositories never consult the environment.
//! - A missing storage file is never reported as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

mod locate;

pub use locate::{
    ensure_parent_dir, resolve_store_path, store_path_from_env, STORE_DIR_NAME, STORE_FILE_NAME,
};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by every store and repository operation.
#[derive(Debug)]
pub enum StoreError {
    /// File or directory access failed.
    Io { path: PathBuf, source: io::Error },
    /// Storage file exists but does not hold a valid shortcut collection.
    Parse { path: PathBuf, message: String },
    /// A record with the same `(category, name)` is already registered.
    Duplicate { category: String, name: String },
    /// No record matches the requested `(category, name)`.
    NotFound { category: String, name: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_error",
            Self::Parse { .. } => "parse_error",
            Self::Duplicate { .. } => "duplicate",
            Self::NotFound { .. } => "not_found",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access `{}`: {source}", path.display())
            }
            Self::Parse { path, message } => write!(
                f,
                "shortcut file `{}` is not a valid shortcut list: {message}",
                path.display()
            ),
            Self::Duplicate { category, name } => write!(
                f,
                "shortcut `{name}` already exists in category `{category}`"
            ),
            Self::NotFound { category, name } => {
                write!(f, "no shortcut `{name}` in category `{category}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
            Self::Duplicate { .. } => None,
            Self::NotFound { .. } => None,
        }
    }
}

/// Resolved storage configuration handed to repository constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    store_path: PathBuf,
}

impl StoreConfig {
    /// Resolves the default location from `XDG_CONFIG_HOME` / `HOME`.
    ///
    /// # Side effects
    /// - Creates the `speep` config directory when it is missing.
    pub fn from_env() -> StoreResult<Self> {
        Ok(Self {
            store_path: resolve_store_path()?,
        })
    }

    /// Uses an explicit storage file. The parent directory is created lazily
    /// on the first save.
    pub fn at(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}
