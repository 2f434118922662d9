//! Shortcut repository contracts and JSON file implementation.
//!
//! # Responsibility
//! - Provide load/save/add/find/delete APIs over the persisted collection.
//! - Keep file format and I/O details inside the core persistence boundary.
//!
//! # Invariants
//! - Every mutation is one full load + mutate + save cycle.
//! - Write paths never persist two records with the same `(category, name)`.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::shortcut::{ShortcutCollection, ShortcutRecord};
use crate::store::{ensure_parent_dir, StoreConfig, StoreError, StoreResult};
use log::{debug, error, info};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

/// Repository interface for the shortcut collection.
pub trait ShortcutRepository {
    /// Reads the full collection. A missing store is an empty collection.
    fn load(&self) -> StoreResult<ShortcutCollection>;

    /// Replaces the persisted collection with `collection`.
    fn save(&self, collection: &ShortcutCollection) -> StoreResult<()>;

    /// Appends `record`, rejecting an existing `(category, name)`.
    fn add(&self, record: ShortcutRecord) -> StoreResult<()>;

    /// Removes and returns the record identified by `(category, name)`.
    fn delete_one(&self, category: &str, name: &str) -> StoreResult<ShortcutRecord>;

    /// Drops the whole persisted collection.
    fn delete_all(&self) -> StoreResult<()>;

    /// Records whose name contains `needle`, in stored order.
    ///
    /// Every call reloads the store; the returned iterator filters lazily.
    fn find_by_name(&self, needle: &str) -> StoreResult<impl Iterator<Item = ShortcutRecord>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(move |record| record.name.contains(needle)))
    }

    /// Records whose key chord contains `needle`, in stored order.
    fn find_by_keyword(&self, needle: &str) -> StoreResult<impl Iterator<Item = ShortcutRecord>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(move |record| record.key.contains(needle)))
    }
}

/// Repository persisting the collection as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonShortcutRepository {
    config: StoreConfig,
}

impl JsonShortcutRepository {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn store_path(&self) -> &Path {
        self.config.store_path()
    }
}

impl ShortcutRepository for JsonShortcutRepository {
    fn load(&self) -> StoreResult<ShortcutCollection> {
        let path = self.store_path();
        let raw = match std::fs::read(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=store_load module=repo status=ok source=missing path={}",
                    path.display()
                );
                return Ok(ShortcutCollection::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error error_code=read_failed path={} error={}",
                    path.display(),
                    err
                );
                return Err(StoreError::io(path, err));
            }
        };

        let collection = parse_collection(path, &raw).inspect_err(|err| {
            error!(
                "event=store_load module=repo status=error error_code={} path={}",
                err.code(),
                path.display()
            );
        })?;
        debug!(
            "event=store_load module=repo status=ok source=file count={}",
            collection.len()
        );
        Ok(collection)
    }

    fn save(&self, collection: &ShortcutCollection) -> StoreResult<()> {
        let started_at = Instant::now();
        let path = self.store_path();

        match write_atomically(path, collection) {
            Ok(()) => {
                info!(
                    "event=store_save module=repo status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    collection.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=repo status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn add(&self, record: ShortcutRecord) -> StoreResult<()> {
        let mut collection = self.load()?;
        if collection.contains(&record.category, &record.name) {
            info!("event=shortcut_add module=repo status=rejected error_code=duplicate");
            return Err(StoreError::Duplicate {
                category: record.category,
                name: record.name,
            });
        }

        collection.push(record);
        self.save(&collection)
    }

    fn delete_one(&self, category: &str, name: &str) -> StoreResult<ShortcutRecord> {
        let mut collection = self.load()?;
        let Some(index) = collection.position(category, name) else {
            info!("event=shortcut_delete module=repo status=rejected error_code=not_found");
            return Err(StoreError::NotFound {
                category: category.to_string(),
                name: name.to_string(),
            });
        };

        let removed = collection.remove(index);
        self.save(&collection)?;
        Ok(removed)
    }

    fn delete_all(&self) -> StoreResult<()> {
        let path = self.store_path();
        match std::fs::remove_file(path) {
            Ok(()) => {
                info!("event=store_clear module=repo status=ok removed=true");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("event=store_clear module=repo status=ok removed=false");
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_clear module=repo status=error error_code=remove_failed path={} error={}",
                    path.display(),
                    err
                );
                Err(StoreError::io(path, err))
            }
        }
    }
}

fn parse_collection(path: &Path, raw: &[u8]) -> StoreResult<ShortcutCollection> {
    // Earlier releases created the store as an empty file on first run.
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(ShortcutCollection::new());
    }

    let collection: ShortcutCollection =
        serde_json::from_slice(raw).map_err(|err| StoreError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    if let Some(duplicate) = collection.first_duplicate() {
        return Err(StoreError::Parse {
            path: path.to_path_buf(),
            message: format!(
                "duplicate shortcut `{}` in category `{}`",
                duplicate.name, duplicate.category
            ),
        });
    }

    Ok(collection)
}

fn write_atomically(path: &Path, collection: &ShortcutCollection) -> StoreResult<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut payload =
        serde_json::to_vec_pretty(collection).map_err(|err| StoreError::io(path, err.into()))?;
    payload.push(b'\n');

    let mut staged = NamedTempFile::new_in(dir).map_err(|err| StoreError::io(dir, err))?;
    staged
        .write_all(&payload)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|err| StoreError::io(staged.path(), err))?;
    staged
        .persist(path)
        .map_err(|err| StoreError::io(path, err.error))?;
    Ok(())
}
