//! Shortcut use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for front ends (CLI today).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository uniqueness/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::shortcut::{ShortcutCollection, ShortcutRecord};
use crate::repo::shortcut_repo::ShortcutRepository;
use crate::store::StoreResult;

/// Use-case service wrapper for shortcut registry operations.
pub struct ShortcutService<R: ShortcutRepository> {
    repo: R,
}

impl<R: ShortcutRepository> ShortcutService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every registered shortcut in stored order.
    pub fn list_all(&self) -> StoreResult<ShortcutCollection> {
        self.repo.load()
    }

    /// Registers a new shortcut.
    ///
    /// # Contract
    /// - Fails with `StoreError::Duplicate` when `(category, name)` exists;
    ///   the stored collection is left untouched in that case.
    pub fn register(
        &self,
        category: impl Into<String>,
        name: impl Into<String>,
        key: impl Into<String>,
    ) -> StoreResult<ShortcutRecord> {
        let record = ShortcutRecord::new(category, name, key);
        self.repo.add(record.clone())?;
        Ok(record)
    }

    /// Lazily yields shortcuts whose name contains `needle`.
    pub fn find_by_name<'a>(
        &'a self,
        needle: &'a str,
    ) -> StoreResult<impl Iterator<Item = ShortcutRecord> + 'a>
    where
        R: 'a,
    {
        self.repo.find_by_name(needle)
    }

    /// Lazily yields shortcuts whose key chord contains `needle`.
    pub fn find_by_keyword<'a>(
        &'a self,
        needle: &'a str,
    ) -> StoreResult<impl Iterator<Item = ShortcutRecord> + 'a>
    where
        R: 'a,
    {
        self.repo.find_by_keyword(needle)
    }

    /// Removes one shortcut by exact `(category, name)`.
    pub fn remove(&self, category: &str, name: &str) -> StoreResult<ShortcutRecord> {
        self.repo.delete_one(category, name)
    }

    /// Removes every shortcut.
    pub fn clear(&self) -> StoreResult<()> {
        self.repo.delete_all()
    }
}
