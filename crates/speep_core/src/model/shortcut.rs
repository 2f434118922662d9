//! Shortcut domain model.
//!
//! # Responsibility
//! - Define the record persisted for every registered keyboard shortcut.
//! - Provide lookup helpers over the in-memory collection.
//!
//! # Invariants
//! - `(category, name)` is the only identity a record has.
//! - A collection never holds two records with the same `(category, name)`.
//! - Records are never edited in place; replacing a key means delete + add.

use serde::{Deserialize, Serialize};

/// One registered keyboard shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortcutRecord {
    /// Grouping label, e.g. `shell` or `vim`.
    pub category: String,
    /// Human-readable action name, unique inside its category.
    pub name: String,
    /// Key chord as typed by the user, e.g. `Ctrl+C`.
    pub key: String,
}

impl ShortcutRecord {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            key: key.into(),
        }
    }

    /// Returns whether this record owns the given composite key.
    pub fn is_identified_by(&self, category: &str, name: &str) -> bool {
        self.category == category && self.name == name
    }
}

/// Ordered list of shortcut records, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutCollection {
    records: Vec<ShortcutRecord>,
}

impl ShortcutCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShortcutRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<ShortcutRecord> {
        self.records
    }

    /// Index of the record identified by `(category, name)`, if any.
    pub fn position(&self, category: &str, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.is_identified_by(category, name))
    }

    pub fn contains(&self, category: &str, name: &str) -> bool {
        self.position(category, name).is_some()
    }

    /// Records whose `name` contains `needle` (case-sensitive).
    ///
    /// The iterator borrows the collection and is recomputed on every call.
    pub fn matching_name<'a>(
        &'a self,
        needle: &'a str,
    ) -> impl Iterator<Item = &'a ShortcutRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.name.contains(needle))
    }

    /// Records whose `key` contains `needle` (case-sensitive).
    pub fn matching_key<'a>(
        &'a self,
        needle: &'a str,
    ) -> impl Iterator<Item = &'a ShortcutRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.key.contains(needle))
    }

    /// Returns the first `(category, name)` pair that appears more than once.
    pub fn first_duplicate(&self) -> Option<&ShortcutRecord> {
        let mut seen = std::collections::HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .find(|record| !seen.insert((record.category.as_str(), record.name.as_str())))
    }

    pub(crate) fn push(&mut self, record: ShortcutRecord) {
        self.records.push(record);
    }

    pub(crate) fn remove(&mut self, index: usize) -> ShortcutRecord {
        self.records.remove(index)
    }
}

impl From<Vec<ShortcutRecord>> for ShortcutCollection {
    fn from(records: Vec<ShortcutRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ShortcutRecord> for ShortcutCollection {
    fn from_iter<I: IntoIterator<Item = ShortcutRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShortcutCollection {
    type Item = &'a ShortcutRecord;
    type IntoIter = std::slice::Iter<'a, ShortcutRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for ShortcutCollection {
    type Item = ShortcutRecord;
    type IntoIter = std::vec::IntoIter<ShortcutRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
