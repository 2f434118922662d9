//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate JSON file details from service/business orchestration.
//!
//! # Invariants
//! - `(category, name)` uniqueness is enforced on every write path.
//! - Repository APIs return semantic errors (`Duplicate`, `NotFound`) in
//!   addition to I/O and parse errors.

pub mod shortcut_repo;
