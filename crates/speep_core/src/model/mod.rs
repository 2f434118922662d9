//! Domain model for registered keyboard shortcuts.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Records are identified only by their `(category, name)` pair.

pub mod shortcut;
