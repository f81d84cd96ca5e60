//! Domain model for the notas manager.
//!
//! # Responsibility
//! - Define the canonical record persisted by the storage layer.
//!
//! # Invariants
//! - A `Nota` with id `0` has never been persisted.
//! - Equality is structural over all fields, never identity-based.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod nota;
