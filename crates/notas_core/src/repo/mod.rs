//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every write runs inside an explicit transaction bracket.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors; a fault is never collapsed into an empty result.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod nota_repo;
