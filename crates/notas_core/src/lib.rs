//! Core domain logic for the notas manager.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::nota::{Nota, NotaId, UNSAVED_ID};
pub use repo::nota_repo::{NotaRepository, RepoError, RepoResult, SqliteNotaRepository};
pub use service::nota_service::NotaService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
