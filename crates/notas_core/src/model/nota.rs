//! Nota domain model.
//!
//! # Responsibility
//! - Define the single persisted entity: a plain text note.
//!
//! # Invariants
//! - `id == 0` marks a value that has never been persisted; the store assigns
//!   ids starting at 1 on insert.
//! - A non-zero `id` corresponds to at most one stored row at a time.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NotaId = i64;

/// Sentinel id for values that were never persisted.
pub const UNSAVED_ID: NotaId = 0;

/// A single text note.
///
/// Values are disconnected copies of stored rows: editing a `Nota` in memory
/// has no effect on the store until it is passed back through a repository
/// write, and concurrent changes are only observed by re-fetching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nota {
    /// `0` until the store assigns an id on insert.
    pub id: NotaId,
    /// Serialized as `titulo` to match the persisted schema naming.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Serialized as `conteudo` to match the persisted schema naming.
    #[serde(rename = "conteudo")]
    pub content: String,
}

impl Nota {
    /// Creates a not-yet-persisted nota.
    ///
    /// The id stays `UNSAVED_ID` until a repository insert assigns one.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Creates a nota carrying an already-assigned id.
    ///
    /// Used when rehydrating rows from storage; does not verify that the id
    /// actually exists in any store.
    pub fn with_id(id: NotaId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns whether this value has been assigned a store id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }
}
