//! Nota use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for editing surfaces.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository transaction/guard contracts.
//! - Callers receive fresh `Nota` copies; their inputs are never mutated.

use crate::model::nota::{Nota, NotaId};
use crate::repo::nota_repo::{NotaRepository, RepoResult};

/// Use-case service wrapper for nota CRUD operations.
pub struct NotaService<R: NotaRepository> {
    repo: R,
}

impl<R: NotaRepository> NotaService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a brand-new nota and returns a copy carrying the assigned id.
    pub fn create_nota(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> RepoResult<Nota> {
        let nota = Nota::new(title, content);
        let id = self.repo.insert_nota(&nota)?;
        Ok(Nota { id, ..nota })
    }

    /// Saves the outcome of an editing session.
    ///
    /// # Contract
    /// - A never-persisted nota (id 0) is inserted.
    /// - A persisted nota updates its matching row; a stale id surfaces as
    ///   `RepoError::NotFound`.
    /// - Returns the persisted value, including a newly assigned id.
    pub fn save_nota(&mut self, nota: &Nota) -> RepoResult<Nota> {
        if nota.is_persisted() {
            self.repo.update_nota(nota)?;
            Ok(nota.clone())
        } else {
            let id = self.repo.insert_nota(nota)?;
            Ok(Nota {
                id,
                ..nota.clone()
            })
        }
    }

    /// Gets one nota by id.
    pub fn get_nota(&self, id: NotaId) -> RepoResult<Option<Nota>> {
        self.repo.get_nota(id)
    }

    /// Lists every stored nota.
    pub fn list_notas(&self) -> RepoResult<Vec<Nota>> {
        self.repo.list_notas()
    }

    /// Deletes a nota by id.
    pub fn delete_nota(&mut self, id: NotaId) -> RepoResult<()> {
        self.repo.delete_nota(id)
    }
}
