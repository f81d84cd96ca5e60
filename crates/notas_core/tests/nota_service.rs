use notas_core::db::open_db_in_memory;
use notas_core::{Nota, NotaService, RepoError, SqliteNotaRepository};

#[test]
fn create_nota_returns_copy_with_assigned_id() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNotaRepository::try_new(&mut conn).unwrap();
    let mut service = NotaService::new(repo);

    let created = service.create_nota("groceries", "milk").unwrap();

    assert!(created.is_persisted());
    assert_eq!(created.title, "groceries");
    assert_eq!(created.content, "milk");

    let fetched = service.get_nota(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn save_nota_inserts_new_values() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNotaRepository::try_new(&mut conn).unwrap();
    let mut service = NotaService::new(repo);

    let draft = Nota::new("fresh", "never stored");
    let saved = service.save_nota(&draft).unwrap();

    assert!(saved.is_persisted());
    assert!(!draft.is_persisted(), "input must stay untouched");
    assert_eq!(saved.title, draft.title);
    assert_eq!(saved.content, draft.content);
    assert_eq!(service.list_notas().unwrap().len(), 1);
}

#[test]
fn save_nota_updates_already_persisted_values() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNotaRepository::try_new(&mut conn).unwrap();
    let mut service = NotaService::new(repo);

    let created = service.create_nota("v1", "original").unwrap();

    let mut edited = created.clone();
    edited.title = "v2".to_string();
    edited.content = "revised".to_string();
    let saved = service.save_nota(&edited).unwrap();

    assert_eq!(saved, edited);
    // Still one row: the save matched the existing id instead of inserting.
    assert_eq!(service.list_notas().unwrap().len(), 1);
    assert_eq!(service.get_nota(created.id).unwrap().unwrap(), edited);
}

#[test]
fn save_nota_with_stale_id_surfaces_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNotaRepository::try_new(&mut conn).unwrap();
    let mut service = NotaService::new(repo);

    let stale = Nota::with_id(9000, "ghost", "row was deleted elsewhere");
    let err = service.save_nota(&stale).unwrap_err();

    assert!(matches!(err, RepoError::NotFound(9000)));
}

#[test]
fn delete_nota_removes_row_through_service() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNotaRepository::try_new(&mut conn).unwrap();
    let mut service = NotaService::new(repo);

    let created = service.create_nota("to delete", "soon gone").unwrap();
    service.delete_nota(created.id).unwrap();

    assert!(service.get_nota(created.id).unwrap().is_none());
    assert!(service.list_notas().unwrap().is_empty());
}
