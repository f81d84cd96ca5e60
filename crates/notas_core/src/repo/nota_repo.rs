//! Nota repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `notas` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Writes execute inside an explicit transaction; a failed statement leaves
//!   no partial row state behind.
//! - "No row matched" surfaces as `RepoError::NotFound`, distinct from
//!   transport failures (`RepoError::Db`).
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::{migrations, DbError};
use crate::model::nota::{Nota, NotaId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTA_SELECT_SQL: &str = "SELECT id, titulo, conteudo FROM notas";

const REQUIRED_TABLE: &str = "notas";
const REQUIRED_COLUMNS: [&str; 3] = ["id", "titulo", "conteudo"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for nota persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NotaId),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "nota not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version is {actual_version}, expected {expected_version}; \
                 open connections through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for nota CRUD operations.
///
/// Write operations take `&mut self` because they run inside an explicit
/// transaction on the borrowed connection.
pub trait NotaRepository {
    /// Inserts a new row and returns the store-assigned id.
    ///
    /// Any id already set on `nota` is ignored; the caller's value is not
    /// mutated.
    fn insert_nota(&mut self, nota: &Nota) -> RepoResult<NotaId>;
    /// Replaces title and content of the row matching `nota.id`.
    fn update_nota(&mut self, nota: &Nota) -> RepoResult<()>;
    /// Removes the row matching `id`.
    fn delete_nota(&mut self, id: NotaId) -> RepoResult<()>;
    /// Gets one nota by id.
    fn get_nota(&self, id: NotaId) -> RepoResult<Option<Nota>>;
    /// Lists every stored nota.
    fn list_notas(&self) -> RepoResult<Vec<Nota>>;
}

/// SQLite-backed nota repository over a caller-owned connection.
pub struct SqliteNotaRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteNotaRepository<'conn> {
    /// Constructs a repository after verifying the connection is ready.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration known to this binary.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not contain the storage this repository queries.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NotaRepository for SqliteNotaRepository<'_> {
    fn insert_nota(&mut self, nota: &Nota) -> RepoResult<NotaId> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO notas (titulo, conteudo) VALUES (?1, ?2);",
            params![nota.title.as_str(), nota.content.as_str()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    fn update_nota(&mut self, nota: &Nota) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE notas SET titulo = ?1, conteudo = ?2 WHERE id = ?3;",
            params![nota.title.as_str(), nota.content.as_str(), nota.id],
        )?;
        tx.commit()?;

        if changed == 0 {
            return Err(RepoError::NotFound(nota.id));
        }

        Ok(())
    }

    fn delete_nota(&mut self, id: NotaId) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute("DELETE FROM notas WHERE id = ?1;", [id])?;
        tx.commit()?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_nota(&self, id: NotaId) -> RepoResult<Option<Nota>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTA_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_nota_row(row)?));
        }

        Ok(None)
    }

    fn list_notas(&self) -> RepoResult<Vec<Nota>> {
        // Deliberately no ORDER BY: rows come back in storage-native order
        // and callers must not rely on any particular one.
        let mut stmt = self.conn.prepare(&format!("{NOTA_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut notas = Vec::new();

        while let Some(row) = rows.next()? {
            notas.push(parse_nota_row(row)?);
        }

        Ok(notas)
    }
}

fn parse_nota_row(row: &Row<'_>) -> RepoResult<Nota> {
    Ok(Nota {
        id: row.get("id")?,
        title: row.get("titulo")?,
        content: row.get("conteudo")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, REQUIRED_TABLE)? {
        return Err(RepoError::MissingRequiredTable(REQUIRED_TABLE));
    }

    for column in REQUIRED_COLUMNS {
        if !column_exists(conn, REQUIRED_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: REQUIRED_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let found: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(found == 1)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let found: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2;",
        params![table, column],
        |row| row.get(0),
    )?;
    Ok(found > 0)
}
