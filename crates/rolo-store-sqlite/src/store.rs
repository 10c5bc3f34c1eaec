//! [`SqliteStore`]: the connection to the contacts database file.

use std::path::{Path, PathBuf};

use rolo_core::{Contact, ContactId, Field, NewContact};
use rusqlite::Connection;
use tracing::{debug, info};

use crate::{Error, Result, schema::SCHEMA};

/// File name used when no database path is configured.
pub const DEFAULT_PATH: &str = "contacts.sqlite";

const SELECT_ALL: &str = "SELECT id, name, job, email FROM contacts ORDER BY id ASC";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A single SQLite file holding the `contacts` table.
///
/// The process is assumed to be the only writer.
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) the database at `path` and ensure the table exists.
  ///
  /// Any failure, whether opening the file or running the schema, is
  /// reported as [`Error::ConnectionFailed`].
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = Connection::open(path).map_err(|source| Error::ConnectionFailed {
      path: path.to_path_buf(),
      source,
    })?;
    let store = Self::init(conn, path.to_path_buf())?;
    info!(path = %path.display(), "opened contact store");
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    let path = PathBuf::from(":memory:");
    let conn = Connection::open_in_memory().map_err(|source| Error::ConnectionFailed {
      path: path.clone(),
      source,
    })?;
    Self::init(conn, path)
  }

  fn init(conn: Connection, path: PathBuf) -> Result<Self> {
    conn
      .execute_batch(SCHEMA)
      .map_err(|source| Error::ConnectionFailed { path, source })?;
    Ok(Self { conn })
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Every row, ordered by ascending id.
  pub fn select_all(&self) -> Result<Vec<Contact>> {
    let mut stmt = self.conn.prepare_cached(SELECT_ALL)?;
    let rows = stmt
      .query_map([], |row| {
        Ok(Contact {
          id:    ContactId(row.get(0)?),
          name:  row.get(1)?,
          job:   row.get(2)?,
          email: row.get(3)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  // ── Writes ────────────────────────────────────────────────────────────────
  //
  // Each write is a single autocommitted statement, so it either lands
  // completely or not at all.

  /// Insert one row and return the id the store assigned to it.
  pub fn insert(&self, contact: &NewContact) -> Result<ContactId> {
    self.conn.execute(
      "INSERT INTO contacts (name, job, email) VALUES (?1, ?2, ?3)",
      rusqlite::params![contact.name, contact.job, contact.email],
    )?;
    let id = ContactId(self.conn.last_insert_rowid());
    debug!(%id, "inserted contact");
    Ok(id)
  }

  /// Delete the row with `id`. Returns the number of rows removed (0 or 1).
  pub fn delete(&self, id: ContactId) -> Result<usize> {
    let n = self
      .conn
      .execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id.0])?;
    debug!(%id, removed = n, "deleted contact");
    Ok(n)
  }

  /// Delete every row in one statement. Returns the number removed.
  pub fn delete_all(&self) -> Result<usize> {
    let n = self.conn.execute("DELETE FROM contacts", [])?;
    debug!(removed = n, "cleared contacts");
    Ok(n)
  }

  /// Set one column of the row with `id`. `None` writes SQL `NULL`.
  /// Returns the number of rows changed (0 or 1).
  pub fn update(&self, id: ContactId, field: Field, value: Option<&str>) -> Result<usize> {
    let sql = format!("UPDATE contacts SET {} = ?1 WHERE id = ?2", field.column());
    let n = self.conn.execute(&sql, rusqlite::params![value, id.0])?;
    debug!(%id, field = field.column(), changed = n, "updated contact");
    Ok(n)
  }
}
