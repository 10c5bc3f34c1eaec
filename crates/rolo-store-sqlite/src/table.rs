//! [`SqliteContactTable`], the SQLite implementation of [`ContactTable`].

use std::path::Path;

use rolo_core::{Contact, ContactId, ContactTable, Field, NewContact, validate_required};
use tracing::info;

use crate::{Error, Result, SqliteStore};

/// The contacts table as an ordered, mutable projection.
///
/// Every mutation is committed to the store and then the projection is
/// re-read, so [`ContactTable::list`] always mirrors the database.
pub struct SqliteContactTable {
  store: SqliteStore,
  rows:  Vec<Contact>,
}

impl SqliteContactTable {
  pub fn new(store: SqliteStore) -> Result<Self> {
    let rows = store.select_all()?;
    Ok(Self { store, rows })
  }

  /// Open the store at `path` and load its rows.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> { Self::new(SqliteStore::open(path)?) }

  pub fn open_in_memory() -> Result<Self> { Self::new(SqliteStore::open_in_memory()?) }

  /// Re-read the projection from the store.
  pub fn refresh(&mut self) -> Result<()> {
    self.rows = self.store.select_all()?;
    Ok(())
  }

  fn row(&self, id: ContactId) -> Result<Contact> {
    self
      .rows
      .iter()
      .find(|c| c.id == id)
      .cloned()
      .ok_or(Error::NotFound(id))
  }
}

impl ContactTable for SqliteContactTable {
  type Error = Error;

  fn list(&self) -> &[Contact] { &self.rows }

  fn add(&mut self, contact: NewContact) -> Result<Contact> {
    contact.validate()?;
    let id = self.store.insert(&contact)?;
    self.refresh()?;
    info!(%id, "added contact");
    self.row(id)
  }

  fn delete(&mut self, id: ContactId) -> Result<()> {
    if self.store.delete(id)? == 0 {
      return Err(Error::NotFound(id));
    }
    self.refresh()?;
    info!(%id, "removed contact");
    Ok(())
  }

  fn clear_all(&mut self) -> Result<()> {
    let removed = self.store.delete_all()?;
    self.refresh()?;
    info!(removed, "cleared all contacts");
    Ok(())
  }

  fn update_field(&mut self, id: ContactId, field: Field, value: &str) -> Result<Contact> {
    validate_required(&[(field, value)])?;
    let value = (!value.is_empty()).then_some(value);
    if self.store.update(id, field, value)? == 0 {
      return Err(Error::NotFound(id));
    }
    self.refresh()?;
    info!(%id, field = %field, "edited contact");
    self.row(id)
  }
}
