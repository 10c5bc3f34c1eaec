//! The [`ContactTable`] trait: the row-oriented view the front end drives.
//!
//! Implemented by storage adapters (e.g. `rolo-store-sqlite`). Every mutating
//! method commits to the store before it returns and then refreshes the
//! projection, so [`ContactTable::list`] is never stale.

use crate::contact::{Contact, ContactId, Field, NewContact};

pub trait ContactTable {
  type Error: std::error::Error + 'static;

  /// The current projection, ordered by ascending id.
  fn list(&self) -> &[Contact];

  /// Insert one row with a store-assigned id. Empty required fields are
  /// rejected before the store is touched.
  fn add(&mut self, contact: NewContact) -> Result<Contact, Self::Error>;

  /// Remove exactly the row with `id`; fails if there is none.
  fn delete(&mut self, id: ContactId) -> Result<(), Self::Error>;

  /// Remove every row in one statement. A no-op on an empty table.
  fn clear_all(&mut self) -> Result<(), Self::Error>;

  /// Overwrite one column of one row.
  fn update_field(
    &mut self,
    id: ContactId,
    field: Field,
    value: &str,
  ) -> Result<Contact, Self::Error>;
}
