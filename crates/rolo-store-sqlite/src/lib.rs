//! SQLite backend for the Rolo address book.
//!
//! [`SqliteStore`] opens the database file and owns the schema;
//! [`SqliteContactTable`] layers the row projection and the write-through
//! mutations of [`rolo_core::ContactTable`] on top of it. All access is
//! synchronous on the calling thread.

mod schema;
mod store;
mod table;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_PATH, SqliteStore};
pub use table::SqliteContactTable;
