//! Error type for `rolo-store-sqlite`.

use std::path::PathBuf;

use rolo_core::{ContactId, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The database file could not be opened, created, or initialised.
  #[error("database error: could not open {}: {source}", .path.display())]
  ConnectionFailed {
    path:   PathBuf,
    #[source]
    source: rusqlite::Error,
  },

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("contact not found: {0}")]
  NotFound(ContactId),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
