//! Core types and trait definitions for the Rolo address book.
//!
//! This crate is free of database and terminal dependencies. The SQLite
//! adapter and the terminal front end both depend on it.

pub mod contact;
pub mod entry;
pub mod error;
pub mod table;

pub use contact::{Contact, ContactId, Field, NewContact, HEADERS};
pub use error::{Result, ValidationError, validate_required};
pub use table::ContactTable;
