//! Validation errors and the required-field check.

use thiserror::Error;

use crate::contact::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("You must provide a contact's {0}")]
  MissingField(Field),
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// Check `(field, value)` pairs in order and report the first required field
/// whose value is empty. Optional fields never fail.
pub fn validate_required(fields: &[(Field, &str)]) -> Result<()> {
  match fields
    .iter()
    .find(|(field, value)| field.is_required() && value.is_empty())
  {
    Some((field, _)) => Err(ValidationError::MissingField(*field)),
    None => Ok(()),
  }
}
