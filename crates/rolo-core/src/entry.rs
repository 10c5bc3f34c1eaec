//! The Add Contact entry dialog as a pure state machine.
//!
//! The dialog is always in the editing state while it exists. [`EntryDialog::confirm`]
//! either accepts (the caller closes the dialog and adds the contact) or
//! rejects, in which case the dialog keeps its input and records the error
//! for display. [`EntryDialog::cancel`] closes without producing data.

use crate::{
  contact::{Field, NewContact},
  error::{ValidationError, validate_required},
};

/// Result of a confirm or cancel action on the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Cancelled,
  /// Input is kept; the user may correct it and confirm again.
  Rejected(ValidationError),
  Accepted(NewContact),
}

/// Three text inputs (name, job, email) with a focus cursor.
#[derive(Debug, Clone, Default)]
pub struct EntryDialog {
  values: [String; 3],
  focus:  usize,
  error:  Option<ValidationError>,
}

fn slot(field: Field) -> usize {
  match field {
    Field::Name => 0,
    Field::Job => 1,
    Field::Email => 2,
  }
}

impl EntryDialog {
  pub fn new() -> Self { Self::default() }

  pub fn value(&self, field: Field) -> &str { &self.values[slot(field)] }

  pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
    self.values[slot(field)] = value.into();
  }

  pub fn focus(&self) -> Field { Field::ALL[self.focus] }

  pub fn focus_next(&mut self) { self.focus = (self.focus + 1) % Field::ALL.len(); }

  pub fn focus_prev(&mut self) {
    self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
  }

  /// Append a character to the focused input.
  pub fn insert(&mut self, c: char) { self.values[self.focus].push(c); }

  /// Remove the last character of the focused input.
  pub fn backspace(&mut self) { self.values[self.focus].pop(); }

  /// The pending rejection, if the last confirm failed and the user has not
  /// acknowledged it yet.
  pub fn error(&self) -> Option<&ValidationError> { self.error.as_ref() }

  pub fn dismiss_error(&mut self) { self.error = None; }

  /// Validate the inputs in form order. On rejection the focus moves to the
  /// offending field.
  pub fn confirm(&mut self) -> Outcome {
    let fields: Vec<(Field, &str)> = Field::ALL
      .iter()
      .map(|&f| (f, self.value(f)))
      .collect();

    match validate_required(&fields) {
      Ok(()) => {
        self.error = None;
        Outcome::Accepted(NewContact::new(
          self.value(Field::Name),
          self.value(Field::Job),
          self.value(Field::Email),
        ))
      }
      Err(err) => {
        let ValidationError::MissingField(field) = err;
        self.focus = slot(field);
        self.error = Some(err);
        Outcome::Rejected(err)
      }
    }
  }

  pub fn cancel(&self) -> Outcome { Outcome::Cancelled }
}
