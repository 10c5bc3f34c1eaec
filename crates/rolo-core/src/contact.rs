//! Contact records and their editable fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, validate_required};

/// Column headers shown above the contact grid, in display order.
pub const HEADERS: [&str; 4] = ["ID", "Name", "Job", "Email"];

/// Store-assigned row identifier. Unique among live rows and never reused
/// for another contact while the row exists.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// One persisted row of the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:    ContactId,
  pub name:  String,
  pub job:   Option<String>,
  pub email: String,
}

impl Contact {
  /// Current value of `field`, with a missing job rendered as `""`.
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.name,
      Field::Job => self.job.as_deref().unwrap_or_default(),
      Field::Email => &self.email,
    }
  }
}

/// The user-editable columns of a contact. `id` is store-owned and absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
  Name,
  Job,
  Email,
}

impl Field {
  /// All editable fields in form and grid order.
  pub const ALL: [Field; 3] = [Field::Name, Field::Job, Field::Email];

  pub fn label(self) -> &'static str {
    match self {
      Field::Name => "Name",
      Field::Job => "Job",
      Field::Email => "Email",
    }
  }

  /// SQL column backing this field.
  pub fn column(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Job => "job",
      Field::Email => "email",
    }
  }

  pub fn is_required(self) -> bool { !matches!(self, Field::Job) }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Input for [`ContactTable::add`](crate::ContactTable::add): everything but
/// the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
  pub name:  String,
  pub job:   Option<String>,
  pub email: String,
}

impl NewContact {
  /// Build from raw form input. An empty job becomes `None`.
  pub fn new(
    name: impl Into<String>,
    job: impl Into<String>,
    email: impl Into<String>,
  ) -> Self {
    let job = job.into();
    Self {
      name:  name.into(),
      job:   (!job.is_empty()).then_some(job),
      email: email.into(),
    }
  }

  /// Reject the contact if a required field is empty.
  pub fn validate(&self) -> Result<()> {
    validate_required(&[
      (Field::Name, self.name.as_str()),
      (Field::Job, self.job.as_deref().unwrap_or_default()),
      (Field::Email, self.email.as_str()),
    ])
  }
}
