//! Controller tests driven by synthetic key events.

use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rolo_core::{
  Contact, ContactId, ContactTable, Field, NewContact, ValidationError,
};
use rolo_store_sqlite::{Error, SqliteContactTable};

use crate::{
  Args, ConfigFile, Settings,
  app::{App, CellEdit, Mode, Pending},
};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// In-memory table that counts the calls it receives.
#[derive(Default)]
struct RecordingTable {
  rows:    Vec<Contact>,
  next_id: i64,
  adds:    usize,
  deletes: Vec<ContactId>,
  clears:  usize,
}

impl ContactTable for RecordingTable {
  type Error = Error;

  fn list(&self) -> &[Contact] { &self.rows }

  fn add(&mut self, contact: NewContact) -> Result<Contact, Error> {
    self.adds += 1;
    contact.validate()?;
    self.next_id += 1;
    let row = Contact {
      id:    ContactId(self.next_id),
      name:  contact.name,
      job:   contact.job,
      email: contact.email,
    };
    self.rows.push(row.clone());
    Ok(row)
  }

  fn delete(&mut self, id: ContactId) -> Result<(), Error> {
    self.deletes.push(id);
    let before = self.rows.len();
    self.rows.retain(|c| c.id != id);
    if self.rows.len() == before {
      return Err(Error::NotFound(id));
    }
    Ok(())
  }

  fn clear_all(&mut self) -> Result<(), Error> {
    self.clears += 1;
    self.rows.clear();
    Ok(())
  }

  fn update_field(&mut self, id: ContactId, field: Field, value: &str) -> Result<Contact, Error> {
    rolo_core::validate_required(&[(field, value)])?;
    let row = self
      .rows
      .iter_mut()
      .find(|c| c.id == id)
      .ok_or(Error::NotFound(id))?;
    match field {
      Field::Name => row.name = value.into(),
      Field::Job => row.job = (!value.is_empty()).then(|| value.into()),
      Field::Email => row.email = value.into(),
    }
    Ok(row.clone())
  }
}

fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

fn press<T: ContactTable>(app: &mut App<T>, code: KeyCode) -> bool {
  app.handle_key(key(code))
}

fn type_str<T: ContactTable>(app: &mut App<T>, s: &str) {
  for c in s.chars() {
    press(app, KeyCode::Char(c));
  }
}

/// Drive the Add dialog end to end: open, fill three fields, confirm.
fn add_via_dialog<T: ContactTable>(app: &mut App<T>, name: &str, job: &str, email: &str) {
  press(app, KeyCode::Char('a'));
  type_str(app, name);
  press(app, KeyCode::Tab);
  type_str(app, job);
  press(app, KeyCode::Tab);
  type_str(app, email);
  press(app, KeyCode::Enter);
}

fn sqlite_app() -> App<SqliteContactTable> {
  App::new(SqliteContactTable::open_in_memory().expect("in-memory table"))
}

fn names<T: ContactTable>(app: &App<T>) -> Vec<String> {
  app.table.list().iter().map(|c| c.name.clone()).collect()
}

// ─── Add ──────────────────────────────────────────────────────────────────────

#[test]
fn add_dialog_rejects_missing_name_without_adding() {
  let mut app = App::new(RecordingTable::default());
  add_via_dialog(&mut app, "", "X", "a@b.com");

  let Mode::Adding(dialog) = &app.mode else {
    panic!("dialog should stay open, got {:?}", app.mode);
  };
  assert_eq!(
    dialog.error(),
    Some(&ValidationError::MissingField(Field::Name))
  );
  assert_eq!(dialog.value(Field::Job), "X");
  assert_eq!(dialog.value(Field::Email), "a@b.com");
  assert_eq!(app.table.adds, 0);

  // Acknowledge the error, then fix the name and retry.
  press(&mut app, KeyCode::Enter);
  assert!(matches!(&app.mode, Mode::Adding(d) if d.error().is_none()));
  type_str(&mut app, "Ada");
  press(&mut app, KeyCode::Enter);

  assert!(matches!(app.mode, Mode::Browse));
  assert_eq!(app.table.adds, 1);
  assert_eq!(app.table.rows[0].name, "Ada");
}

#[test]
fn add_dialog_cancel_touches_nothing() {
  let mut app = App::new(RecordingTable::default());
  press(&mut app, KeyCode::Char('a'));
  type_str(&mut app, "Ada");
  press(&mut app, KeyCode::Esc);

  assert!(matches!(app.mode, Mode::Browse));
  assert_eq!(app.table.adds, 0);
}

#[test]
fn add_writes_through_and_selects_new_row() {
  let mut app = sqlite_app();
  add_via_dialog(&mut app, "Ada", "Engineer", "ada@x.com");
  add_via_dialog(&mut app, "Grace", "", "grace@x.com");

  assert!(matches!(app.mode, Mode::Browse));
  let rows = app.table.list();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].id, ContactId(1));
  assert_eq!(rows[0].job.as_deref(), Some("Engineer"));
  assert_eq!(rows[1].job, None);
  assert_eq!(app.row_cursor, 1);
  assert_eq!(app.status_msg, "Added Grace");
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[test]
fn delete_without_selection_is_noop() {
  let mut app = App::new(RecordingTable::default());
  press(&mut app, KeyCode::Char('d'));
  assert!(matches!(app.mode, Mode::Browse));
  assert!(app.table.deletes.is_empty());
}

#[test]
fn delete_second_of_three_after_confirmation() {
  let mut app = sqlite_app();
  add_via_dialog(&mut app, "A", "", "a@x.com");
  add_via_dialog(&mut app, "B", "", "b@x.com");
  add_via_dialog(&mut app, "C", "", "c@x.com");
  let before = app.table.list().to_vec();

  press(&mut app, KeyCode::Home);
  press(&mut app, KeyCode::Down);
  press(&mut app, KeyCode::Delete);
  assert!(matches!(
    app.mode,
    Mode::Confirm(Pending::Delete(id)) if id == before[1].id
  ));

  press(&mut app, KeyCode::Char('y'));
  assert!(matches!(app.mode, Mode::Browse));
  assert_eq!(app.table.list(), [before[0].clone(), before[2].clone()].as_slice());
}

#[test]
fn delete_declined_keeps_row() {
  let mut app = App::new(RecordingTable::default());
  add_via_dialog(&mut app, "Ada", "", "ada@x.com");

  press(&mut app, KeyCode::Char('d'));
  press(&mut app, KeyCode::Char('n'));
  assert!(matches!(app.mode, Mode::Browse));
  assert!(app.table.deletes.is_empty());
  assert_eq!(app.table.rows.len(), 1);
}

#[test]
fn delete_of_vanished_row_surfaces_not_found() {
  let mut app = App::new(RecordingTable::default());
  add_via_dialog(&mut app, "Ada", "", "ada@x.com");

  press(&mut app, KeyCode::Char('d'));
  app.table.rows.clear();
  press(&mut app, KeyCode::Enter);

  let Mode::Alert(msg) = &app.mode else {
    panic!("expected alert, got {:?}", app.mode);
  };
  assert_eq!(msg, "contact not found: 1");
  assert_eq!(app.row_cursor, 0);

  press(&mut app, KeyCode::Char('x'));
  assert!(matches!(app.mode, Mode::Browse));
}

// ─── Clear all ────────────────────────────────────────────────────────────────

#[test]
fn clear_all_after_confirmation() {
  let mut app = sqlite_app();
  add_via_dialog(&mut app, "A", "", "a@x.com");
  add_via_dialog(&mut app, "B", "", "b@x.com");

  press(&mut app, KeyCode::Char('C'));
  assert!(matches!(app.mode, Mode::Confirm(Pending::ClearAll)));
  press(&mut app, KeyCode::Char('y'));

  assert!(app.table.list().is_empty());
  assert_eq!(app.row_cursor, 0);
  assert!(app.selected().is_none());
}

#[test]
fn clear_all_on_empty_table_still_asks() {
  let mut app = App::new(RecordingTable::default());
  press(&mut app, KeyCode::Char('C'));
  press(&mut app, KeyCode::Esc);
  assert_eq!(app.table.clears, 0);

  press(&mut app, KeyCode::Char('C'));
  press(&mut app, KeyCode::Enter);
  assert_eq!(app.table.clears, 1);
  assert!(matches!(app.mode, Mode::Browse));
}

// ─── Cell editing ─────────────────────────────────────────────────────────────

#[test]
fn edit_cell_commits_on_enter() {
  let mut app = sqlite_app();
  add_via_dialog(&mut app, "Ada", "Engineer", "ada@x.com");

  press(&mut app, KeyCode::Right);
  assert_eq!(app.column, Field::Job);
  press(&mut app, KeyCode::Enter);
  assert!(matches!(
    &app.mode,
    Mode::Editing(CellEdit { field: Field::Job, buffer, .. }) if buffer == "Engineer"
  ));

  for _ in 0.."Engineer".len() {
    press(&mut app, KeyCode::Backspace);
  }
  type_str(&mut app, "Countess");
  press(&mut app, KeyCode::Enter);

  assert!(matches!(app.mode, Mode::Browse));
  assert_eq!(app.table.list()[0].job.as_deref(), Some("Countess"));
}

#[test]
fn edit_cell_escape_discards() {
  let mut app = sqlite_app();
  add_via_dialog(&mut app, "Ada", "", "ada@x.com");

  press(&mut app, KeyCode::Char('e'));
  type_str(&mut app, " Lovelace");
  press(&mut app, KeyCode::Esc);

  assert_eq!(names(&app), ["Ada"]);
}

#[test]
fn edit_cell_to_empty_required_value_is_refused() {
  let mut app = sqlite_app();
  add_via_dialog(&mut app, "Ada", "", "ada@x.com");

  press(&mut app, KeyCode::Left);
  assert_eq!(app.column, Field::Email);
  press(&mut app, KeyCode::Enter);
  for _ in 0.."ada@x.com".len() {
    press(&mut app, KeyCode::Backspace);
  }
  press(&mut app, KeyCode::Enter);

  assert!(matches!(&app.mode, Mode::Alert(msg) if msg == "You must provide a contact's Email"));
  assert_eq!(app.table.list()[0].email, "ada@x.com");
}

// ─── Navigation / quit ────────────────────────────────────────────────────────

#[test]
fn cursor_stays_in_bounds() {
  let mut app = App::new(RecordingTable::default());
  press(&mut app, KeyCode::Down);
  press(&mut app, KeyCode::Up);
  assert_eq!(app.row_cursor, 0);

  add_via_dialog(&mut app, "A", "", "a@x.com");
  add_via_dialog(&mut app, "B", "", "b@x.com");
  press(&mut app, KeyCode::Down);
  press(&mut app, KeyCode::Down);
  assert_eq!(app.row_cursor, 1);
  press(&mut app, KeyCode::Char('g'));
  assert_eq!(app.row_cursor, 0);
  press(&mut app, KeyCode::Char('G'));
  assert_eq!(app.row_cursor, 1);
}

#[test]
fn q_and_ctrl_c_quit() {
  let mut app = App::new(RecordingTable::default());
  assert!(!press(&mut app, KeyCode::Char('q')));

  press(&mut app, KeyCode::Char('a'));
  assert!(press(&mut app, KeyCode::Char('q')));
  assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

// ─── Settings ─────────────────────────────────────────────────────────────────

#[test]
fn settings_default_to_contacts_sqlite() {
  let args = Args::parse_from(["rolo"]);
  let settings = Settings::resolve(args, ConfigFile::default());
  assert_eq!(settings.database, PathBuf::from("contacts.sqlite"));
  assert_eq!(settings.log_file, None);
}

#[test]
fn flags_override_config_file() {
  let file: ConfigFile =
    toml::from_str("database = \"from-file.sqlite\"\nlog_file = \"rolo.log\"\n").unwrap();

  let args = Args::parse_from(["rolo", "--database", "from-flag.sqlite"]);
  let settings = Settings::resolve(args, file);
  assert_eq!(settings.database, PathBuf::from("from-flag.sqlite"));
  assert_eq!(settings.log_file, Some(PathBuf::from("rolo.log")));
}

#[test]
fn config_file_rejects_unknown_keys() {
  assert!(toml::from_str::<ConfigFile>("databse = \"x\"").is_err());
}
