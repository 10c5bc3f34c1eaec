//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rolo_core::{
  Contact, ContactId, ContactTable, Field,
  entry::{EntryDialog, Outcome},
};
use tracing::{info, warn};

// ─── Modes ────────────────────────────────────────────────────────────────────

/// A destructive action waiting for a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
  Delete(ContactId),
  ClearAll,
}

impl Pending {
  pub fn prompt(self) -> &'static str {
    match self {
      Pending::Delete(_) => "Do you want to remove the selected contact?",
      Pending::ClearAll => "Do you want to delete all your contacts?",
    }
  }
}

/// An in-place edit of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
  pub id:     ContactId,
  pub field:  Field,
  pub buffer: String,
}

/// What currently owns the keyboard.
#[derive(Debug, Clone)]
pub enum Mode {
  /// Navigating the grid.
  Browse,
  /// The modal Add Contact dialog is open.
  Adding(EntryDialog),
  /// A grid cell is being edited.
  Editing(CellEdit),
  /// A blocking yes/no prompt.
  Confirm(Pending),
  /// A blocking error message; any key dismisses it.
  Alert(String),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
///
/// Rendering always reads [`ContactTable::list`] directly, so the grid
/// changes only after a mutation on `table` has completed.
pub struct App<T> {
  pub mode: Mode,

  /// Backing contact table.
  pub table: T,

  /// Selected row within `table.list()`.
  pub row_cursor: usize,

  /// Selected column; the id column is never selectable.
  pub column: Field,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl<T: ContactTable> App<T> {
  pub fn new(table: T) -> Self {
    Self {
      mode: Mode::Browse,
      table,
      row_cursor: 0,
      column: Field::Name,
      status_msg: String::new(),
    }
  }

  /// The contact under the row cursor, if the table is not empty.
  pub fn selected(&self) -> Option<&Contact> { self.table.list().get(self.row_cursor) }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.mode {
      Mode::Browse => return self.handle_browse_key(key),
      Mode::Adding(_) => self.handle_dialog_key(key),
      Mode::Editing(_) => self.handle_edit_key(key),
      Mode::Confirm(pending) => self.handle_confirm_key(key, pending),
      Mode::Alert(_) => self.mode = Mode::Browse,
    }
    true
  }

  fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
    let len = self.table.list().len();
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        if self.row_cursor + 1 < len {
          self.row_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.row_cursor = self.row_cursor.saturating_sub(1);
      }
      KeyCode::Right | KeyCode::Char('l') => self.column = step_column(self.column, 1),
      KeyCode::Left | KeyCode::Char('h') => self.column = step_column(self.column, -1),
      KeyCode::Home | KeyCode::Char('g') => self.row_cursor = 0,
      KeyCode::End | KeyCode::Char('G') => self.row_cursor = len.saturating_sub(1),

      KeyCode::Char('a') => self.open_add_dialog(),
      KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
      KeyCode::Char('C') => self.request_clear_all(),
      KeyCode::Enter | KeyCode::Char('e') => self.begin_edit(),

      _ => {}
    }
    true
  }

  fn handle_dialog_key(&mut self, key: KeyEvent) {
    let Mode::Adding(dialog) = &mut self.mode else {
      return;
    };

    // A rejection is blocking until acknowledged.
    if dialog.error().is_some() {
      dialog.dismiss_error();
      return;
    }

    let outcome = match key.code {
      KeyCode::Esc => dialog.cancel(),
      KeyCode::Enter => dialog.confirm(),
      KeyCode::Tab | KeyCode::Down => {
        dialog.focus_next();
        return;
      }
      KeyCode::BackTab | KeyCode::Up => {
        dialog.focus_prev();
        return;
      }
      KeyCode::Backspace => {
        dialog.backspace();
        return;
      }
      KeyCode::Char(c) => {
        dialog.insert(c);
        return;
      }
      _ => return,
    };

    match outcome {
      Outcome::Cancelled => {
        self.mode = Mode::Browse;
        self.status_msg = String::new();
      }
      Outcome::Rejected(err) => {
        info!(%err, "add dialog rejected input");
      }
      Outcome::Accepted(contact) => {
        self.mode = Mode::Browse;
        match self.table.add(contact) {
          Ok(added) => {
            self.status_msg = format!("Added {}", added.name);
            if let Some(pos) = self.table.list().iter().position(|c| c.id == added.id) {
              self.row_cursor = pos;
            }
          }
          Err(err) => self.report(&err),
        }
      }
    }
  }

  fn handle_edit_key(&mut self, key: KeyEvent) {
    let Mode::Editing(edit) = &mut self.mode else {
      return;
    };

    match key.code {
      KeyCode::Esc => self.mode = Mode::Browse,
      KeyCode::Enter => {
        let CellEdit { id, field, buffer } = edit.clone();
        self.mode = Mode::Browse;
        match self.table.update_field(id, field, &buffer) {
          Ok(_) => self.status_msg = format!("Saved {field}"),
          Err(err) => self.report(&err),
        }
        self.clamp_cursor();
      }
      KeyCode::Backspace => {
        edit.buffer.pop();
      }
      KeyCode::Char(c) => edit.buffer.push(c),
      _ => {}
    }
  }

  fn handle_confirm_key(&mut self, key: KeyEvent, pending: Pending) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
        self.mode = Mode::Browse;
        self.run_pending(pending);
      }
      KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
        self.mode = Mode::Browse;
        self.status_msg = "Cancelled".into();
      }
      _ => {}
    }
  }

  // ── Actions ───────────────────────────────────────────────────────────────

  pub fn open_add_dialog(&mut self) { self.mode = Mode::Adding(EntryDialog::new()); }

  /// Ask before deleting the selected contact. Does nothing without a
  /// selection.
  pub fn request_delete(&mut self) {
    if let Some(id) = self.selected().map(|c| c.id) {
      self.mode = Mode::Confirm(Pending::Delete(id));
    }
  }

  pub fn request_clear_all(&mut self) { self.mode = Mode::Confirm(Pending::ClearAll); }

  /// Start editing the selected cell, pre-filled with its current value.
  pub fn begin_edit(&mut self) {
    if let Some(c) = self.selected() {
      let edit = CellEdit {
        id:     c.id,
        field:  self.column,
        buffer: c.get(self.column).to_owned(),
      };
      self.mode = Mode::Editing(edit);
    }
  }

  fn run_pending(&mut self, pending: Pending) {
    let result = match pending {
      Pending::Delete(id) => self.table.delete(id).map(|()| "Contact removed"),
      Pending::ClearAll => self.table.clear_all().map(|()| "All contacts removed"),
    };
    match result {
      Ok(msg) => self.status_msg = msg.into(),
      Err(err) => self.report(&err),
    }
    self.clamp_cursor();
  }

  /// Surface a table error in a blocking alert. The projection is left as
  /// the table reports it.
  fn report(&mut self, err: &T::Error) {
    warn!(%err, "contact table operation failed");
    self.mode = Mode::Alert(err.to_string());
  }

  fn clamp_cursor(&mut self) {
    let len = self.table.list().len();
    self.row_cursor = self.row_cursor.min(len.saturating_sub(1));
  }
}

fn step_column(column: Field, delta: isize) -> Field {
  let n = Field::ALL.len() as isize;
  let pos = Field::ALL.iter().position(|&f| f == column).unwrap_or(0) as isize;
  Field::ALL[(pos + delta).rem_euclid(n) as usize]
}
