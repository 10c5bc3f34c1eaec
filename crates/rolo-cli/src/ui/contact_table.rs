//! The contact grid.

use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use rolo_core::{Contact, ContactTable, Field, HEADERS};

use crate::app::{App, Mode};

/// Render the grid into `area`.
pub fn draw<T: ContactTable>(f: &mut Frame, area: Rect, app: &App<T>) {
  let contacts = app.table.list();

  let block = Block::default()
    .title(format!(" Contacts ({}) ", contacts.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if contacts.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No contacts. Press a to add one.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let editing = match &app.mode {
    Mode::Editing(edit) => Some(edit),
    _ => None,
  };

  let rows: Vec<Row> = contacts
    .iter()
    .enumerate()
    .map(|(i, c)| {
      let on_cursor = i == app.row_cursor;
      let mut cells = vec![Cell::from(c.id.to_string())];
      for field in Field::ALL {
        let text = match editing {
          Some(edit) if on_cursor && edit.field == field => format!("{}_", edit.buffer),
          _ => c.get(field).to_owned(),
        };
        let style = if on_cursor && field == app.column {
          Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
        } else {
          Style::default()
        };
        cells.push(Cell::from(text).style(style));
      }
      Row::new(cells)
    })
    .collect();

  let header = Row::new(HEADERS).style(
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let table = Table::new(rows, column_widths(contacts, app))
    .header(header)
    .block(block)
    .column_spacing(2)
    .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

  let mut state = TableState::default().with_selected(Some(app.row_cursor));
  f.render_stateful_widget(table, area, &mut state);
}

/// Size each column to its widest cell, header included.
fn column_widths<T: ContactTable>(contacts: &[Contact], app: &App<T>) -> Vec<Constraint> {
  let id_width = contacts
    .iter()
    .map(|c| c.id.to_string().len())
    .chain([HEADERS[0].len()])
    .max()
    .unwrap_or_default();

  let mut widths = vec![Constraint::Length(id_width as u16)];
  for (field, header) in Field::ALL.into_iter().zip(&HEADERS[1..]) {
    let mut width = contacts
      .iter()
      .map(|c| c.get(field).chars().count())
      .chain([header.len()])
      .max()
      .unwrap_or_default();
    if let Mode::Editing(edit) = &app.mode {
      if edit.field == field {
        width = width.max(edit.buffer.chars().count() + 1);
      }
    }
    widths.push(Constraint::Length(width as u16));
  }
  widths
}
