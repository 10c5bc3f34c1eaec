//! TUI rendering — orchestrates the grid, overlays, header and status bar.

pub mod contact_table;
pub mod dialog;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Flex, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};
use rolo_core::ContactTable;

use crate::app::{App, Mode};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<T: ContactTable>(f: &mut Frame, app: &App<T>) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  contact_table::draw(f, rows[1], app);
  draw_status(f, rows[2], app);

  match &app.mode {
    Mode::Adding(d) => dialog::draw_entry(f, area, d),
    Mode::Confirm(p) => dialog::draw_confirm(f, area, p.prompt()),
    Mode::Alert(msg) => dialog::draw_alert(f, area, msg),
    Mode::Browse | Mode::Editing(_) => {}
  }
}

/// A `width` × `height` rectangle centred inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let [row] = Layout::vertical([Constraint::Length(height)])
    .flex(Flex::Center)
    .areas(area);
  let [cell] = Layout::horizontal([Constraint::Length(width)])
    .flex(Flex::Center)
    .areas(row);
  cell
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " rolo  [a] add  [d] delete  [C] clear all  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<T: ContactTable>(f: &mut Frame, area: Rect, app: &App<T>) {
  let (mode_label, hints) = match &app.mode {
    Mode::Browse => (
      "BROWSE",
      "↑↓←→/hjkl move  Enter edit  a add  d delete  C clear all  q quit",
    ),
    Mode::Adding(_) => ("ADD", "Tab next field  Enter ok  Esc cancel"),
    Mode::Editing(_) => ("EDIT", "Enter save  Esc cancel"),
    Mode::Confirm(_) => ("CONFIRM", "y/Enter ok  n/Esc cancel"),
    Mode::Alert(_) => ("ERROR", "Press any key"),
  };

  let status = if app.status_msg.is_empty() || !matches!(app.mode, Mode::Browse) {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray));

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span]))
      .style(Style::default().bg(Color::Black)),
    area,
  );
}
