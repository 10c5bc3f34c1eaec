//! Modal overlays: the Add Contact form, yes/no prompts and error alerts.

use ratatui::{
  Frame,
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use rolo_core::{Field, entry::EntryDialog};

use super::centered;

const LABEL_WIDTH: usize = 7;

/// Render the Add Contact dialog, plus its error box if a confirm was rejected.
pub fn draw_entry(f: &mut Frame, area: Rect, dialog: &EntryDialog) {
  let rect = centered(area, 50, 9);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(" Add Contact ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let mut lines: Vec<Line> = Vec::new();
  for field in Field::ALL {
    let focused = field == dialog.focus();
    let label = format!("{:<LABEL_WIDTH$}", format!("{}:", field.label()));
    let value = if focused {
      format!("{}_", dialog.value(field))
    } else {
      dialog.value(field).to_owned()
    };
    let value_style = if focused {
      Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
      Style::default()
    };
    lines.push(Line::from(vec![
      Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
      Span::styled(value, value_style),
    ]));
    lines.push(Line::from(""));
  }
  lines.push(Line::from(Span::styled(
    "[Enter] Ok   [Esc] Cancel",
    Style::default().fg(Color::DarkGray),
  )));
  f.render_widget(Paragraph::new(lines), inner);

  if let Some(err) = dialog.error() {
    draw_alert(f, area, &err.to_string());
  }
}

/// Render a yes/no prompt.
pub fn draw_confirm(f: &mut Frame, area: Rect, prompt: &str) {
  draw_box(
    f,
    area,
    " Warning! ",
    Color::Yellow,
    prompt,
    "[y/Enter] Ok   [n/Esc] Cancel",
  );
}

/// Render a blocking error message.
pub fn draw_alert(f: &mut Frame, area: Rect, message: &str) {
  draw_box(f, area, " Error! ", Color::Red, message, "Press any key");
}

fn draw_box(f: &mut Frame, area: Rect, title: &str, color: Color, body: &str, hint: &str) {
  let width = (body.chars().count().max(hint.len()) + 4).clamp(30, 70) as u16;
  let rect = centered(area, width.min(area.width), 6);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(color));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let [body_area, hint_area] =
    Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
  f.render_widget(
    Paragraph::new(body.to_owned()).wrap(Wrap { trim: true }),
    body_area,
  );
  f.render_widget(
    Paragraph::new(hint.to_owned()).style(Style::default().fg(Color::DarkGray)),
    hint_area,
  );
}
