use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};
use crate::util::text::truncate_to_width;

const LIST_HINTS: &[(&str, &str)] = &[
    ("a", "add"),
    ("e", "edit"),
    ("d", "delete"),
    ("j/k", "move"),
    ("q", "quit"),
];
const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Ctrl-S", "save"),
    ("Esc", "back"),
];
const CONFIRM_HINTS: &[(&str, &str)] = &[("y", "confirm"), ("n", "cancel")];

/// Render the bottom row: a pending status message, else key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(message) = &app.status_message {
        let fg = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.green
        };
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(message, width.saturating_sub(1))),
            Style::default().fg(fg).bg(bg),
        ))
    } else if app.show_key_hints {
        let hints = if app.pending_delete.is_some() {
            CONFIRM_HINTS
        } else if app.view == View::List {
            LIST_HINTS
        } else {
            FORM_HINTS
        };
        let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default().bg(bg)));
            }
            spans.push(Span::styled(*key, Style::default().fg(app.theme.highlight).bg(bg)));
            spans.push(Span::styled(
                format!(" {}", label),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        Line::from(spans)
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
