use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, FormField, View};
use crate::tui::editor::TextField;

const TITLE_PLACEHOLDER: &str = "e.g. Buy groceries";
const TEXT_PLACEHOLDER: &str = "Details, notes, a shopping list...";

/// Render the create or edit form
pub fn render_form_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let (heading, submit_label) = match app.view {
        View::Edit { .. } => ("Edit task", "Save"),
        _ => ("Create task", "Create task"),
    };
    let Some(form) = app.active_form() else {
        return;
    };

    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // back
            Constraint::Length(1),
            Constraint::Length(1), // heading
            Constraint::Length(1),
            Constraint::Length(1), // title label
            Constraint::Length(3), // title input
            Constraint::Length(1), // text label
            Constraint::Min(3),    // text input
            Constraint::Length(1), // submit
        ])
        .split(area);

    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let key = Style::default().fg(app.theme.highlight).bg(bg);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("\u{2039} Back ", Style::default().fg(app.theme.text).bg(bg)),
            Span::styled("Esc", key),
        ])),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            heading,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Task title", dim)),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Task description", dim)),
        chunks[6],
    );

    let title_focused = form.focus == FormField::Title;
    render_input(frame, app, &form.title, TITLE_PLACEHOLDER, title_focused, chunks[5]);
    render_input(frame, app, &form.text, TEXT_PLACEHOLDER, !title_focused, chunks[7]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Ctrl-S", key),
            Span::styled(
                format!(" {}", submit_label),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ])),
        chunks[8],
    );
}

/// Draw a bordered input, scrolled so the cursor stays visible
fn render_input(
    frame: &mut Frame,
    app: &App,
    field: &TextField,
    placeholder: &str,
    focused: bool,
    area: Rect,
) {
    let bg = app.theme.background;
    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (line, col) = field.cursor_line_col();
    let top = line.saturating_sub(inner.height as usize - 1);
    let hoff = col.saturating_sub(inner.width as usize - 1);

    let paragraph = if field.text().is_empty() {
        Paragraph::new(Span::styled(
            placeholder.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        let lines: Vec<Line> = field
            .lines()
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(app.theme.text_bright).bg(bg))))
            .collect();
        Paragraph::new(lines).scroll((top as u16, hoff as u16))
    };
    frame.render_widget(paragraph, inner);

    if focused {
        frame.set_cursor_position((
            inner.x + (col - hoff) as u16,
            inner.y + (line - top) as u16,
        ));
    }
}
