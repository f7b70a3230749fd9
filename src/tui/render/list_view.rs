use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Todo;
use crate::tui::app::App;
use crate::util::text::{display_width, truncate_to_width};

/// Render the task list: the add button, then one card per task
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let button = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            " + Add task ",
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  a", Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(
        Paragraph::new(button).style(Style::default().bg(bg)),
        chunks[0],
    );

    if app.todos().is_empty() {
        render_placeholder(frame, app, chunks[1]);
        return;
    }

    let area = chunks[1];
    let width = area.width as usize;
    let visible_height = area.height as usize;

    // Build all display lines with their task indices
    let mut display_lines: Vec<(Option<usize>, Line)> = Vec::new();
    for (i, todo) in app.todos().iter().enumerate() {
        if i > 0 {
            display_lines.push((None, Line::from("")));
        }
        for line in card_lines(app, todo, i == app.cursor, width) {
            display_lines.push((Some(i), line));
        }
    }

    // Keep the whole cursor card in view when it fits
    let cursor = app.cursor;
    let first = display_lines.iter().position(|(idx, _)| *idx == Some(cursor));
    let last = display_lines.iter().rposition(|(idx, _)| *idx == Some(cursor));
    if let (Some(first), Some(last)) = (first, last) {
        if last + 1 > app.scroll + visible_height {
            app.scroll = (last + 1).saturating_sub(visible_height).min(first);
        }
        if first < app.scroll {
            app.scroll = first;
        }
    }
    app.scroll = app
        .scroll
        .min(display_lines.len().saturating_sub(visible_height));

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(app.scroll)
        .take(visible_height)
        .map(|(_, line)| line)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Lines of one card: title, body lines, creation date, and key hints on
/// the selected card. Owned, so `app` stays free for the scroll update.
fn card_lines(app: &App, todo: &Todo, is_cursor: bool, width: usize) -> Vec<Line<'static>> {
    let bg = if is_cursor {
        app.theme.card_bg
    } else {
        app.theme.background
    };
    let text_width = width.saturating_sub(4);

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let body_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines = vec![card_line(
        app,
        bg,
        is_cursor,
        width,
        vec![Span::styled(truncate_to_width(&todo.title, text_width), title_style)],
    )];

    for body_line in todo.text_lines() {
        lines.push(card_line(
            app,
            bg,
            is_cursor,
            width,
            vec![Span::styled(truncate_to_width(body_line, text_width), body_style)],
        ));
    }

    lines.push(card_line(
        app,
        bg,
        is_cursor,
        width,
        vec![Span::styled(
            format!("Created: {}", app.format_date(&todo.created_at)),
            dim_style,
        )],
    ));

    if is_cursor {
        let key_style = Style::default().fg(app.theme.highlight).bg(bg);
        lines.push(card_line(
            app,
            bg,
            is_cursor,
            width,
            vec![
                Span::styled("e", key_style),
                Span::styled(" Edit  ", dim_style),
                Span::styled("d", Style::default().fg(app.theme.red).bg(bg)),
                Span::styled(" Delete", dim_style),
            ],
        ));
    }

    lines
}

/// Prefix content with the selection bar and pad the selected card to full width
fn card_line<'a>(
    app: &App,
    bg: Color,
    is_cursor: bool,
    width: usize,
    content: Vec<Span<'a>>,
) -> Line<'a> {
    let bar = if is_cursor { "\u{258C}" } else { " " };
    let mut spans = vec![
        Span::styled(" ", Style::default().bg(app.theme.background)),
        Span::styled(bar, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    spans.extend(content);

    if is_cursor {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
    }
    Line::from(spans)
}

fn render_placeholder(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Your task list is empty",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Add your first task by pressing a",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
