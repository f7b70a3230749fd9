use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::text::truncate_to_width;

use super::centered_rect_fixed;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 8;

/// Render the delete confirmation dialog over the current view
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(id) = app.pending_delete.as_deref() else {
        return;
    };
    let title = app
        .session
        .todos()
        .get(id)
        .map(|t| t.title.as_str())
        .unwrap_or_default();

    let popup = centered_rect_fixed(POPUP_WIDTH, POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let block = Block::default()
        .title(Span::styled(
            " Delete ",
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let key = Style::default().fg(app.theme.highlight).bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this task?",
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        Line::from(Span::styled(
            format!(
                "\"{}\"",
                truncate_to_width(title, (inner.width as usize).saturating_sub(4))
            ),
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y/Enter", key),
            Span::styled(" yes   ", dim),
            Span::styled("n/Esc", key),
            Span::styled(" cancel", dim),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, app, area);
        })
    }

    #[test]
    fn shows_question_and_title() {
        let mut app = app_with_todos(&[("Buy milk", "")]);
        app.request_delete();
        let output = render(&app);
        assert!(output.contains("Delete"));
        assert!(output.contains("Are you sure you want to delete this task?"));
        assert!(output.contains("\"Buy milk\""));
        assert!(output.contains("y/Enter yes"));
        assert!(output.contains("n/Esc cancel"));
    }

    #[test]
    fn nothing_without_pending_delete() {
        let app = app_with_todos(&[("Buy milk", "")]);
        assert_eq!(render(&app), "");
    }
}
