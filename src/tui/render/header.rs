use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::greeting;
use crate::tui::app::App;
use crate::util::text::{display_width, truncate_to_width};

/// Render the greeting header: avatar badge, name, city, separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let profile = app.session.profile();

    let initials = profile.map(|p| p.initials()).unwrap_or_default();
    let badge = format!(" {} ", if initials.is_empty() { "?" } else { initials.as_str() });
    let badge_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let indent = 1 + display_width(&badge) + 1;

    let name = truncate_to_width(&greeting(profile), width.saturating_sub(indent));
    let mut lines = vec![Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(badge, badge_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            name,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    match profile.and_then(|p| p.city_title()) {
        Some(city) => lines.push(Line::from(vec![
            Span::styled(" ".repeat(indent), Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(city, width.saturating_sub(indent)),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ])),
        None => lines.push(Line::from("")),
    }

    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::MemoryBridge;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_without_profile() {
        let app = empty_app();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_header(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  ?  Hi, User");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "\u{2500}".repeat(TERM_W as usize));
    }

    #[test]
    fn header_with_profile() {
        let app = app_with_bridge(MemoryBridge::new().with_profile(ivan()));
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_header(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  IP  Hi, Ivan Petrov");
        assert_eq!(lines[1], "      Moscow");
    }
}
