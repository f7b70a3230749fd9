use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.should_quit = true,

        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => app.move_cursor(1),
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => app.move_cursor(-1),
        (_, KeyCode::PageDown) => app.move_cursor(5),
        (_, KeyCode::PageUp) => app.move_cursor(-5),
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => {
            app.cursor = app.todos().len().saturating_sub(1);
        }

        (KeyModifiers::NONE, KeyCode::Char('a')) => app.open_create(),
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => app.open_edit(),
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => app.request_delete(),
        _ => {}
    }
}
