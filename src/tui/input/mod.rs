mod confirm;
mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, View};

use confirm::handle_confirm;
use form::handle_form;
use list::handle_list;

/// Handle a key event for the current view
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    // The confirmation overlay intercepts all input
    if app.pending_delete.is_some() {
        handle_confirm(app, key);
        return;
    }

    match app.view {
        View::List => handle_list(app, key),
        View::Create | View::Edit { .. } => handle_form(app, key),
    }
}

/// Handle a bracketed paste: inserted into the focused form field, ignored
/// elsewhere. The title field turns newlines into spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.pending_delete.is_some() || text.is_empty() {
        return;
    }
    if let Some(form) = app.active_form_mut() {
        form.focused_mut().insert_str(text);
    }
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::tui::app::FormField;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = empty_app();
        app.open_create();
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn any_key_clears_status() {
        let mut app = empty_app();
        app.notify("hello");
        handle_key(&mut app, key(KeyCode::Down));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn paste_goes_to_focused_field() {
        let mut app = empty_app();
        handle_paste(&mut app, "ignored on list");
        app.open_create();
        handle_paste(&mut app, "Buy\nmilk");
        assert_eq!(app.create_form.title.text(), "Buy milk");
        app.create_form.focus = FormField::Text;
        handle_paste(&mut app, "line 1\nline 2");
        assert_eq!(app.create_form.text.text(), "line 1\nline 2");
    }

    #[test]
    fn full_keyboard_round_trip() {
        let mut app = empty_app();

        // add
        handle_key(&mut app, ch('a'));
        assert_eq!(app.view, View::Create);
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "2% milk");
        handle_key(&mut app, ctrl('s'));
        assert_eq!(app.view, View::List);
        assert_eq!(app.todos().len(), 1);
        assert_eq!(app.todos()[0].title, "Buy milk");
        assert_eq!(app.todos()[0].text, "2% milk");

        // edit
        handle_key(&mut app, ch('e'));
        assert!(matches!(app.view, View::Edit { .. }));
        handle_key(&mut app, key(KeyCode::Tab));
        for _ in 0.."2% milk".len() {
            handle_key(&mut app, key(KeyCode::Backspace));
        }
        type_str(&mut app, "skim milk");
        handle_key(&mut app, ctrl('s'));
        assert_eq!(app.view, View::List);
        assert_eq!(app.todos()[0].title, "Buy milk");
        assert_eq!(app.todos()[0].text, "skim milk");

        // delete
        handle_key(&mut app, ch('d'));
        assert!(app.pending_delete.is_some());
        handle_key(&mut app, ch('y'));
        assert!(app.pending_delete.is_none());
        assert!(app.todos().is_empty());
    }
}
