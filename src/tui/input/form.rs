use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, FormField};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => {
            app.back_to_list();
            return;
        }
        KeyCode::Char('s') if ctrl => {
            app.submit_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.active_form_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => form.toggle_focus(),
        KeyCode::Enter => match form.focus {
            FormField::Title => form.focus = FormField::Text,
            FormField::Text => form.text.insert_char('\n'),
        },
        KeyCode::Up => {
            if form.focus == FormField::Text && !form.text.move_up() {
                form.focus = FormField::Title;
            }
        }
        KeyCode::Down => match form.focus {
            FormField::Title => form.focus = FormField::Text,
            FormField::Text => {
                form.text.move_down();
            }
        },
        KeyCode::Backspace if ctrl || alt => form.focused_mut().delete_word(),
        KeyCode::Char('w') if ctrl => form.focused_mut().delete_word(),
        KeyCode::Backspace => form.focused_mut().backspace(),
        KeyCode::Delete => form.focused_mut().delete(),
        KeyCode::Left => form.focused_mut().move_left(),
        KeyCode::Right => form.focused_mut().move_right(),
        KeyCode::Home => form.focused_mut().move_home(),
        KeyCode::End => form.focused_mut().move_end(),
        KeyCode::Char('a') if ctrl => form.focused_mut().move_home(),
        KeyCode::Char('e') if ctrl => form.focused_mut().move_end(),
        KeyCode::Char(c) if !ctrl && !alt => form.focused_mut().insert_char(c),
        _ => {}
    }
}
