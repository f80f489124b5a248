use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_edit_description_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.description_input.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.description_input.insert(c);
        }
        KeyCode::Backspace => app.description_input.backspace(),
        KeyCode::Left => app.description_input.move_left(),
        KeyCode::Right => app.description_input.move_right(),
        KeyCode::Home => app.description_input.home(),
        KeyCode::End => app.description_input.end(),
        KeyCode::Enter => app.confirm_description_edit(),
        KeyCode::Esc => app.cancel_description_edit(),
        _ => {}
    }
}
