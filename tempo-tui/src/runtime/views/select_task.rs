use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_select_task_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.task_search_input.clear();
            app.filter_tasks();
        }
        // Everything printable feeds the fuzzy search
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c);
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Down => app.select_next_task(),
        KeyCode::Up => app.select_previous_task(),
        KeyCode::Enter => app.confirm_task_selection(),
        KeyCode::Esc => app.cancel_task_selection(),
        _ => {}
    }
}
