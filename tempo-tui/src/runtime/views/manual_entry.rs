use crate::app::{self, App, ManualField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_manual_entry_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        // Ctrl+S submits from any field
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::SubmitManualEntry);
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.manual_entry.focused_input_mut() {
                input.clear();
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.manual_entry.focused_field = app.manual_entry.focused_field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.manual_entry.focused_field = app.manual_entry.focused_field.prev();
        }
        KeyCode::Enter => match app.manual_entry.focused_field {
            ManualField::Task => app.open_task_picker(app::PickerTarget::ManualEntry),
            ManualField::EndTime => enqueue_action(action_tx, Action::SubmitManualEntry),
            _ => app.manual_entry.focused_field = app.manual_entry.focused_field.next(),
        },
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.manual_entry.focused_input_mut() {
                input.insert(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.manual_entry.focused_input_mut() {
                input.backspace();
            }
        }
        KeyCode::Left => {
            if let Some(input) = app.manual_entry.focused_input_mut() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.manual_entry.focused_input_mut() {
                input.move_right();
            }
        }
        KeyCode::Esc => app.navigate_to(app::View::Timer),
        _ => {}
    }
}
