use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_timer_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        // Ctrl+C also quits
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        // Space toggles the stopwatch through start/pause/resume
        KeyCode::Char(' ') => match app.stopwatch.status {
            app::StopwatchStatus::Idle => app.start_timer(),
            app::StopwatchStatus::Running => app.pause_timer(),
            app::StopwatchStatus::Paused => app.resume_timer(),
        },
        // Stop goes through the action queue since it may persist
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if app.stopwatch.is_active() {
                enqueue_action(action_tx, Action::StopTimer);
            } else {
                app.notify_info("No timer is running");
            }
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.open_task_picker(app::PickerTarget::Stopwatch);
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.begin_description_edit();
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.navigate_to(app::View::ManualEntry);
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.export_report();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::RefreshData);
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_entries_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_entries_up(),
        _ => {}
    }
}
