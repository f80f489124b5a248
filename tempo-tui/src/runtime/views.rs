use crate::app::{self, App};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod edit_description;
mod manual_entry;
mod select_task;
mod timer;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        app::View::Timer => timer::handle_timer_key(key, app, action_tx),
        app::View::SelectTask => select_task::handle_select_task_key(key, app),
        app::View::ManualEntry => manual_entry::handle_manual_entry_key(key, app, action_tx),
        app::View::EditDescription => edit_description::handle_edit_description_key(key, app),
    }
}
