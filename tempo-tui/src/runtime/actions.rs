use tempo_client::{ApiClient, ApiError};

use crate::app::{App, StopOutcome, View, MIN_ENTRY_MINUTES};

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, client: &ApiClient) {
    match action {
        Action::StopTimer => stop_timer(app, client).await,
        Action::SubmitManualEntry => submit_manual_entry(app, client).await,
        Action::RefreshData => {
            let _ = refresh_data(app, client).await;
        }
    }
}

/// Stop the stopwatch and persist the resulting entry. The session is
/// reset the moment `stop` returns, so a failed write loses the elapsed
/// time rather than resurrecting the timer.
async fn stop_timer(app: &mut App, client: &ApiClient) {
    let user_id = app.user.id.clone();
    match app.stopwatch.stop(&user_id) {
        Err(err) => app.notify_error(err.to_string()),
        Ok(StopOutcome::Discarded { .. }) => {
            app.notify_info(format!(
                "Entry not saved (less than {MIN_ENTRY_MINUTES} minutes)"
            ));
        }
        Ok(StopOutcome::Entry(entry)) => {
            app.is_loading = true;
            match client.create_time_entry(&entry).await {
                // A failed refetch has already posted its own error toast;
                // no success message on top of it.
                Ok(_) => {
                    if refresh_data(app, client).await.is_ok() {
                        app.notify_success("Time entry saved!");
                    }
                }
                Err(err) => app.notify_error(format!("Failed to save time entry: {err}")),
            }
            app.is_loading = false;
        }
    }
}

/// Validate the manual entry form and persist it. Validation failures
/// surface as a toast and leave the form untouched for correction.
async fn submit_manual_entry(app: &mut App, client: &ApiClient) {
    let user_id = app.user.id.clone();
    match app.manual_entry.validate(&user_id) {
        Err(err) => app.notify_error(err.to_string()),
        Ok(entry) => {
            app.is_loading = true;
            match client.create_time_entry(&entry).await {
                // The form clears only once the saved entry is known to be
                // back in the loaded set; a failed refetch keeps it.
                Ok(_) => {
                    if refresh_data(app, client).await.is_ok() {
                        app.manual_entry.clear();
                        app.notify_success("Manual time entry added!");
                        app.navigate_to(View::Timer);
                    }
                }
                Err(err) => app.notify_error(format!("Failed to add manual entry: {err}")),
            }
            app.is_loading = false;
        }
    }
}

pub(super) async fn refresh_data(app: &mut App, client: &ApiClient) -> Result<(), ApiError> {
    match client.fetch_bundle().await {
        Ok(bundle) => {
            app.update_data(bundle);
            Ok(())
        }
        Err(err) => {
            app.notify_error(format!("Failed to refresh data: {err}"));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ManualField, StopwatchStatus, ToastKind};

    async fn dev_app() -> (App, ApiClient) {
        let client = ApiClient::dev();
        let login = client
            .login("dev@example.com", "password")
            .await
            .expect("dev login");
        let mut app = App::new(login.user);
        refresh_data(&mut app, &client).await.expect("seed fetch");
        (app, client)
    }

    #[tokio::test]
    async fn stopping_after_ten_minutes_persists_the_entry() {
        let (mut app, client) = dev_app().await;
        let before = app.time_entries.len();

        app.stopwatch.selected_task_id = "task_1".to_string();
        app.start_timer();
        for _ in 0..600 {
            app.stopwatch.tick();
        }
        run_action(Action::StopTimer, &mut app, &client).await;

        assert_eq!(app.time_entries.len(), before + 1);
        let saved = app
            .time_entries
            .iter()
            .find(|e| e.task_id == "task_1" && e.duration == 10)
            .expect("persisted entry");
        assert_eq!(saved.user_id, app.user.id);
        assert_eq!(app.stopwatch.status, StopwatchStatus::Idle);
        assert_eq!(app.stopwatch.elapsed_seconds, 0);
        assert_eq!(app.latest_toast().unwrap().kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn short_runs_are_discarded_without_a_write() {
        let (mut app, client) = dev_app().await;
        let before = app.time_entries.len();

        app.stopwatch.selected_task_id = "task_1".to_string();
        app.start_timer();
        for _ in 0..599 {
            app.stopwatch.tick();
        }
        run_action(Action::StopTimer, &mut app, &client).await;

        assert_eq!(app.time_entries.len(), before);
        assert_eq!(app.stopwatch.status, StopwatchStatus::Idle);
        assert_eq!(app.latest_toast().unwrap().kind, ToastKind::Info);
    }

    #[tokio::test]
    async fn failed_write_still_resets_the_stopwatch() {
        let (mut app, client) = dev_app().await;
        let before = app.time_entries.len();
        client.mock_backend().unwrap().set_fail_writes(true);

        app.stopwatch.selected_task_id = "task_2".to_string();
        app.start_timer();
        for _ in 0..900 {
            app.stopwatch.tick();
        }
        run_action(Action::StopTimer, &mut app, &client).await;

        // The elapsed time is gone even though the server rejected it.
        assert_eq!(app.stopwatch.status, StopwatchStatus::Idle);
        assert_eq!(app.stopwatch.elapsed_seconds, 0);
        assert_eq!(app.time_entries.len(), before);
        assert_eq!(app.latest_toast().unwrap().kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn refetch_failure_after_save_shows_the_error_not_success() {
        let (mut app, client) = dev_app().await;

        app.stopwatch.selected_task_id = "task_1".to_string();
        app.start_timer();
        for _ in 0..600 {
            app.stopwatch.tick();
        }
        client.mock_backend().unwrap().set_fail_reads(true);
        run_action(Action::StopTimer, &mut app, &client).await;

        // The write itself succeeded, but the user must see the refetch
        // failure, with no success toast on top of it.
        assert_eq!(app.latest_toast().unwrap().kind, ToastKind::Error);
        assert!(!app.toasts.iter().any(|t| t.kind == ToastKind::Success));
        assert_eq!(app.stopwatch.status, StopwatchStatus::Idle);
    }

    #[tokio::test]
    async fn manual_refetch_failure_keeps_the_form() {
        let (mut app, client) = dev_app().await;

        app.manual_entry.task_id = "task_3".to_string();
        app.manual_entry.date.set("2026-03-02");
        app.manual_entry.start_time.set("09:15");
        app.manual_entry.end_time.set("09:45");
        client.mock_backend().unwrap().set_fail_reads(true);
        run_action(Action::SubmitManualEntry, &mut app, &client).await;

        assert_eq!(app.latest_toast().unwrap().kind, ToastKind::Error);
        assert!(!app.toasts.iter().any(|t| t.kind == ToastKind::Success));
        assert_eq!(app.manual_entry.task_id, "task_3");
        assert_eq!(app.manual_entry.date.value, "2026-03-02");
    }

    #[tokio::test]
    async fn manual_entry_with_missing_fields_never_reaches_the_server() {
        let (mut app, client) = dev_app().await;
        let before = app.time_entries.len();

        app.manual_entry.date.set("2026-03-02");
        app.manual_entry.start_time.set("09:00");
        app.manual_entry.end_time.set("10:00");
        // No task selected
        run_action(Action::SubmitManualEntry, &mut app, &client).await;

        assert_eq!(app.time_entries.len(), before);
        assert_eq!(
            app.latest_toast().unwrap().message,
            "Please fill all fields"
        );
        // Form keeps what the user typed
        assert_eq!(app.manual_entry.date.value, "2026-03-02");
    }

    #[tokio::test]
    async fn valid_manual_entry_is_saved_and_the_form_cleared() {
        let (mut app, client) = dev_app().await;
        let before = app.time_entries.len();

        app.manual_entry.task_id = "task_3".to_string();
        app.manual_entry.date.set("2026-03-02");
        app.manual_entry.start_time.set("09:15");
        app.manual_entry.end_time.set("09:45");
        app.manual_entry.focused_field = ManualField::EndTime;
        run_action(Action::SubmitManualEntry, &mut app, &client).await;

        assert_eq!(app.time_entries.len(), before + 1);
        let saved = app
            .time_entries
            .iter()
            .find(|e| e.task_id == "task_3" && e.duration == 30)
            .expect("saved entry");
        assert_eq!(saved.user_id, app.user.id);
        assert!(app.manual_entry.task_id.is_empty());
        assert_eq!(app.manual_entry.focused_field, ManualField::Task);
        assert_eq!(app.current_view, View::Timer);
    }
}
