use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tempo_client::{DataBundle, Project, Task, TimeEntry, User};

mod manual_entry;
mod report;
mod state;
mod stopwatch;

pub use manual_entry::{ManualEntryForm, ManualField};
pub use state::{PickerTarget, TextInput, Toast, ToastKind, View};
pub use stopwatch::{StopOutcome, StopwatchSession, StopwatchStatus, MIN_ENTRY_MINUTES};

use crate::time_utils::now_local;

/// The whole client state, owned by the event loop and mutated only
/// through the methods below. The per-frame render is the only observer.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub user: User,

    pub stopwatch: StopwatchSession,
    pub manual_entry: ManualEntryForm,

    // Last known-good server state, replaced wholesale on refetch
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
    pub time_entries: Vec<TimeEntry>,
    pub entries_scroll: usize,

    // Fuzzy task picker
    pub task_search_input: TextInput,
    pub filtered_tasks: Vec<Task>,
    pub filtered_task_index: usize,
    pub picker_target: PickerTarget,

    // Stopwatch description editor
    pub description_input: TextInput,

    pub toasts: Vec<Toast>,

    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(user: User) -> Self {
        Self {
            running: true,
            current_view: View::Timer,
            user,
            stopwatch: StopwatchSession::new(),
            manual_entry: ManualEntryForm::new(),
            projects: Vec::new(),
            tasks: Vec::new(),
            users: Vec::new(),
            time_entries: Vec::new(),
            entries_scroll: 0,
            task_search_input: TextInput::new(),
            filtered_tasks: Vec::new(),
            filtered_task_index: 0,
            picker_target: PickerTarget::Stopwatch,
            description_input: TextInput::new(),
            toasts: Vec::new(),
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Replace all loaded data with a freshly fetched bundle.
    pub fn update_data(&mut self, bundle: DataBundle) {
        let DataBundle {
            projects,
            tasks,
            users,
            mut time_entries,
        } = bundle;
        // Newest first: date desc, then start time desc within each date
        time_entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.start_time.cmp(&a.start_time))
        });
        self.projects = projects;
        self.tasks = tasks;
        self.users = users;
        self.time_entries = time_entries;
        self.entries_scroll = 0;
    }

    // Aggregates for the stats row, in hours

    pub fn hours_today(&self) -> f64 {
        report::as_hours(report::minutes_today(&self.time_entries, now_local().date()))
    }

    pub fn hours_week(&self) -> f64 {
        report::as_hours(report::minutes_all_loaded(&self.time_entries))
    }

    pub fn hours_avg_per_day(&self) -> f64 {
        report::average_per_day(&self.time_entries) / 60.0
    }

    pub fn task_title(&self, task_id: &str) -> &str {
        self.tasks
            .iter()
            .find(|t| t.id == task_id)
            .map(|t| t.title.as_str())
            .unwrap_or("Unknown Task")
    }

    pub fn project_for_task(&self, task_id: &str) -> Option<&Project> {
        let task = self.tasks.iter().find(|t| t.id == task_id)?;
        self.projects.iter().find(|p| p.id == task.project_id)
    }

    // Notifications

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Success, message.into()));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Error, message.into()));
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Info, message.into()));
    }

    pub fn prune_toasts(&mut self) {
        self.toasts.retain(|t| !t.expired());
    }

    pub fn latest_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    // Navigation

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        if view == View::SelectTask {
            self.task_search_input.clear();
            self.filtered_tasks = self.tasks.clone();
            self.filtered_task_index = 0;
        }
    }

    pub fn open_task_picker(&mut self, target: PickerTarget) {
        self.picker_target = target;
        self.navigate_to(View::SelectTask);
    }

    /// View to land on when the picker closes.
    fn picker_return_view(&self) -> View {
        match self.picker_target {
            PickerTarget::Stopwatch => View::Timer,
            PickerTarget::ManualEntry => View::ManualEntry,
        }
    }

    pub fn confirm_task_selection(&mut self) {
        if let Some(task) = self.filtered_tasks.get(self.filtered_task_index).cloned() {
            let title = task.title.clone();
            match self.picker_target {
                PickerTarget::Stopwatch => {
                    self.stopwatch.selected_task_id = task.id.clone();
                }
                PickerTarget::ManualEntry => {
                    self.manual_entry.task_id = task.id.clone();
                }
            }
            self.notify_info(format!("Selected task: {}", title));
        }
        let view = self.picker_return_view();
        self.navigate_to(view);
    }

    pub fn cancel_task_selection(&mut self) {
        let view = self.picker_return_view();
        self.navigate_to(view);
    }

    pub fn select_next_task(&mut self) {
        if !self.filtered_tasks.is_empty() {
            self.filtered_task_index = (self.filtered_task_index + 1) % self.filtered_tasks.len();
        }
    }

    pub fn select_previous_task(&mut self) {
        if !self.filtered_tasks.is_empty() {
            self.filtered_task_index = if self.filtered_task_index == 0 {
                self.filtered_tasks.len() - 1
            } else {
                self.filtered_task_index - 1
            };
        }
    }

    /// Filter tasks by fuzzy-matching the search input against titles.
    pub fn filter_tasks(&mut self) {
        if self.task_search_input.value.is_empty() {
            self.filtered_tasks = self.tasks.clone();
            self.filtered_task_index = 0;
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(Task, i64)> = self
            .tasks
            .iter()
            .filter_map(|task| {
                matcher
                    .fuzzy_match(&task.title, &self.task_search_input.value)
                    .map(|score| (task.clone(), score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        self.filtered_tasks = scored.into_iter().map(|(t, _)| t).collect();
        self.filtered_task_index = 0;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.task_search_input.insert(c);
        self.filter_tasks();
    }

    pub fn search_input_backspace(&mut self) {
        self.task_search_input.backspace();
        self.filter_tasks();
    }

    pub fn scroll_entries_down(&mut self) {
        if self.entries_scroll + 1 < self.time_entries.len() {
            self.entries_scroll += 1;
        }
    }

    pub fn scroll_entries_up(&mut self) {
        self.entries_scroll = self.entries_scroll.saturating_sub(1);
    }

    // Stopwatch transitions triggered from the timer view. Start, pause
    // and resume are purely local; stop goes through the action queue
    // because it may persist.

    pub fn start_timer(&mut self) {
        if let Err(e) = self.stopwatch.start() {
            self.notify_error(e.to_string());
        }
    }

    pub fn pause_timer(&mut self) {
        if let Err(e) = self.stopwatch.pause() {
            self.notify_error(e.to_string());
        }
    }

    pub fn resume_timer(&mut self) {
        if let Err(e) = self.stopwatch.resume() {
            self.notify_error(e.to_string());
        }
    }

    // Stopwatch description editor

    pub fn begin_description_edit(&mut self) {
        self.description_input = TextInput::from_str(&self.stopwatch.description);
        self.navigate_to(View::EditDescription);
    }

    pub fn confirm_description_edit(&mut self) {
        self.stopwatch.description = self.description_input.value.clone();
        self.navigate_to(View::Timer);
    }

    pub fn cancel_description_edit(&mut self) {
        self.navigate_to(View::Timer);
    }

    /// Write the CSV report next to the working directory, named after
    /// the user, and announce the outcome on the status line.
    pub fn export_report(&mut self) {
        let csv = report::build_csv(&self.time_entries, &self.tasks);
        let file_name = report::report_file_name(&self.user.name);
        match std::fs::write(&file_name, csv) {
            Ok(()) => self.notify_success(format!("Report exported to {}", file_name)),
            Err(e) => self.notify_error(format!("Failed to export report: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_client::TaskStatus;
    use time::macros::{date, datetime};

    fn test_user() -> User {
        User {
            id: "user_1".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            name: "Ada Lovelace".to_string(),
            role: None,
        }
    }

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            status: TaskStatus::Todo,
            project_id: "proj_1".to_string(),
        }
    }

    fn entry(id: &str, date: time::Date, duration: i64) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            task_id: "task_1".to_string(),
            user_id: "user_1".to_string(),
            description: "work".to_string(),
            start_time: datetime!(2024-06-01 09:00 UTC),
            end_time: datetime!(2024-06-01 10:00 UTC),
            duration,
            date,
        }
    }

    #[test]
    fn update_data_sorts_entries_newest_first() {
        let mut app = App::new(test_user());
        app.update_data(DataBundle {
            time_entries: vec![
                entry("old", date!(2024 - 05 - 01), 30),
                entry("new", date!(2024 - 06 - 02), 30),
                entry("mid", date!(2024 - 06 - 01), 30),
            ],
            ..Default::default()
        });
        let ids: Vec<&str> = app.time_entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn fuzzy_filter_narrows_tasks() {
        let mut app = App::new(test_user());
        app.tasks = vec![task("t1", "API integration"), task("t2", "Landing page")];
        app.navigate_to(View::SelectTask);
        assert_eq!(app.filtered_tasks.len(), 2);

        for c in "api".chars() {
            app.search_input_char(c);
        }
        assert_eq!(app.filtered_tasks.len(), 1);
        assert_eq!(app.filtered_tasks[0].id, "t1");
    }

    #[test]
    fn picker_writes_back_to_its_target() {
        let mut app = App::new(test_user());
        app.tasks = vec![task("t1", "API integration")];

        app.open_task_picker(PickerTarget::Stopwatch);
        app.confirm_task_selection();
        assert_eq!(app.stopwatch.selected_task_id, "t1");
        assert_eq!(app.current_view, View::Timer);

        app.open_task_picker(PickerTarget::ManualEntry);
        app.confirm_task_selection();
        assert_eq!(app.manual_entry.task_id, "t1");
        assert_eq!(app.current_view, View::ManualEntry);
    }

    #[test]
    fn start_without_task_surfaces_error_and_keeps_idle() {
        let mut app = App::new(test_user());
        app.start_timer();
        assert_eq!(app.stopwatch.status, StopwatchStatus::Idle);
        assert!(matches!(
            app.latest_toast().map(|t| t.kind),
            Some(ToastKind::Error)
        ));
    }

    #[test]
    fn unknown_task_resolves_to_placeholder() {
        let app = App::new(test_user());
        assert_eq!(app.task_title("nope"), "Unknown Task");
    }
}
