mod project;
mod task;
mod time_entry;
mod user;

pub use project::Project;
pub use task::{Task, TaskStatus};
pub use time_entry::TimeEntry;
pub use user::{LoginResponse, User};

/// Everything the client loads in one go. The TUI refetches the whole
/// bundle after each successful write instead of patching lists in place,
/// so the aggregate views always reflect the last known-good server state.
#[derive(Debug, Clone, Default)]
pub struct DataBundle {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
    pub time_entries: Vec<TimeEntry>,
}
