//! Seeded in-memory backend for `tempo dev` and for tests. There is no
//! transport underneath: writes land in a shared vec and reads clone it,
//! which is exactly what the client needs to exercise the create/refetch
//! cycle offline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use time::{Duration, OffsetDateTime, Time};

use crate::client::ApiError;
use crate::domain::{LoginResponse, Project, Task, TaskStatus, TimeEntry, User};

#[derive(Debug, Clone)]
pub struct MockBackend {
    entries: Arc<Mutex<Vec<TimeEntry>>>,
    fail_writes: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(seed_entries())),
            fail_writes: Arc::new(AtomicBool::new(false)),
            fail_reads: Arc::new(AtomicBool::new(false)),
        }
    }

    /// When set, `create_time_entry` fails with a response error. Used by
    /// tests to exercise persistence-failure handling.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// When set, `time_entries` fails with a response error. Used by tests
    /// to exercise refetch-failure handling after a successful write.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn login(&self) -> LoginResponse {
        LoginResponse {
            token: "dev-token".to_string(),
            user: dev_user(),
        }
    }

    pub fn users(&self) -> Vec<User> {
        vec![dev_user()]
    }

    pub fn projects(&self) -> Vec<Project> {
        vec![
            Project {
                id: "proj_1".to_string(),
                name: "Website Relaunch".to_string(),
                color: Some("#6366f1".to_string()),
            },
            Project {
                id: "proj_2".to_string(),
                name: "Mobile App".to_string(),
                color: Some("#f59e0b".to_string()),
            },
        ]
    }

    pub fn tasks(&self) -> Vec<Task> {
        vec![
            Task {
                id: "task_1".to_string(),
                title: "API integration".to_string(),
                status: TaskStatus::InProgress,
                project_id: "proj_1".to_string(),
            },
            Task {
                id: "task_2".to_string(),
                title: "Landing page copy".to_string(),
                status: TaskStatus::Todo,
                project_id: "proj_1".to_string(),
            },
            Task {
                id: "task_3".to_string(),
                title: "Push notifications".to_string(),
                status: TaskStatus::Review,
                project_id: "proj_2".to_string(),
            },
        ]
    }

    pub fn time_entries(&self) -> Result<Vec<TimeEntry>, ApiError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ApiError::Response(
                "GET /api/time-entry: simulated read failure".to_string(),
            ));
        }
        Ok(self.entries.lock().expect("mock store lock poisoned").clone())
    }

    pub fn create_time_entry(&self, entry: &TimeEntry) -> Result<TimeEntry, ApiError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ApiError::Response(
                "POST /api/time-entry/create: simulated write failure".to_string(),
            ));
        }
        self.entries
            .lock()
            .expect("mock store lock poisoned")
            .push(entry.clone());
        Ok(entry.clone())
    }
}

fn dev_user() -> User {
    User {
        id: "user_1".to_string(),
        email: "dev@localhost".to_string(),
        username: "dev".to_string(),
        name: "Dev User".to_string(),
        role: Some("MEMBER".to_string()),
    }
}

fn seed_entries() -> Vec<TimeEntry> {
    let now = OffsetDateTime::now_utc();
    let today = now.date();
    let yesterday = today - Duration::days(1);

    let entry = |idx: u32,
                 date: time::Date,
                 h_start: u8,
                 minutes: i64,
                 task_id: &str,
                 description: &str| {
        let start = OffsetDateTime::new_utc(
            date,
            Time::from_hms(h_start, 0, 0).expect("valid hour"),
        );
        TimeEntry {
            id: format!("dev-entry-{}", idx),
            task_id: task_id.to_string(),
            user_id: "user_1".to_string(),
            description: description.to_string(),
            start_time: start,
            end_time: start + Duration::minutes(minutes),
            duration: minutes,
            date,
        }
    };

    vec![
        entry(1, today, 8, 90, "task_1", "Wire up auth endpoints"),
        entry(2, today, 10, 45, "task_2", "Hero section draft"),
        entry(3, yesterday, 13, 120, "task_3", "APNs certificates"),
    ]
}
