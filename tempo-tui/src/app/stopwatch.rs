use tempo_client::TimeEntry;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::time_utils::now_local;

/// Stopwatch runs shorter than this are discarded on stop instead of
/// persisted, so accidental timer runs don't pollute the entry history.
pub const MIN_ENTRY_MINUTES: i64 = 10;

pub const DEFAULT_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchStatus {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StopwatchError {
    #[error("Please select a task before starting the timer")]
    NoTaskSelected,
    #[error("Timer is already running")]
    AlreadyStarted,
    #[error("No timer is running")]
    NotRunning,
    #[error("Timer is not paused")]
    NotPaused,
}

/// Result of [`StopwatchSession::stop`]. Either branch leaves the session
/// fully reset; persistence of an `Entry` happens afterwards and its
/// outcome does not roll the session back.
#[derive(Debug, Clone, PartialEq)]
pub enum StopOutcome {
    /// Run was under [`MIN_ENTRY_MINUTES`]; nothing to persist.
    Discarded { minutes: i64 },
    /// Draft entry for the persistence collaborator.
    Entry(TimeEntry),
}

/// The single live tracking session: `Idle → Running → {Paused ⇄ Running}`,
/// with `stop` returning to `Idle` from either active state.
///
/// `elapsed_seconds` only advances through [`tick`](Self::tick), which the
/// event loop drives on a 1-second cadence while the status is `Running`.
/// `started_at` is captured once when the session leaves `Idle` and anchors
/// the persisted entry's `start_time`; it is not touched by pause/resume.
#[derive(Debug, Clone, PartialEq)]
pub struct StopwatchSession {
    pub status: StopwatchStatus,
    pub selected_task_id: String,
    pub description: String,
    pub started_at: Option<OffsetDateTime>,
    pub elapsed_seconds: u64,
}

impl Default for StopwatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwatchSession {
    pub fn new() -> Self {
        Self {
            status: StopwatchStatus::Idle,
            selected_task_id: String::new(),
            description: String::new(),
            started_at: None,
            elapsed_seconds: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status != StopwatchStatus::Idle
    }

    pub fn start(&mut self) -> Result<(), StopwatchError> {
        if self.status != StopwatchStatus::Idle {
            return Err(StopwatchError::AlreadyStarted);
        }
        if self.selected_task_id.is_empty() {
            return Err(StopwatchError::NoTaskSelected);
        }
        self.status = StopwatchStatus::Running;
        self.started_at = Some(now_local());
        self.elapsed_seconds = 0;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), StopwatchError> {
        if self.status != StopwatchStatus::Running {
            return Err(StopwatchError::NotRunning);
        }
        self.status = StopwatchStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), StopwatchError> {
        if self.status != StopwatchStatus::Paused {
            return Err(StopwatchError::NotPaused);
        }
        self.status = StopwatchStatus::Running;
        Ok(())
    }

    /// Advance the counter by one second. No-op unless `Running`.
    pub fn tick(&mut self) {
        if self.status == StopwatchStatus::Running {
            self.elapsed_seconds += 1;
        }
    }

    /// Stop from `Running` or `Paused`. Applies the minimum-duration
    /// policy and resets the whole session to `Idle` on both branches.
    pub fn stop(&mut self, user_id: &str) -> Result<StopOutcome, StopwatchError> {
        if self.status == StopwatchStatus::Idle {
            return Err(StopwatchError::NotRunning);
        }

        let end_time = now_local();
        let minutes = (self.elapsed_seconds / 60) as i64;
        let start_time = self
            .started_at
            .unwrap_or(end_time - Duration::seconds(self.elapsed_seconds as i64));

        let outcome = if minutes < MIN_ENTRY_MINUTES {
            StopOutcome::Discarded { minutes }
        } else {
            let description = if self.description.trim().is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                self.description.clone()
            };
            StopOutcome::Entry(TimeEntry {
                id: Uuid::new_v4().to_string(),
                task_id: self.selected_task_id.clone(),
                user_id: user_id.to_string(),
                description,
                start_time,
                end_time,
                duration: minutes,
                date: end_time.date(),
            })
        };

        *self = Self::new();
        Ok(outcome)
    }

    /// Elapsed time as zero-padded `HH:MM:SS`.
    pub fn format_elapsed(&self) -> String {
        let hours = self.elapsed_seconds / 3600;
        let minutes = (self.elapsed_seconds % 3600) / 60;
        let seconds = self.elapsed_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_session() -> StopwatchSession {
        let mut sw = StopwatchSession::new();
        sw.selected_task_id = "task_1".to_string();
        sw.start().unwrap();
        sw
    }

    fn tick_n(sw: &mut StopwatchSession, n: u64) {
        for _ in 0..n {
            sw.tick();
        }
    }

    #[test]
    fn start_requires_selected_task() {
        let mut sw = StopwatchSession::new();
        assert_eq!(sw.start(), Err(StopwatchError::NoTaskSelected));
        assert_eq!(sw.status, StopwatchStatus::Idle);
        assert_eq!(sw.elapsed_seconds, 0);
    }

    #[test]
    fn start_is_only_valid_from_idle() {
        let mut sw = running_session();
        assert_eq!(sw.start(), Err(StopwatchError::AlreadyStarted));
        sw.pause().unwrap();
        assert_eq!(sw.start(), Err(StopwatchError::AlreadyStarted));
    }

    #[test]
    fn ticking_is_monotonic_while_running() {
        let mut sw = running_session();
        tick_n(&mut sw, 42);
        assert_eq!(sw.elapsed_seconds, 42);
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let mut sw = running_session();
        tick_n(&mut sw, 5);
        sw.pause().unwrap();
        tick_n(&mut sw, 5); // paused interval contributes nothing
        assert_eq!(sw.elapsed_seconds, 5);
        sw.resume().unwrap();
        tick_n(&mut sw, 5);
        assert_eq!(sw.elapsed_seconds, 10);
    }

    #[test]
    fn pause_and_resume_reject_wrong_states() {
        let mut sw = StopwatchSession::new();
        assert_eq!(sw.pause(), Err(StopwatchError::NotRunning));
        assert_eq!(sw.resume(), Err(StopwatchError::NotPaused));

        let mut sw = running_session();
        assert_eq!(sw.resume(), Err(StopwatchError::NotPaused));
        sw.pause().unwrap();
        assert_eq!(sw.pause(), Err(StopwatchError::NotRunning));
    }

    #[test]
    fn short_runs_are_discarded() {
        let mut sw = running_session();
        tick_n(&mut sw, 9 * 60);
        match sw.stop("user_1").unwrap() {
            StopOutcome::Discarded { minutes } => assert_eq!(minutes, 9),
            other => panic!("expected discard, got {:?}", other),
        }
    }

    #[test]
    fn ten_minute_run_produces_entry() {
        let mut sw = running_session();
        sw.description = "fixing the build".to_string();
        tick_n(&mut sw, 10 * 60);
        match sw.stop("user_1").unwrap() {
            StopOutcome::Entry(entry) => {
                assert_eq!(entry.duration, 10);
                assert_eq!(entry.task_id, "task_1");
                assert_eq!(entry.user_id, "user_1");
                assert_eq!(entry.description, "fixing the build");
                assert!(entry.end_time >= entry.start_time);
            }
            other => panic!("expected entry, got {:?}", other),
        }
    }

    #[test]
    fn blank_description_gets_placeholder() {
        let mut sw = running_session();
        tick_n(&mut sw, 15 * 60);
        match sw.stop("user_1").unwrap() {
            StopOutcome::Entry(entry) => assert_eq!(entry.description, DEFAULT_DESCRIPTION),
            other => panic!("expected entry, got {:?}", other),
        }
    }

    #[test]
    fn seconds_are_truncated_to_whole_minutes() {
        let mut sw = running_session();
        tick_n(&mut sw, 10 * 60 + 59);
        match sw.stop("user_1").unwrap() {
            StopOutcome::Entry(entry) => assert_eq!(entry.duration, 10),
            other => panic!("expected entry, got {:?}", other),
        }
    }

    #[test]
    fn stop_resets_everything_on_both_branches() {
        // Discard branch
        let mut sw = running_session();
        sw.description = "short run".to_string();
        tick_n(&mut sw, 30);
        sw.stop("user_1").unwrap();
        assert_eq!(sw, StopwatchSession::new());

        // Persist branch (also valid from Paused)
        let mut sw = running_session();
        tick_n(&mut sw, 20 * 60);
        sw.pause().unwrap();
        sw.stop("user_1").unwrap();
        assert_eq!(sw, StopwatchSession::new());
    }

    #[test]
    fn stop_from_idle_is_rejected() {
        let mut sw = StopwatchSession::new();
        assert_eq!(sw.stop("user_1"), Err(StopwatchError::NotRunning));
    }

    #[test]
    fn elapsed_formats_zero_padded() {
        let mut sw = running_session();
        assert_eq!(sw.format_elapsed(), "00:00:00");
        tick_n(&mut sw, 3661);
        assert_eq!(sw.format_elapsed(), "01:01:01");
    }
}
