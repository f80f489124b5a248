//! Aggregates over the loaded entry set. Everything here is a pure
//! function of the entries (plus the current date where relevant) and is
//! recomputed on demand; nothing is cached.

use tempo_client::{Task, TimeEntry};
use time::Date;

/// Minutes tracked on exactly `today` — a calendar-day match on the
/// entry's attributed date, not a rolling 24-hour window.
pub fn minutes_today(entries: &[TimeEntry], today: Date) -> i64 {
    entries
        .iter()
        .filter(|e| e.date == today)
        .map(|e| e.duration)
        .sum()
}

/// Sum over every loaded entry. The UI shows this under a "This Week"
/// label, matching the source application, even though no calendar-week
/// filter is applied (see DESIGN.md: reproduced, not fixed).
pub fn minutes_all_loaded(entries: &[TimeEntry]) -> i64 {
    entries.iter().map(|e| e.duration).sum()
}

/// Fixed divisor of 7, regardless of how many distinct days are loaded.
pub fn average_per_day(entries: &[TimeEntry]) -> f64 {
    minutes_all_loaded(entries) as f64 / 7.0
}

pub fn as_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// Flattened report over all loaded entries, one row per entry, newest
/// ordering as displayed. Task titles resolve against the task list with
/// an `Unknown Task` fallback.
pub fn build_csv(entries: &[TimeEntry], tasks: &[Task]) -> String {
    let mut out = String::from("Date,Task,Description,Duration,Task Status\n");
    for entry in entries {
        let task = tasks.iter().find(|t| t.id == entry.task_id);
        let title = task.map(|t| t.title.as_str()).unwrap_or("Unknown Task");
        let status = task.map(|t| t.status.as_str()).unwrap_or("");
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            entry.date,
            title,
            entry.description,
            entry.format_duration(),
            status,
        ));
    }
    out
}

pub fn report_file_name(user_name: &str) -> String {
    format!("{}_report.csv", user_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_client::TaskStatus;
    use time::macros::{date, datetime};

    fn entry(id: &str, date: Date, duration: i64, task_id: &str) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            task_id: task_id.to_string(),
            user_id: "user_1".to_string(),
            description: "work".to_string(),
            start_time: datetime!(2024-06-01 09:00 UTC),
            end_time: datetime!(2024-06-01 10:00 UTC),
            duration,
            date,
        }
    }

    #[test]
    fn today_sums_exact_day_matches_only() {
        let today = date!(2024 - 06 - 01);
        let entries = vec![
            entry("a", today, 30, "task_1"),
            entry("b", today, 45, "task_1"),
            entry("c", today, 120, "task_1"),
            entry("d", date!(2024 - 05 - 31), 60, "task_1"),
        ];
        assert_eq!(minutes_today(&entries, today), 195);
    }

    #[test]
    fn week_total_is_every_loaded_entry() {
        let entries = vec![
            entry("a", date!(2024 - 06 - 01), 30, "task_1"),
            entry("b", date!(2024 - 05 - 01), 45, "task_1"),
            entry("c", date!(2024 - 01 - 01), 120, "task_1"),
        ];
        assert_eq!(minutes_all_loaded(&entries), 195);
    }

    #[test]
    fn average_divides_by_seven() {
        let entries = vec![
            entry("a", date!(2024 - 06 - 01), 30, "task_1"),
            entry("b", date!(2024 - 06 - 01), 45, "task_1"),
            entry("c", date!(2024 - 06 - 01), 120, "task_1"),
        ];
        let avg = average_per_day(&entries);
        assert!((avg - 195.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_set_aggregates_to_zero() {
        assert_eq!(minutes_today(&[], date!(2024 - 06 - 01)), 0);
        assert_eq!(minutes_all_loaded(&[]), 0);
        assert_eq!(average_per_day(&[]), 0.0);
    }

    #[test]
    fn csv_resolves_titles_and_falls_back() {
        let tasks = vec![Task {
            id: "task_1".to_string(),
            title: "API integration".to_string(),
            status: TaskStatus::InProgress,
            project_id: "proj_1".to_string(),
        }];
        let entries = vec![
            entry("a", date!(2024 - 06 - 01), 90, "task_1"),
            entry("b", date!(2024 - 06 - 01), 30, "task_gone"),
        ];

        let csv = build_csv(&entries, &tasks);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date,Task,Description,Duration,Task Status"));
        assert_eq!(
            lines.next(),
            Some("2024-06-01,API integration,work,1h 30m,IN_PROGRESS")
        );
        assert_eq!(lines.next(), Some("2024-06-01,Unknown Task,work,0h 30m,"));
    }

    #[test]
    fn report_file_name_uses_display_name() {
        assert_eq!(report_file_name("Ada Lovelace"), "Ada Lovelace_report.csv");
    }
}
