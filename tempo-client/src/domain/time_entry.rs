use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A persisted record of time spent on a task within a bounded interval.
///
/// Entries are created client-side (stopwatch stop or manual form) with a
/// fresh id and never mutated afterwards. `duration` is whole minutes,
/// truncated toward zero at creation time: the stopwatch path truncates
/// `elapsed_seconds / 60`, the manual path truncates the timestamp
/// difference. `date` is the calendar day the entry is attributed to and
/// is user-supplied on the manual path, so it need not match the date
/// component of `start_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub duration: i64,
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl TimeEntry {
    /// Duration rendered the way the entries panel and the CSV export
    /// show it, e.g. `2h 15m`.
    pub fn format_duration(&self) -> String {
        format!("{}h {}m", self.duration / 60, self.duration % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "id": "e1",
            "taskId": "task_1",
            "userId": "user_1",
            "description": "API refactor",
            "startTime": "2024-06-01T09:00:00Z",
            "endTime": "2024-06-01T10:30:00Z",
            "duration": 90,
            "date": "2024-06-01"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.task_id, "task_1");
        assert_eq!(entry.duration, 90);
        assert_eq!(entry.date.to_string(), "2024-06-01");
        assert_eq!(entry.format_duration(), "1h 30m");
    }

    #[test]
    fn serializes_camel_case() {
        let entry = TimeEntry {
            id: "e1".to_string(),
            task_id: "task_1".to_string(),
            user_id: "user_1".to_string(),
            description: "No description".to_string(),
            start_time: time::macros::datetime!(2024-06-01 09:00 UTC),
            end_time: time::macros::datetime!(2024-06-01 09:45 UTC),
            duration: 45,
            date: time::macros::date!(2024 - 06 - 01),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["taskId"], "task_1");
        assert_eq!(value["date"], "2024-06-01");
        assert_eq!(value["startTime"], "2024-06-01T09:00:00Z");
    }
}
