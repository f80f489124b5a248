use tempo_client::TimeEntry;
use thiserror::Error;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

use super::state::TextInput;
use super::stopwatch::DEFAULT_DESCRIPTION;
use crate::time_utils::local_offset;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManualEntryError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Invalid date (expected YYYY-MM-DD)")]
    InvalidDate,
    #[error("Invalid time (expected HH:MM)")]
    InvalidTime,
    #[error("End time must be after start time")]
    EndNotAfterStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    Task,
    Description,
    Date,
    StartTime,
    EndTime,
}

impl ManualField {
    pub fn next(self) -> Self {
        match self {
            ManualField::Task => ManualField::Description,
            ManualField::Description => ManualField::Date,
            ManualField::Date => ManualField::StartTime,
            ManualField::StartTime => ManualField::EndTime,
            ManualField::EndTime => ManualField::Task,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ManualField::Task => ManualField::EndTime,
            ManualField::Description => ManualField::Task,
            ManualField::Date => ManualField::Description,
            ManualField::StartTime => ManualField::Date,
            ManualField::EndTime => ManualField::StartTime,
        }
    }
}

/// The manual-entry form. Validation is ordered and short-circuits on the
/// first failure; every failure is local (no network call) and leaves the
/// typed input in place so the user can correct it. The form is cleared
/// only after the entry is confirmed persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntryForm {
    pub task_id: String,
    pub description: TextInput,
    pub date: TextInput,
    pub start_time: TextInput,
    pub end_time: TextInput,
    pub focused_field: ManualField,
}

impl Default for ManualEntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualEntryForm {
    pub fn new() -> Self {
        Self {
            task_id: String::new(),
            description: TextInput::new(),
            date: TextInput::new(),
            start_time: TextInput::new(),
            end_time: TextInput::new(),
            focused_field: ManualField::Task,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ManualField::Task => None,
            ManualField::Description => Some(&mut self.description),
            ManualField::Date => Some(&mut self.date),
            ManualField::StartTime => Some(&mut self.start_time),
            ManualField::EndTime => Some(&mut self.end_time),
        }
    }

    /// Resolve the form into a draft entry, or the first validation error.
    ///
    /// Duration is the truncated minute difference between the combined
    /// `date + start` and `date + end` timestamps and must be strictly
    /// positive. `date` on the resulting entry is the user-supplied
    /// calendar date, untouched by the duration math. No minimum-duration
    /// gate applies here: manual entries are trusted as deliberate.
    pub fn validate(&self, user_id: &str) -> Result<TimeEntry, ManualEntryError> {
        if self.task_id.is_empty()
            || self.date.value.trim().is_empty()
            || self.start_time.value.trim().is_empty()
            || self.end_time.value.trim().is_empty()
        {
            return Err(ManualEntryError::MissingFields);
        }

        let date = Date::parse(self.date.value.trim(), DATE_FORMAT)
            .map_err(|_| ManualEntryError::InvalidDate)?;
        let start_clock = Time::parse(self.start_time.value.trim(), CLOCK_FORMAT)
            .map_err(|_| ManualEntryError::InvalidTime)?;
        let end_clock = Time::parse(self.end_time.value.trim(), CLOCK_FORMAT)
            .map_err(|_| ManualEntryError::InvalidTime)?;

        let offset = local_offset();
        let start = PrimitiveDateTime::new(date, start_clock).assume_offset(offset);
        let end = PrimitiveDateTime::new(date, end_clock).assume_offset(offset);

        let diff_minutes = (end - start).whole_minutes();
        if diff_minutes <= 0 {
            return Err(ManualEntryError::EndNotAfterStart);
        }

        let description = if self.description.value.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            self.description.value.clone()
        };

        Ok(TimeEntry {
            id: Uuid::new_v4().to_string(),
            task_id: self.task_id.clone(),
            user_id: user_id.to_string(),
            description,
            start_time: start,
            end_time: end,
            duration: diff_minutes,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ManualEntryForm {
        let mut form = ManualEntryForm::new();
        form.task_id = "task_1".to_string();
        form.description = TextInput::from_str("standup notes");
        form.date = TextInput::from_str("2024-06-01");
        form.start_time = TextInput::from_str("09:00");
        form.end_time = TextInput::from_str("09:30");
        form
    }

    #[test]
    fn accepts_ordered_times() {
        let entry = filled_form().validate("user_1").unwrap();
        assert_eq!(entry.duration, 30);
        assert_eq!(entry.date.to_string(), "2024-06-01");
        assert_eq!(entry.description, "standup notes");
        assert_eq!(entry.user_id, "user_1");
    }

    #[test]
    fn rejects_end_before_start() {
        let mut form = filled_form();
        form.end_time = TextInput::from_str("08:59");
        assert_eq!(
            form.validate("user_1"),
            Err(ManualEntryError::EndNotAfterStart)
        );
    }

    #[test]
    fn rejects_equal_times() {
        let mut form = filled_form();
        form.end_time = TextInput::from_str("09:00");
        assert_eq!(
            form.validate("user_1"),
            Err(ManualEntryError::EndNotAfterStart)
        );
    }

    #[test]
    fn missing_task_fails_before_anything_else() {
        let mut form = filled_form();
        form.task_id.clear();
        // Even with an invalid date the missing-field gate fires first.
        form.date = TextInput::from_str("not-a-date");
        assert_eq!(form.validate("user_1"), Err(ManualEntryError::MissingFields));
    }

    #[test]
    fn missing_times_fail() {
        let mut form = filled_form();
        form.start_time.clear();
        assert_eq!(form.validate("user_1"), Err(ManualEntryError::MissingFields));
    }

    #[test]
    fn unparseable_input_is_a_local_error() {
        let mut form = filled_form();
        form.date = TextInput::from_str("06/01/2024");
        assert_eq!(form.validate("user_1"), Err(ManualEntryError::InvalidDate));

        let mut form = filled_form();
        form.end_time = TextInput::from_str("9.30");
        assert_eq!(form.validate("user_1"), Err(ManualEntryError::InvalidTime));
    }

    #[test]
    fn blank_description_gets_placeholder() {
        let mut form = filled_form();
        form.description.clear();
        let entry = form.validate("user_1").unwrap();
        assert_eq!(entry.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn validation_does_not_consume_the_form() {
        let form = filled_form();
        let _ = form.validate("user_1");
        // Form content survives validation; clearing is an explicit call
        // made only after persistence succeeds.
        assert_eq!(form.start_time.value, "09:00");
        let mut form = form;
        form.clear();
        assert_eq!(form, ManualEntryForm::new());
    }
}
