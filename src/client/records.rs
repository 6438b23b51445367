use chrono::NaiveDate;

use crate::client::api::ClientError;
use crate::model::AttendanceRecord;

/// Record-list filters. Client-side only: they narrow the already fetched
/// list and are never sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilters {
    /// Exact-match date filter.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring matched against name or employee id.
    pub search: String,
}

impl RecordFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn apply<'a>(&self, records: &'a [AttendanceRecord]) -> Vec<&'a AttendanceRecord> {
        let term = self.search.to_lowercase();
        records
            .iter()
            .filter(|r| self.matches_date(r) && matches_term(r, &term))
            .collect()
    }

    fn matches_date(&self, record: &AttendanceRecord) -> bool {
        self.date.is_none_or(|d| record.date == d)
    }
}

fn matches_term(record: &AttendanceRecord, term: &str) -> bool {
    term.is_empty()
        || record.employee_name.to_lowercase().contains(term)
        || record.employee_id.to_lowercase().contains(term)
}

/// Confirmation question asked before a delete is issued.
pub fn delete_prompt(record: &AttendanceRecord) -> String {
    format!(
        "Are you sure you want to delete the attendance record for {}?",
        record.employee_name
    )
}

/// Message shown when a delete fails; `ClientError` already carries the
/// server's error text when one was provided.
pub fn delete_error_message(err: &ClientError) -> String {
    format!("Error deleting record: {err}")
}
