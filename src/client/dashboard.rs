use crate::model::{AttendanceRecord, AttendanceStatus};

/// Aggregates derived from the fetched record list. Read-only; nothing on
/// the dashboard mutates the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub attendance_rate: String,
    pub absence_rate: String,
}

impl DashboardStats {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let total = records.len();
        let present = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count();
        let absent = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Absent)
            .count();

        Self {
            total,
            present,
            absent,
            attendance_rate: rate(present, total),
            absence_rate: rate(absent, total),
        }
    }
}

/// Percentage to one decimal place; "0" before anything has been recorded.
fn rate(part: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{:.1}", part as f64 / total as f64 * 100.0)
}
