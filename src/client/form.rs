use chrono::NaiveDate;

use crate::api::attendance::CreateAttendance;
use crate::client::api::AttendanceApi;
use crate::model::AttendanceStatus;

/// Outcome of a form submission. `Success` also tells the caller that
/// dependent views should refresh their record lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Success(String),
    Failure(String),
}

/// Input state for the record-attendance view. Date defaults to the
/// caller-supplied "today", status to Present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_name: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_name: String::new(),
            employee_id: String::new(),
            date: today,
            status: AttendanceStatus::Present,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// The wire payload for the current inputs.
    pub fn payload(&self) -> CreateAttendance {
        CreateAttendance {
            employee_name: self.employee_name.clone(),
            employee_id: self.employee_id.clone(),
            date: self.date.format("%Y-%m-%d").to_string(),
            status: self.status.to_string(),
        }
    }

    /// Submit through the REST client. Success clears the inputs back to
    /// defaults with a fresh "today"; failure leaves them intact so the
    /// user can correct and retry.
    pub fn submit(&mut self, api: &AttendanceApi, today: NaiveDate) -> SubmitResult {
        let name = self.employee_name.clone();
        match api.create(&self.payload()) {
            Ok(_) => {
                self.reset(today);
                SubmitResult::Success(format!("Attendance recorded successfully for {name}"))
            }
            Err(_) => {
                SubmitResult::Failure("Failed to record attendance. Please try again.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn defaults_to_today_and_present() {
        let form = AttendanceForm::new(today());
        assert!(form.employee_name.is_empty());
        assert!(form.employee_id.is_empty());
        assert_eq!(form.date, today());
        assert_eq!(form.status, AttendanceStatus::Present);
    }

    #[test]
    fn reset_restores_defaults_with_the_new_today() {
        let mut form = AttendanceForm::new(today());
        form.employee_name = "John Doe".to_string();
        form.employee_id = "EMP-001".to_string();
        form.status = AttendanceStatus::Absent;

        let next_day = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        form.reset(next_day);
        assert_eq!(form, AttendanceForm::new(next_day));
    }

    #[test]
    fn payload_serializes_date_and_status_as_strings() {
        let mut form = AttendanceForm::new(today());
        form.employee_name = "John Doe".to_string();
        form.employee_id = "EMP-001".to_string();

        let payload = form.payload();
        assert_eq!(payload.date, "2025-06-15");
        assert_eq!(payload.status, "Present");
    }
}
