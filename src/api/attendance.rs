use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::{AttendanceRecord, AttendanceStatus};
use crate::store;

/// Create-attendance payload. All four fields arrive as strings and are
/// validated before anything touches the store; `#[serde(default)]` makes a
/// missing field indistinguishable from an empty one.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateAttendance {
    #[serde(default, rename = "employeeName")]
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[serde(default, rename = "employeeID")]
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[serde(default)]
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: String,
    #[serde(default)]
    #[schema(example = "Present")]
    pub status: String,
}

/// Payload after validation, with the typed values the store expects.
#[derive(Debug)]
pub struct ValidAttendance {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Validation for the create operation, in contract order: all fields
/// present, then the status enum, then the calendar date.
pub fn validate(payload: &CreateAttendance) -> Result<ValidAttendance, ApiError> {
    if payload.employee_name.is_empty()
        || payload.employee_id.is_empty()
        || payload.date.is_empty()
        || payload.status.is_empty()
    {
        return Err(ApiError::Validation("All fields are required"));
    }

    let status = payload
        .status
        .parse::<AttendanceStatus>()
        .map_err(|_| ApiError::Validation("Status must be Present or Absent"))?;

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Date must be a valid calendar date (YYYY-MM-DD)"))?;

    Ok(ValidAttendance { date, status })
}

/// List all attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All records, date descending then id descending", body = [AttendanceRecord]),
        (status = 500, description = "Storage failure", body = Object, example = json!({
            "error": "pool timed out while waiting for an open connection"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<MySqlPool>) -> Result<impl Responder, ApiError> {
    let records = store::list_records(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to fetch attendance records");
        ApiError::Storage(e)
    })?;

    Ok(HttpResponse::Ok().json(records))
}

/// Record attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = Object, example = json!({
            "message": "Attendance recorded successfully",
            "id": 42
        })),
        (status = 400, description = "Validation failure", body = Object, example = json!({
            "error": "All fields are required"
        })),
        (status = 500, description = "Storage failure")
    ),
    tag = "Attendance"
)]
pub async fn create_attendance(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateAttendance>,
) -> Result<impl Responder, ApiError> {
    let valid = validate(&payload)?;

    let id = store::insert_record(
        pool.get_ref(),
        &payload.employee_name,
        &payload.employee_id,
        valid.date,
        valid.status,
    )
    .await
    .map_err(|e| {
        error!(error = %e, employee_id = %payload.employee_id, "Failed to record attendance");
        ApiError::Storage(e)
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Attendance recorded successfully",
        "id": id
    })))
}

/// Delete an attendance record
#[utoipa::path(
    delete,
    path = "/api/attendance/{id}",
    params(
        ("id", Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = Object, example = json!({
            "message": "Attendance record deleted successfully"
        })),
        (status = 404, description = "No record with that id", body = Object, example = json!({
            "error": "Record not found"
        })),
        (status = 500, description = "Storage failure")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();

    let affected = store::delete_record(pool.get_ref(), id).await.map_err(|e| {
        error!(error = %e, id, "Failed to delete attendance record");
        ApiError::Storage(e)
    })?;

    if affected == 0 {
        return Err(ApiError::NotFound("Record not found"));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Attendance record deleted successfully"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, id: &str, date: &str, status: &str) -> CreateAttendance {
        CreateAttendance {
            employee_name: name.to_string(),
            employee_id: id.to_string(),
            date: date.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_payload() {
        let valid = validate(&payload("John Doe", "EMP-001", "2025-01-01", "Absent")).unwrap();
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(valid.status, AttendanceStatus::Absent);
    }

    #[test]
    fn rejects_any_empty_field() {
        for p in [
            payload("", "EMP-001", "2025-01-01", "Present"),
            payload("John Doe", "", "2025-01-01", "Present"),
            payload("John Doe", "EMP-001", "", "Present"),
            payload("John Doe", "EMP-001", "2025-01-01", ""),
        ] {
            let err = validate(&p).unwrap_err();
            assert_eq!(err.to_string(), "All fields are required");
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = validate(&payload("John Doe", "EMP-001", "2025-01-01", "Late")).unwrap_err();
        assert_eq!(err.to_string(), "Status must be Present or Absent");
    }

    #[test]
    fn status_check_is_case_sensitive() {
        let err = validate(&payload("John Doe", "EMP-001", "2025-01-01", "present")).unwrap_err();
        assert_eq!(err.to_string(), "Status must be Present or Absent");
    }

    #[test]
    fn missing_fields_win_over_bad_status() {
        let err = validate(&payload("", "EMP-001", "2025-01-01", "Late")).unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn rejects_a_date_that_does_not_parse() {
        let err = validate(&payload("John Doe", "EMP-001", "2025-02-31", "Present")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Date must be a valid calendar date (YYYY-MM-DD)"
        );
    }
}
