//! Wire-contract tests: JSON key names, validation messages, and the SQL
//! the store issues, checked without a live database.

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;

use attendance_tracker::api::attendance::{CreateAttendance, validate};
use attendance_tracker::error::ApiError;
use attendance_tracker::model::{AttendanceRecord, AttendanceStatus};
use attendance_tracker::store;

fn record() -> AttendanceRecord {
    AttendanceRecord {
        id: 7,
        employee_name: "John Doe".to_string(),
        employee_id: "JO123".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        status: AttendanceStatus::Present,
        created_at: None,
    }
}

#[test]
fn record_serializes_with_the_wire_key_names() {
    let value = serde_json::to_value(record()).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["employeeName"], "John Doe");
    assert_eq!(value["employeeID"], "JO123");
    assert_eq!(value["date"], "2025-01-01");
    assert_eq!(value["status"], "Present");
}

#[test]
fn record_deserializes_from_the_wire_shape() {
    let record: AttendanceRecord = serde_json::from_value(json!({
        "id": 3,
        "employeeName": "Jane Smith",
        "employeeID": "JS456",
        "date": "2025-02-02",
        "status": "Absent",
        "created_at": null
    }))
    .unwrap();
    assert_eq!(record.id, 3);
    assert_eq!(record.employee_id, "JS456");
    assert_eq!(record.status, AttendanceStatus::Absent);
}

#[test]
fn create_payload_tolerates_missing_fields() {
    // Missing fields deserialize to empty strings so validation can answer
    // with the contract's "All fields are required" instead of a serde error.
    let payload: CreateAttendance = serde_json::from_value(json!({
        "employeeName": "John Doe"
    }))
    .unwrap();
    let err = validate(&payload).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "All fields are required");
}

#[test]
fn validation_errors_map_to_bad_request() {
    let payload: CreateAttendance = serde_json::from_value(json!({
        "employeeName": "John Doe",
        "employeeID": "JO123",
        "date": "2025-01-01",
        "status": "Sick"
    }))
    .unwrap();
    let err = validate(&payload).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Status must be Present or Absent");
}

#[test]
fn not_found_and_storage_keep_their_status_codes() {
    assert_eq!(
        ApiError::NotFound("Record not found").status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        ApiError::Storage(sqlx::Error::PoolClosed).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn list_sql_encodes_the_ordering_contract() {
    assert!(store::LIST_SQL.contains("ORDER BY date DESC, id DESC"));
}

#[test]
fn schema_sql_is_idempotent_and_constrains_status() {
    assert!(store::CREATE_TABLE_SQL.contains("IF NOT EXISTS"));
    assert!(store::CREATE_TABLE_SQL.contains("ENUM('Present', 'Absent')"));
    assert!(store::CREATE_TABLE_SQL.contains("AUTO_INCREMENT"));
}
