use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Attendance status, restricted to the same two labels the storage layer
/// enforces with its column enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, EnumString, Display, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One attendance row. Immutable after insertion; rows are only ever
/// created and deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: u64,
    #[serde(rename = "employeeName")]
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[serde(rename = "employeeID")]
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    pub created_at: Option<DateTime<Utc>>,
}
