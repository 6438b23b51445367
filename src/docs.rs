use crate::api::attendance::CreateAttendance;
use crate::model::{AttendanceRecord, AttendanceStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Attendance Tracker API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Tracker

A minimal attendance tracker: record, list, and delete attendance entries
backed by a single MySQL table.

### Operations
- **List** all records, newest date first
- **Create** a record after validating the four input fields
- **Delete** a record by id

Records are immutable once created; there is no update endpoint.

### Response Format
JSON throughout; failures carry an `error` field with the reason.
"#,
    ),
    paths(
        crate::api::attendance::list_attendance,
        crate::api::attendance::create_attendance,
        crate::api::attendance::delete_attendance,
        crate::api::health::index,
        crate::api::health::health,
    ),
    components(
        schemas(
            AttendanceRecord,
            AttendanceStatus,
            CreateAttendance
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance record APIs"),
        (name = "System", description = "Service banner and health probe"),
    )
)]
pub struct ApiDoc;
