use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::model::{AttendanceRecord, AttendanceStatus};

pub const ATTENDANCE_TABLE: &str = "attendance";

// PRIMARY KEY implies NOT NULL and UNIQUE; AUTO_INCREMENT ids are never reused.
pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS attendance (
    id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
    employee_name VARCHAR(255) NOT NULL,
    employee_id VARCHAR(64) NOT NULL,
    date DATE NOT NULL,
    status ENUM('Present', 'Absent') NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

pub const LIST_SQL: &str = "SELECT id, employee_name, employee_id, date, status, created_at
    FROM attendance ORDER BY date DESC, id DESC";

pub const INSERT_SQL: &str =
    "INSERT INTO attendance (employee_name, employee_id, date, status) VALUES (?, ?, ?, ?)";

pub const DELETE_SQL: &str = "DELETE FROM attendance WHERE id = ?";

pub const PING_SQL: &str = "SELECT 1";

/// Create the attendance table when it does not exist yet.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE_SQL).execute(pool).await?;
    Ok(())
}

/// All records, newest date first; within a date, most recently created first.
pub async fn list_records(pool: &MySqlPool) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(LIST_SQL)
        .fetch_all(pool)
        .await
}

/// Insert a validated record and return the generated id.
pub async fn insert_record(
    pool: &MySqlPool,
    employee_name: &str,
    employee_id: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(INSERT_SQL)
        .bind(employee_name)
        .bind(employee_id)
        .bind(date)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(result.last_insert_id())
}

/// Delete by id, returning the number of rows affected (0 means no such id).
pub async fn delete_record(pool: &MySqlPool, id: u64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(DELETE_SQL).bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}

/// No-op query used by the health probe.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(PING_SQL).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_query_targets_attendance_table() {
        assert!(CREATE_TABLE_SQL.contains(ATTENDANCE_TABLE));
        assert!(CREATE_TABLE_SQL.contains("IF NOT EXISTS"));
    }

    #[test]
    fn status_column_is_constrained_to_two_values() {
        assert!(CREATE_TABLE_SQL.contains("ENUM('Present', 'Absent')"));
    }

    #[test]
    fn list_orders_by_date_then_id_descending() {
        assert!(LIST_SQL.contains("ORDER BY date DESC, id DESC"));
    }

    #[test]
    fn insert_never_supplies_generated_columns() {
        assert!(INSERT_SQL.contains("(employee_name, employee_id, date, status)"));
        assert!(!INSERT_SQL.contains("created_at"));
    }
}
