//! Terminal client for the attendance service: the same three views as the
//! web UI (dashboard, record form, record list), driven over the REST API.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Local;

use attendance_tracker::client::api::AttendanceApi;
use attendance_tracker::client::dashboard::DashboardStats;
use attendance_tracker::client::form::{AttendanceForm, SubmitResult};
use attendance_tracker::client::records::{self, RecordFilters};
use attendance_tracker::model::AttendanceRecord;

fn main() -> Result<()> {
    let base_url = std::env::var("ATTENDANCE_API_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());
    let api = AttendanceApi::new(base_url);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Attendance Employee System");
    match api.health() {
        Ok(health) => println!("Server {} (database {})", health.status, health.database),
        Err(e) => println!("Server unreachable: {e}"),
    }
    loop {
        println!();
        println!("[1] Dashboard  [2] Record Attendance  [3] View Attendance  [q] Quit");
        match prompt(&mut input, "> ")?.as_str() {
            "1" => show_dashboard(&api),
            "2" => record_attendance(&api, &mut input)?,
            "3" => view_attendance(&api, &mut input)?,
            "q" | "quit" => break,
            other => println!("Unknown option: {other}"),
        }
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn show_dashboard(api: &AttendanceApi) {
    let records = match api.list() {
        Ok(records) => records,
        Err(e) => {
            println!("Failed to load dashboard data: {e}");
            return;
        }
    };

    let stats = DashboardStats::from_records(&records);
    println!("Attendance Analytics Dashboard");
    println!("  Total Records:     {}", stats.total);
    println!("  Present Employees: {}", stats.present);
    println!("  Absent Employees:  {}", stats.absent);
    println!(
        "  Attendance rate: {}% | Absence rate: {}%",
        stats.attendance_rate, stats.absence_rate
    );
}

fn record_attendance(api: &AttendanceApi, input: &mut impl BufRead) -> Result<()> {
    let today = Local::now().date_naive();
    let mut form = AttendanceForm::new(today);

    form.employee_name = prompt(input, "Employee Name: ")?;
    form.employee_id = prompt(input, "Employee ID: ")?;

    let date = prompt(input, &format!("Date [{}]: ", form.date))?;
    if !date.is_empty() {
        match date.parse() {
            Ok(parsed) => form.date = parsed,
            Err(_) => {
                println!("Dates are entered as YYYY-MM-DD.");
                return Ok(());
            }
        }
    }

    let status = prompt(input, "Status (Present/Absent) [Present]: ")?;
    if !status.is_empty() {
        match status.parse() {
            Ok(parsed) => form.status = parsed,
            Err(_) => {
                println!("Status must be Present or Absent.");
                return Ok(());
            }
        }
    }

    match form.submit(api, Local::now().date_naive()) {
        SubmitResult::Success(message) => println!("{message}"),
        SubmitResult::Failure(message) => println!("{message}"),
    }
    Ok(())
}

fn view_attendance(api: &AttendanceApi, input: &mut impl BufRead) -> Result<()> {
    let mut records = match fetch(api) {
        Some(records) => records,
        None => return Ok(()),
    };
    let mut filters = RecordFilters::default();

    loop {
        render(&records, &filters);
        println!("Commands: date <YYYY-MM-DD> | search <term> | clear | refresh | delete <id> | back");
        let line = prompt(input, "> ")?;
        let (command, arg) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        match command {
            "date" => match arg.parse() {
                Ok(date) => filters.date = Some(date),
                Err(_) => println!("Dates are entered as YYYY-MM-DD."),
            },
            "search" => filters.search = arg.to_string(),
            "clear" => filters.clear(),
            "refresh" => {
                if let Some(fresh) = fetch(api) {
                    records = fresh;
                }
            }
            "delete" => {
                if let Some(fresh) = delete_record(api, input, &records, arg)? {
                    records = fresh;
                }
            }
            "back" | "" => break,
            other => println!("Unknown command: {other}"),
        }
    }
    Ok(())
}

fn fetch(api: &AttendanceApi) -> Option<Vec<AttendanceRecord>> {
    match api.list() {
        Ok(records) => Some(records),
        Err(e) => {
            println!("Failed to load attendance data. Please check if the server is running. ({e})");
            None
        }
    }
}

fn render(records: &[AttendanceRecord], filters: &RecordFilters) {
    let visible = filters.apply(records);
    println!();
    println!(
        "{:<6} {:<20} {:<12} {:<12} {:<8}",
        "ID", "Employee Name", "Employee ID", "Date", "Status"
    );
    for record in &visible {
        println!(
            "{:<6} {:<20} {:<12} {:<12} {:<8}",
            record.id, record.employee_name, record.employee_id, record.date, record.status
        );
    }
    println!("{} of {} record(s) shown", visible.len(), records.len());
}

/// Delete with the confirmation question; on success the list is re-fetched.
fn delete_record(
    api: &AttendanceApi,
    input: &mut impl BufRead,
    records: &[AttendanceRecord],
    arg: &str,
) -> Result<Option<Vec<AttendanceRecord>>> {
    let Ok(id) = arg.parse::<u64>() else {
        println!("delete takes a numeric record id");
        return Ok(None);
    };
    let Some(record) = records.iter().find(|r| r.id == id) else {
        println!("No listed record with id {id}");
        return Ok(None);
    };

    let answer = prompt(input, &format!("{} [y/N] ", records::delete_prompt(record)))?;
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(None);
    }

    match api.delete(id) {
        Ok(reply) => {
            println!("{}", reply.message);
            Ok(fetch(api))
        }
        Err(e) => {
            println!("{}", records::delete_error_message(&e));
            Ok(None)
        }
    }
}
