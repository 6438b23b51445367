use derive_more::Display;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::api::attendance::CreateAttendance;
use crate::model::AttendanceRecord;

#[derive(Debug, Display)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad JSON).
    #[display(fmt = "{}", _0)]
    Http(reqwest::Error),
    /// Non-2xx reply; carries the server's `error` message when it sent one.
    #[display(fmt = "{}", _0)]
    Server(String),
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateReply {
    pub message: String,
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteReply {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthReply {
    pub status: String,
    pub database: String,
    pub timestamp: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the server's JSON `error` field from a failure body, falling
/// back to the HTTP status when the body carries no message.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Blocking REST client for the attendance service.
pub struct AttendanceApi {
    base_url: String,
    http: Client,
}

impl AttendanceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn expect_ok(resp: Response) -> Result<Response, ClientError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().unwrap_or_default();
        Err(ClientError::Server(error_message(status, &body)))
    }

    pub fn list(&self) -> Result<Vec<AttendanceRecord>, ClientError> {
        let resp = self.http.get(self.url("/api/attendance")).send()?;
        Ok(Self::expect_ok(resp)?.json()?)
    }

    pub fn create(&self, payload: &CreateAttendance) -> Result<CreateReply, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/attendance"))
            .json(payload)
            .send()?;
        Ok(Self::expect_ok(resp)?.json()?)
    }

    pub fn delete(&self, id: u64) -> Result<DeleteReply, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/attendance/{id}")))
            .send()?;
        Ok(Self::expect_ok(resp)?.json()?)
    }

    pub fn health(&self) -> Result<HealthReply, ClientError> {
        let resp = self.http.get(self.url("/health")).send()?;
        Ok(Self::expect_ok(resp)?.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_server_error_field() {
        let msg = error_message(404, r#"{"error":"Record not found"}"#);
        assert_eq!(msg, "Record not found");
    }

    #[test]
    fn falls_back_to_the_status_code() {
        assert_eq!(
            error_message(500, "<html>gateway</html>"),
            "Request failed with status 500"
        );
        assert_eq!(
            error_message(400, r#"{"message":"no error key"}"#),
            "Request failed with status 400"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed_from_the_base_url() {
        let api = AttendanceApi::new("http://localhost:5000/");
        assert_eq!(api.url("/api/attendance"), "http://localhost:5000/api/attendance");
    }
}
