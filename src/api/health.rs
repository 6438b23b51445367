use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;

use crate::store;

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service info", body = Object, example = json!({
            "message": "Employee Attendance Tracker API is running!",
            "database": "MySQL",
            "version": "0.1.0"
        }))
    ),
    tag = "System"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Employee Attendance Tracker API is running!",
        "database": "MySQL",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Liveness probe: runs a no-op query against the store.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = Object, example = json!({
            "status": "OK",
            "database": "Connected",
            "timestamp": "2026-01-01T00:00:00Z"
        })),
        (status = 500, description = "Store unreachable", body = Object, example = json!({
            "status": "ERROR",
            "database": "Disconnected",
            "timestamp": "2026-01-01T00:00:00Z"
        }))
    ),
    tag = "System"
)]
#[get("/health")]
pub async fn health(pool: web::Data<MySqlPool>) -> impl Responder {
    match store::ping(pool.get_ref()).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "OK",
            "database": "Connected",
            "timestamp": Utc::now()
        })),
        Err(e) => {
            error!(error = %e, "Health check failed");
            HttpResponse::InternalServerError().json(json!({
                "status": "ERROR",
                "database": "Disconnected",
                "timestamp": Utc::now()
            }))
        }
    }
}
