use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content_api: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content API answers `GET /profile`
/// - A 4xx still counts as reachable
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let content_status = match data.content_probe.get_profile().await {
        Ok(_) => "ok",
        Err(err) if err.is_network() || err.status() >= 500 => {
            warn!(error = %err, "Content API is not ready");
            "unhealthy"
        }
        Err(_) => "ok",
    };

    if content_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_api: content_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content_api: content_status,
        })
    }
}
