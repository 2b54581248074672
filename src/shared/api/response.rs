// src/shared/api/response.rs
use std::time::Duration;

use actix_web::{http::header, http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response that shared caches may keep for `window` and then
    /// serve stale while the page is regenerated.
    pub fn revalidated(data: T, window: Duration) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header((header::CACHE_CONTROL, cache_control(window)))
            .json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }
}

pub fn cache_control(window: Duration) -> String {
    format!(
        "public, s-maxage={}, stale-while-revalidate",
        window.as_secs()
    )
}
