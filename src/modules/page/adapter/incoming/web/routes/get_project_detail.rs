use actix_web::{get, web, Responder};

use crate::modules::page::application::domain::revalidate;
use crate::modules::page::application::ports::incoming::use_cases::PageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/pages/projects/{slug}")]
pub async fn get_project_detail_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.pages.project_detail.execute(&slug).await {
        Ok(project) => ApiResponse::revalidated(project, revalidate::PROJECT_DETAIL),

        Err(PageError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
