use actix_web::{get, web, Responder};

use crate::modules::page::application::domain::revalidate;
use crate::modules::page::application::ports::incoming::use_cases::PageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/pages/blog/{slug}")]
pub async fn get_blog_detail_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.pages.blog_detail.execute(&slug).await {
        Ok(post) => ApiResponse::revalidated(post, revalidate::BLOG_DETAIL),

        Err(PageError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
    }
}
