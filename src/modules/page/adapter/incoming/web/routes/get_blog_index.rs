use actix_web::{get, web, Responder};

use crate::modules::page::adapter::incoming::web::routes::PageQuery;
use crate::modules::page::application::domain::revalidate;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageNumber;
use crate::AppState;

#[get("/api/pages/blog")]
pub async fn get_blog_index_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageNumber::from(query.into_inner());
    let view = data.pages.blog_index.execute(page).await;
    ApiResponse::revalidated(view, revalidate::BLOG)
}
