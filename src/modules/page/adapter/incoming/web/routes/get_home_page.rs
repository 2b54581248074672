use actix_web::{get, web, Responder};

use crate::modules::page::application::domain::revalidate;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/pages/home")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    let page = data.pages.home.execute().await;
    ApiResponse::revalidated(page, revalidate::HOME)
}
