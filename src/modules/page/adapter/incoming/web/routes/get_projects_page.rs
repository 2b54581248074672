use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::modules::page::application::domain::revalidate;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageNumber;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

/// `page` is kept as raw text so that `?page=-1` or `?page=abc` still
/// reach the handler and read as the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl From<PageQuery> for PageNumber {
    fn from(q: PageQuery) -> Self {
        q.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(|page| u32::try_from(page).ok())
            .map(PageNumber::new)
            .unwrap_or_default()
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/api/pages/projects")]
pub async fn get_projects_page_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageNumber::from(query.into_inner());
    let view = data.pages.projects.execute(page).await;
    ApiResponse::revalidated(view, revalidate::PROJECTS)
}
