use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::shared::http::ApiError;
use crate::shared::pagination::{PageNumber, Paginated};

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// `GET /projects?page={page}`
    async fn list(&self, page: PageNumber) -> Result<Paginated<Project>, ApiError>;

    /// `GET /projects/{slug}`
    async fn get_by_slug(&self, slug: &str) -> Result<Project, ApiError>;

    /// Slugs on the first page of the listing.
    async fn all_slugs(&self) -> Result<Vec<String>, ApiError> {
        let page = self.list(PageNumber::FIRST).await?;
        Ok(page.data.into_iter().map(|project| project.slug).collect())
    }
}
