use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::shared::http::ApiError;
use crate::shared::pagination::{PageNumber, Paginated};

#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// `GET /posts?page={page}`
    async fn list(&self, page: PageNumber) -> Result<Paginated<BlogPost>, ApiError>;

    /// `GET /posts/{slug}`
    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, ApiError>;

    async fn all_slugs(&self) -> Result<Vec<String>, ApiError> {
        let page = self.list(PageNumber::FIRST).await?;
        Ok(page.data.into_iter().map(|post| post.slug).collect())
    }
}
