use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::blog::application::ports::outgoing::BlogQuery;
use crate::modules::page::application::domain::views::BlogDetail;
use crate::modules::page::application::ports::incoming::use_cases::{
    BlogDetailUseCase, PageError,
};

pub struct BlogDetailService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> BlogDetailService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> BlogDetailUseCase for BlogDetailService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<BlogDetail, PageError> {
        if slug.trim().is_empty() {
            return Err(PageError::NotFound);
        }

        match self.query.get_by_slug(slug).await {
            Ok(post) => Ok(BlogDetail::from(post)),
            Err(err) if err.is_not_found() => {
                info!(slug, "Post not found");
                Err(PageError::NotFound)
            }
            Err(err) => {
                warn!(slug, error = %err, "Post lookup failed");
                Err(PageError::NotFound)
            }
        }
    }
}
