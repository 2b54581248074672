use async_trait::async_trait;
use tracing::warn;

use crate::modules::blog::application::ports::outgoing::BlogQuery;
use crate::modules::page::application::domain::views::{BlogCard, BlogIndexPage};
use crate::modules::page::application::ports::incoming::use_cases::BlogIndexUseCase;
use crate::shared::pagination::PageNumber;

pub struct BlogIndexService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> BlogIndexService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> BlogIndexUseCase for BlogIndexService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, page: PageNumber) -> BlogIndexPage {
        match self.query.list(page).await {
            Ok(listing) => BlogIndexPage {
                posts: listing.data.into_iter().map(BlogCard::from).collect(),
                meta: listing.meta,
            },
            Err(err) => {
                warn!(page = page.get(), error = %err, "Blog listing unavailable");
                BlogIndexPage {
                    posts: vec![],
                    meta: None,
                }
            }
        }
    }
}
