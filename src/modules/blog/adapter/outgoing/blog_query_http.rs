use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::BlogQuery;
use crate::shared::http::{ApiClient, ApiError, ApiPath, RequestOptions};
use crate::shared::pagination::{DataEnvelope, PageNumber, Paginated};

#[derive(Clone)]
pub struct BlogQueryHttp {
    client: ApiClient,
}

impl BlogQueryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlogQuery for BlogQueryHttp {
    async fn list(&self, page: PageNumber) -> Result<Paginated<BlogPost>, ApiError> {
        let path = ApiPath::new("posts").query("page", page.get());
        self.client.get_json(&path, RequestOptions::default()).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, ApiError> {
        let path = ApiPath::new("posts").segment(slug);
        let envelope: DataEnvelope<BlogPost> =
            self.client.get_json(&path, RequestOptions::default()).await?;
        Ok(envelope.data)
    }
}
