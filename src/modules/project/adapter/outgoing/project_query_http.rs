use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::http::{ApiClient, ApiError, ApiPath, RequestOptions};
use crate::shared::pagination::{DataEnvelope, PageNumber, Paginated};

#[derive(Clone)]
pub struct ProjectQueryHttp {
    client: ApiClient,
}

impl ProjectQueryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryHttp {
    async fn list(&self, page: PageNumber) -> Result<Paginated<Project>, ApiError> {
        let path = ApiPath::new("projects").query("page", page.get());
        self.client.get_json(&path, RequestOptions::default()).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ApiError> {
        let path = ApiPath::new("projects").segment(slug);
        let envelope: DataEnvelope<Project> =
            self.client.get_json(&path, RequestOptions::default()).await?;
        Ok(envelope.data)
    }
}
