use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::shared::http::{ApiClient, ApiError, ApiPath, RequestOptions};

#[derive(Clone)]
pub struct ExperienceQueryHttp {
    client: ApiClient,
}

impl ExperienceQueryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryHttp {
    async fn get_experiences(&self) -> Result<Vec<Experience>, ApiError> {
        self.client
            .get_json(&ApiPath::new("experiences"), RequestOptions::default())
            .await
    }
}
