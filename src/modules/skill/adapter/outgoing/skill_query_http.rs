use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillsByCategory;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::http::{ApiClient, ApiError, ApiPath, RequestOptions};

#[derive(Clone)]
pub struct SkillQueryHttp {
    client: ApiClient,
}

impl SkillQueryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryHttp {
    async fn get_skills(&self) -> Result<SkillsByCategory, ApiError> {
        self.client
            .get_json(&ApiPath::new("skills"), RequestOptions::default())
            .await
    }
}
