use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{About, Profile};
use crate::modules::profile::application::ports::outgoing::{AboutQuery, ProfileQuery};
use crate::shared::http::{ApiClient, ApiError, ApiPath, RequestOptions};

#[derive(Clone)]
pub struct ProfileQueryHttp {
    client: ApiClient,
}

impl ProfileQueryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryHttp {
    async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.client
            .get_json(&ApiPath::new("profile"), RequestOptions::default())
            .await
    }
}

#[async_trait]
impl AboutQuery for ProfileQueryHttp {
    async fn get_about(&self) -> Result<About, ApiError> {
        self.client
            .get_json(&ApiPath::new("about"), RequestOptions::default())
            .await
    }
}
