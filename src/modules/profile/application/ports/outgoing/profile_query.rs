use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{About, Profile};
use crate::shared::http::ApiError;

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// `GET /profile`
    async fn get_profile(&self) -> Result<Profile, ApiError>;
}

#[async_trait]
pub trait AboutQuery: Send + Sync {
    /// `GET /about`
    async fn get_about(&self) -> Result<About, ApiError>;
}
