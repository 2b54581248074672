use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::shared::http::ApiError;

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// `GET /experiences`, a bare JSON array.
    async fn get_experiences(&self) -> Result<Vec<Experience>, ApiError>;
}
