use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillsByCategory;
use crate::shared::http::ApiError;

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// `GET /skills`
    async fn get_skills(&self) -> Result<SkillsByCategory, ApiError>;
}
