use async_trait::async_trait;

use crate::modules::page::application::domain::views::ProjectDetail;
use crate::modules::page::application::ports::incoming::use_cases::PageError;

#[async_trait]
pub trait ProjectDetailUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ProjectDetail, PageError>;
}
