use async_trait::async_trait;

use crate::modules::page::application::domain::views::BlogDetail;
use crate::modules::page::application::ports::incoming::use_cases::PageError;

#[async_trait]
pub trait BlogDetailUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<BlogDetail, PageError>;
}
