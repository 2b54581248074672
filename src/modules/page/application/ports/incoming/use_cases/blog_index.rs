use async_trait::async_trait;

use crate::modules::page::application::domain::views::BlogIndexPage;
use crate::shared::pagination::PageNumber;

#[async_trait]
pub trait BlogIndexUseCase: Send + Sync {
    async fn execute(&self, page: PageNumber) -> BlogIndexPage;
}
