use async_trait::async_trait;

use crate::modules::page::application::domain::views::ProjectsPage;
use crate::shared::pagination::PageNumber;

#[async_trait]
pub trait ProjectsPageUseCase: Send + Sync {
    async fn execute(&self, page: PageNumber) -> ProjectsPage;
}
