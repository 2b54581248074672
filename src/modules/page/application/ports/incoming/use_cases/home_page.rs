use async_trait::async_trait;

use crate::modules::page::application::domain::views::HomePage;

#[async_trait]
pub trait HomePageUseCase: Send + Sync {
    /// Never fails; every section degrades to an empty or absent value.
    async fn execute(&self) -> HomePage;
}
