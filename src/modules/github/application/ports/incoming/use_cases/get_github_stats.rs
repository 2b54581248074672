use async_trait::async_trait;

use crate::modules::github::application::domain::entities::GithubStats;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGithubStatsError {
    #[error("Repository listing failed: {0}")]
    RepositoryListingFailed(String),
}

impl From<ApiError> for GetGithubStatsError {
    fn from(err: ApiError) -> Self {
        GetGithubStatsError::RepositoryListingFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetGithubStatsUseCase: Send + Sync {
    /// `Ok(None)` when there is no user to report on.
    async fn execute(&self, username: &str) -> Result<Option<GithubStats>, GetGithubStatsError>;
}
