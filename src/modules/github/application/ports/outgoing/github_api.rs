use async_trait::async_trait;

use crate::modules::github::application::domain::entities::{
    ContributionSummary, GithubUser, RepoListing,
};
use crate::shared::http::ApiError;

#[async_trait]
pub trait GithubApi: Send + Sync {
    /// `Ok(None)` when GitHub answers with a non-success status.
    async fn fetch_user(&self, username: &str) -> Result<Option<GithubUser>, ApiError>;

    /// First page of up to 100 public repositories. Anything past that is not
    /// counted.
    async fn fetch_repos(&self, username: &str) -> Result<RepoListing, ApiError>;

    /// Third-party contribution calendar; not an official GitHub API.
    async fn fetch_contributions(&self, username: &str) -> Result<ContributionSummary, ApiError>;
}
