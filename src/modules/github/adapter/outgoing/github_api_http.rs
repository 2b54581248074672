use async_trait::async_trait;
use serde_json::Value;

use crate::config::GithubConfig;
use crate::modules::github::application::domain::entities::{
    ContributionSummary, GithubRepo, GithubUser, RepoListing,
};
use crate::modules::github::application::ports::outgoing::GithubApi;
use crate::shared::http::{ApiClient, ApiError, ApiPath, RequestOptions};

/// Number of repositories requested; GitHub's maximum page size.
pub const REPOS_PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("portfolio_site/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GithubApiHttp {
    github: ApiClient,
    contributions: ApiClient,
}

impl GithubApiHttp {
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            github: ApiClient::with_base_url(config.api_url.clone()),
            contributions: ApiClient::with_base_url(config.contributions_url.clone()),
        }
    }

    fn options() -> RequestOptions {
        RequestOptions::default().header("User-Agent", USER_AGENT)
    }
}

#[async_trait]
impl GithubApi for GithubApiHttp {
    async fn fetch_user(&self, username: &str) -> Result<Option<GithubUser>, ApiError> {
        let path = ApiPath::new("users").segment(username);
        match self.github.get_json(&path, Self::options()).await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Rejected { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn fetch_repos(&self, username: &str) -> Result<RepoListing, ApiError> {
        let path = ApiPath::new("users")
            .segment(username)
            .segment("repos")
            .query("per_page", REPOS_PER_PAGE);

        let body: Value = match self.github.get_json(&path, Self::options()).await {
            Ok(body) => body,
            Err(ApiError::Rejected { .. }) => return Ok(RepoListing::Unexpected),
            Err(err) => return Err(err),
        };

        match body {
            Value::Array(_) => {
                let repos: Vec<GithubRepo> =
                    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(RepoListing::Repos(repos))
            }
            _ => Ok(RepoListing::Unexpected),
        }
    }

    async fn fetch_contributions(&self, username: &str) -> Result<ContributionSummary, ApiError> {
        let path = ApiPath::new(username);
        self.contributions.get_json(&path, Self::options()).await
    }
}
