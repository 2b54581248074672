use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::github::application::domain::entities::GithubStats;
use crate::modules::github::application::ports::incoming::use_cases::{
    GetGithubStatsError, GetGithubStatsUseCase,
};
use crate::modules::github::application::ports::outgoing::GithubApi;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GithubStatsService<G>
where
    G: GithubApi,
{
    api: G,
}

impl<G> GithubStatsService<G>
where
    G: GithubApi,
{
    pub fn new(api: G) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<G> GetGithubStatsUseCase for GithubStatsService<G>
where
    G: GithubApi + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<Option<GithubStats>, GetGithubStatsError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(None);
        }

        // 1. The user record is required; without it there are no stats at all.
        let user = match self.api.fetch_user(username).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                info!(username, "GitHub user lookup returned no user");
                return Ok(None);
            }
            Err(err) => {
                warn!(username, error = %err, "GitHub user lookup failed");
                return Ok(None);
            }
        };

        // 2. Repositories are required, contributions are best-effort.
        let (repos, contributions) = futures::join!(
            self.api.fetch_repos(username),
            self.api.fetch_contributions(username)
        );

        let (total_stars, total_forks) = repos?.totals();

        let total_contributions = match contributions {
            Ok(summary) => summary.total_contributions(),
            Err(err) => {
                warn!(username, error = %err, "Failed to fetch contributions");
                0
            }
        };

        Ok(Some(GithubStats {
            followers: user.followers,
            public_repos: user.public_repos,
            total_stars,
            total_forks,
            total_contributions,
            username: user.login,
            profile_url: user.html_url,
        }))
    }
}
