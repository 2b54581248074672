use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::serde_ext::null_as_default;

/// Subset of `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub following: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubRepo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks_count: u64,
}

/// Body of the repository listing. GitHub answers errors and rate limits with
/// an object instead of a list; that case is kept apart instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoListing {
    Repos(Vec<GithubRepo>),
    Unexpected,
}

impl RepoListing {
    /// `(total_stars, total_forks)`
    pub fn totals(&self) -> (u64, u64) {
        match self {
            RepoListing::Repos(repos) => repos.iter().fold((0, 0), |(stars, forks), repo| {
                (stars + repo.stargazers_count, forks + repo.forks_count)
            }),
            RepoListing::Unexpected => (0, 0),
        }
    }
}

/// Contribution calendar summary: `{ "total": { "2023": 512, "2024": 230 }, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContributionSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: BTreeMap<String, serde_json::Value>,
}

impl ContributionSummary {
    /// Sum over all years; non-numeric entries count as zero.
    pub fn total_contributions(&self) -> u64 {
        self.total.values().filter_map(serde_json::Value::as_u64).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubStats {
    pub followers: u64,
    pub public_repos: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_contributions: u64,
    pub username: String,
    pub profile_url: String,
}
