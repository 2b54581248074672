mod get_github_stats;

pub use get_github_stats::{GetGithubStatsError, GetGithubStatsUseCase};
