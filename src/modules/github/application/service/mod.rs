mod github_stats_service;

pub use github_stats_service::GithubStatsService;
