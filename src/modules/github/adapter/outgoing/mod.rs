mod github_api_http;

pub use github_api_http::GithubApiHttp;
