mod project_query_http;

pub use project_query_http::ProjectQueryHttp;
