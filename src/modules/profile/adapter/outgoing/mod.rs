mod profile_query_http;

pub use profile_query_http::ProfileQueryHttp;
