mod blog_query_http;

pub use blog_query_http::BlogQueryHttp;
