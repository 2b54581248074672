mod experience_query_http;

pub use experience_query_http::ExperienceQueryHttp;
