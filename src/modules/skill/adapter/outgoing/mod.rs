mod skill_query_http;

pub use skill_query_http::SkillQueryHttp;
