mod experience_query;

pub use experience_query::ExperienceQuery;
