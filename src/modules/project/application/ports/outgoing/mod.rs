mod project_query;

pub use project_query::ProjectQuery;
