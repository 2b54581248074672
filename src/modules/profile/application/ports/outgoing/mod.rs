mod profile_query;

pub use profile_query::{AboutQuery, ProfileQuery};
