mod response;

pub use response::{cache_control, ApiResponse};
