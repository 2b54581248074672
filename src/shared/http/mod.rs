mod api_client;
mod api_error;

pub use api_client::{ApiClient, ApiPath, ExecutionContext, RequestOptions};
pub use api_error::ApiError;
