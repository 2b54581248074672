pub mod api;
pub mod format;
pub mod http;
pub mod pagination;
pub mod serde_ext;
