mod blog_detail_service;
mod blog_index_service;
mod home_page_service;
mod project_detail_service;
mod projects_page_service;

pub use blog_detail_service::BlogDetailService;
pub use blog_index_service::BlogIndexService;
pub use home_page_service::{HomePageService, HomePageSources};
pub use project_detail_service::ProjectDetailService;
pub use projects_page_service::ProjectsPageService;
