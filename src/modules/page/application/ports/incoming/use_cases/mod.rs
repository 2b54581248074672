mod blog_detail;
mod blog_index;
mod home_page;
mod page_error;
mod project_detail;
mod projects_page;

pub use blog_detail::BlogDetailUseCase;
pub use blog_index::BlogIndexUseCase;
pub use home_page::HomePageUseCase;
pub use page_error::PageError;
pub use project_detail::ProjectDetailUseCase;
pub use projects_page::ProjectsPageUseCase;
