mod get_blog_detail;
mod get_blog_index;
mod get_home_page;
mod get_project_detail;
mod get_projects_page;

pub use get_blog_detail::get_blog_detail_handler;
pub use get_blog_index::get_blog_index_handler;
pub use get_home_page::get_home_page_handler;
pub use get_project_detail::get_project_detail_handler;
pub use get_projects_page::{get_projects_page_handler, PageQuery};
