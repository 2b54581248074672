use std::sync::Arc;

use crate::modules::page::application::ports::incoming::use_cases::{
    BlogDetailUseCase, BlogIndexUseCase, HomePageUseCase, ProjectDetailUseCase,
    ProjectsPageUseCase,
};

#[derive(Clone)]
pub struct PageUseCases {
    pub home: Arc<dyn HomePageUseCase + Send + Sync>,
    pub projects: Arc<dyn ProjectsPageUseCase + Send + Sync>,
    pub project_detail: Arc<dyn ProjectDetailUseCase + Send + Sync>,
    pub blog_index: Arc<dyn BlogIndexUseCase + Send + Sync>,
    pub blog_detail: Arc<dyn BlogDetailUseCase + Send + Sync>,
}
