use crate::modules::page::application::page_use_cases::PageUseCases;
use crate::modules::page::application::ports::incoming::use_cases::{
    BlogDetailUseCase, BlogIndexUseCase, HomePageUseCase, ProjectDetailUseCase,
    ProjectsPageUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::tests::support::fixtures::sample_profile;
use crate::tests::support::mocks::MockProfileQuery;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    home: Arc<dyn HomePageUseCase + Send + Sync>,
    projects: Arc<dyn ProjectsPageUseCase + Send + Sync>,
    project_detail: Arc<dyn ProjectDetailUseCase + Send + Sync>,
    blog_index: Arc<dyn BlogIndexUseCase + Send + Sync>,
    blog_detail: Arc<dyn BlogDetailUseCase + Send + Sync>,
    content_probe: Arc<dyn ProfileQuery + Send + Sync>,
}

fn reachable_content_probe() -> MockProfileQuery {
    let mut probe = MockProfileQuery::new();
    probe.expect_get_profile().returning(|| Ok(sample_profile()));
    probe
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            home: Arc::new(StubHomePage::empty()),
            projects: Arc::new(StubProjectsPage::empty()),
            project_detail: Arc::new(StubProjectDetail::not_found()),
            blog_index: Arc::new(StubBlogIndex::empty()),
            blog_detail: Arc::new(StubBlogDetail::not_found()),
            content_probe: Arc::new(reachable_content_probe()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_home(mut self, uc: impl HomePageUseCase + Send + Sync + 'static) -> Self {
        self.home = Arc::new(uc);
        self
    }

    pub fn with_projects_page(mut self, uc: Arc<dyn ProjectsPageUseCase + Send + Sync>) -> Self {
        self.projects = uc;
        self
    }

    pub fn with_project_detail(
        mut self,
        uc: impl ProjectDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project_detail = Arc::new(uc);
        self
    }

    pub fn with_blog_index(mut self, uc: Arc<dyn BlogIndexUseCase + Send + Sync>) -> Self {
        self.blog_index = uc;
        self
    }

    pub fn with_blog_detail(mut self, uc: impl BlogDetailUseCase + Send + Sync + 'static) -> Self {
        self.blog_detail = Arc::new(uc);
        self
    }

    pub fn with_content_probe(mut self, probe: impl ProfileQuery + Send + Sync + 'static) -> Self {
        self.content_probe = Arc::new(probe);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            pages: PageUseCases {
                home: self.home,
                projects: self.projects,
                project_detail: self.project_detail,
                blog_index: self.blog_index,
                blog_detail: self.blog_detail,
            },
            content_probe: self.content_probe,
        })
    }
}
