// Hand-written doubles for ports that take arguments, and default page use
// cases for the app state builder.
use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::BlogQuery;
use crate::modules::github::application::domain::entities::GithubStats;
use crate::modules::github::application::ports::incoming::use_cases::{
    GetGithubStatsError, GetGithubStatsUseCase,
};
use crate::modules::page::application::domain::views::{
    BlogDetail, BlogIndexPage, HomePage, ProjectDetail, ProjectsPage, SkillsSection,
};
use crate::modules::page::application::ports::incoming::use_cases::{
    BlogDetailUseCase, BlogIndexUseCase, HomePageUseCase, PageError, ProjectDetailUseCase,
    ProjectsPageUseCase,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::http::ApiError;
use crate::shared::pagination::{PageNumber, Paginated};

pub fn network_error() -> ApiError {
    ApiError::network("connection refused")
}

pub fn not_found_error() -> ApiError {
    ApiError::Rejected {
        status: 404,
        status_text: "Not Found".to_string(),
    }
}

/* --------------------------------------------------
 * Content ports
 * -------------------------------------------------- */

pub struct StubProjectQuery {
    list: Result<Paginated<Project>, ApiError>,
    detail: Result<Project, ApiError>,
    pub requested_pages: Mutex<Vec<u32>>,
    pub requested_slugs: Mutex<Vec<String>>,
}

impl StubProjectQuery {
    pub fn listing(list: Result<Paginated<Project>, ApiError>) -> Self {
        Self {
            list,
            detail: Err(not_found_error()),
            requested_pages: Mutex::new(Vec::new()),
            requested_slugs: Mutex::new(Vec::new()),
        }
    }

    pub fn detail(detail: Result<Project, ApiError>) -> Self {
        Self {
            detail,
            ..Self::listing(Ok(Paginated::default()))
        }
    }
}

#[async_trait]
impl ProjectQuery for StubProjectQuery {
    async fn list(&self, page: PageNumber) -> Result<Paginated<Project>, ApiError> {
        self.requested_pages.lock().unwrap().push(page.get());
        self.list.clone()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ApiError> {
        self.requested_slugs.lock().unwrap().push(slug.to_string());
        self.detail.clone()
    }
}

pub struct StubBlogQuery {
    list: Result<Paginated<BlogPost>, ApiError>,
    detail: Result<BlogPost, ApiError>,
    pub requested_pages: Mutex<Vec<u32>>,
    pub requested_slugs: Mutex<Vec<String>>,
}

impl StubBlogQuery {
    pub fn listing(list: Result<Paginated<BlogPost>, ApiError>) -> Self {
        Self {
            list,
            detail: Err(not_found_error()),
            requested_pages: Mutex::new(Vec::new()),
            requested_slugs: Mutex::new(Vec::new()),
        }
    }

    pub fn detail(detail: Result<BlogPost, ApiError>) -> Self {
        Self {
            detail,
            ..Self::listing(Ok(Paginated::default()))
        }
    }
}

#[async_trait]
impl BlogQuery for StubBlogQuery {
    async fn list(&self, page: PageNumber) -> Result<Paginated<BlogPost>, ApiError> {
        self.requested_pages.lock().unwrap().push(page.get());
        self.list.clone()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, ApiError> {
        self.requested_slugs.lock().unwrap().push(slug.to_string());
        self.detail.clone()
    }
}

pub struct StubGithubStats {
    result: Result<Option<GithubStats>, GetGithubStatsError>,
    pub requested: Mutex<Vec<String>>,
}

impl StubGithubStats {
    pub fn returning(result: Result<Option<GithubStats>, GetGithubStatsError>) -> Self {
        Self {
            result,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GetGithubStatsUseCase for StubGithubStats {
    async fn execute(&self, username: &str) -> Result<Option<GithubStats>, GetGithubStatsError> {
        self.requested.lock().unwrap().push(username.to_string());
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Page use cases
 * -------------------------------------------------- */

pub struct StubHomePage(pub HomePage);

impl StubHomePage {
    pub fn empty() -> Self {
        Self(HomePage {
            profile: None,
            about: None,
            projects: vec![],
            skills: SkillsSection::default(),
            experiences: vec![],
            posts: vec![],
            github: None,
            display_name: "IchwalM".to_string(),
            contact_email: "contact@example.com".to_string(),
        })
    }
}

#[async_trait]
impl HomePageUseCase for StubHomePage {
    async fn execute(&self) -> HomePage {
        self.0.clone()
    }
}

pub struct StubProjectsPage {
    page: ProjectsPage,
    pub requested: Mutex<Vec<u32>>,
}

impl StubProjectsPage {
    pub fn new(page: ProjectsPage) -> Self {
        Self {
            page,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(ProjectsPage {
            projects: vec![],
            meta: None,
        })
    }
}

#[async_trait]
impl ProjectsPageUseCase for StubProjectsPage {
    async fn execute(&self, page: PageNumber) -> ProjectsPage {
        self.requested.lock().unwrap().push(page.get());
        self.page.clone()
    }
}

pub struct StubProjectDetail(pub Result<ProjectDetail, PageError>);

impl StubProjectDetail {
    pub fn not_found() -> Self {
        Self(Err(PageError::NotFound))
    }
}

#[async_trait]
impl ProjectDetailUseCase for StubProjectDetail {
    async fn execute(&self, _slug: &str) -> Result<ProjectDetail, PageError> {
        self.0.clone()
    }
}

pub struct StubBlogIndex {
    page: BlogIndexPage,
    pub requested: Mutex<Vec<u32>>,
}

impl StubBlogIndex {
    pub fn new(page: BlogIndexPage) -> Self {
        Self {
            page,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(BlogIndexPage {
            posts: vec![],
            meta: None,
        })
    }
}

#[async_trait]
impl BlogIndexUseCase for StubBlogIndex {
    async fn execute(&self, page: PageNumber) -> BlogIndexPage {
        self.requested.lock().unwrap().push(page.get());
        self.page.clone()
    }
}

pub struct StubBlogDetail(pub Result<BlogDetail, PageError>);

impl StubBlogDetail {
    pub fn not_found() -> Self {
        Self(Err(PageError::NotFound))
    }
}

#[async_trait]
impl BlogDetailUseCase for StubBlogDetail {
    async fn execute(&self, _slug: &str) -> Result<BlogDetail, PageError> {
        self.0.clone()
    }
}
