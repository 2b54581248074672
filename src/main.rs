pub mod modules;
pub use modules::blog;
pub use modules::experience;
pub use modules::github;
pub use modules::page;
pub use modules::profile;
pub use modules::project;
pub use modules::skill;

pub mod config;
pub mod health;
pub mod interaction;
pub mod shared;

use crate::blog::adapter::outgoing::BlogQueryHttp;
use crate::config::SiteConfig;
use crate::experience::adapter::outgoing::ExperienceQueryHttp;
use crate::github::adapter::outgoing::GithubApiHttp;
use crate::github::application::service::GithubStatsService;
use crate::page::application::page_use_cases::PageUseCases;
use crate::page::application::service::{
    BlogDetailService, BlogIndexService, HomePageService, HomePageSources, ProjectDetailService,
    ProjectsPageService,
};
use crate::profile::adapter::outgoing::ProfileQueryHttp;
use crate::profile::application::ports::outgoing::ProfileQuery;
use crate::project::adapter::outgoing::ProjectQueryHttp;
use crate::shared::http::{ApiClient, ExecutionContext};
use crate::skill::adapter::outgoing::SkillQueryHttp;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub pages: PageUseCases,
    /// Used by the readiness probe.
    pub content_probe: Arc<dyn ProfileQuery + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = SiteConfig::from_env().context("Invalid site configuration")?;
    let server_url = config.bind_address();

    // Content API adapters share one client
    let client = ApiClient::new(&config.api, ExecutionContext::Server);
    info!(base_url = client.base_url(), "Content API");

    let profile_query = ProfileQueryHttp::new(client.clone());
    let project_query = ProjectQueryHttp::new(client.clone());
    let blog_query = BlogQueryHttp::new(client.clone());
    let skill_query = SkillQueryHttp::new(client.clone());
    let experience_query = ExperienceQueryHttp::new(client);

    // GitHub
    let github_stats = GithubStatsService::new(GithubApiHttp::new(&config.github));
    if config.github.username.is_none() {
        tracing::warn!("GITHUB_USERNAME is not set; GitHub stats are disabled");
    }

    let home = HomePageService::new(
        HomePageSources {
            profile: Arc::new(profile_query.clone()),
            about: Arc::new(profile_query.clone()),
            projects: Arc::new(project_query.clone()),
            skills: Arc::new(skill_query),
            experiences: Arc::new(experience_query),
            posts: Arc::new(blog_query.clone()),
            github: Arc::new(github_stats),
        },
        config.github.username.clone(),
        config.identity.clone(),
    );

    let state = AppState {
        pages: PageUseCases {
            home: Arc::new(home),
            projects: Arc::new(ProjectsPageService::new(project_query.clone())),
            project_detail: Arc::new(ProjectDetailService::new(project_query)),
            blog_index: Arc::new(BlogIndexService::new(blog_query.clone())),
            blog_detail: Arc::new(BlogDetailService::new(blog_query)),
        },
        content_probe: Arc::new(profile_query),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server stopped with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Pages
    cfg.service(crate::page::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::page::adapter::incoming::web::routes::get_projects_page_handler);
    cfg.service(crate::page::adapter::incoming::web::routes::get_project_detail_handler);
    cfg.service(crate::page::adapter::incoming::web::routes::get_blog_index_handler);
    cfg.service(crate::page::adapter::incoming::web::routes::get_blog_detail_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
