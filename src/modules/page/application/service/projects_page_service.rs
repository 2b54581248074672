use async_trait::async_trait;
use tracing::warn;

use crate::modules::page::application::domain::views::{ProjectCard, ProjectsPage};
use crate::modules::page::application::ports::incoming::use_cases::ProjectsPageUseCase;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::pagination::PageNumber;

pub struct ProjectsPageService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ProjectsPageService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ProjectsPageUseCase for ProjectsPageService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, page: PageNumber) -> ProjectsPage {
        match self.query.list(page).await {
            Ok(listing) => ProjectsPage {
                projects: listing.data.into_iter().map(ProjectCard::from).collect(),
                meta: listing.meta,
            },
            Err(err) => {
                warn!(page = page.get(), error = %err, "Project listing unavailable");
                ProjectsPage {
                    projects: vec![],
                    meta: None,
                }
            }
        }
    }
}
