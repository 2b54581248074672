use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::page::application::domain::views::ProjectDetail;
use crate::modules::page::application::ports::incoming::use_cases::{
    PageError, ProjectDetailUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct ProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ProjectDetailUseCase for ProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ProjectDetail, PageError> {
        if slug.trim().is_empty() {
            return Err(PageError::NotFound);
        }

        match self.query.get_by_slug(slug).await {
            Ok(project) => Ok(ProjectDetail::from(project)),
            Err(err) if err.is_not_found() => {
                info!(slug, "Project not found");
                Err(PageError::NotFound)
            }
            Err(err) => {
                warn!(slug, error = %err, "Project lookup failed");
                Err(PageError::NotFound)
            }
        }
    }
}
