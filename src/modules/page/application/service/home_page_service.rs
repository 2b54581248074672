use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::SiteIdentity;
use crate::modules::blog::application::ports::outgoing::BlogQuery;
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::github::application::domain::entities::GithubStats;
use crate::modules::github::application::ports::incoming::use_cases::GetGithubStatsUseCase;
use crate::modules::page::application::domain::views::{
    BlogCard, ExperienceEntry, HomePage, ProjectCard, SkillsSection, HOME_POST_LIMIT,
    HOME_PROJECT_LIMIT,
};
use crate::modules::page::application::ports::incoming::use_cases::HomePageUseCase;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::{AboutQuery, ProfileQuery};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::http::ApiError;
use crate::shared::pagination::PageNumber;

/// Everything the home page reads from.
#[derive(Clone)]
pub struct HomePageSources {
    pub profile: Arc<dyn ProfileQuery>,
    pub about: Arc<dyn AboutQuery>,
    pub projects: Arc<dyn ProjectQuery>,
    pub skills: Arc<dyn SkillQuery>,
    pub experiences: Arc<dyn ExperienceQuery>,
    pub posts: Arc<dyn BlogQuery>,
    pub github: Arc<dyn GetGithubStatsUseCase>,
}

pub struct HomePageService {
    sources: HomePageSources,
    github_username: Option<String>,
    identity: SiteIdentity,
}

impl HomePageService {
    pub fn new(
        sources: HomePageSources,
        github_username: Option<String>,
        identity: SiteIdentity,
    ) -> Self {
        Self {
            sources,
            github_username,
            identity,
        }
    }

    async fn github_stats(&self) -> Option<GithubStats> {
        let username = self.github_username.as_deref()?;
        match self.sources.github.execute(username).await {
            Ok(stats) => stats,
            Err(err) => {
                warn!(section = "github", error = %err, "Home page section unavailable");
                None
            }
        }
    }

    fn display_name(&self, profile: Option<&Profile>) -> String {
        profile
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.identity.owner_name.clone())
    }

    fn contact_email(&self, profile: Option<&Profile>) -> String {
        profile
            .and_then(Profile::contact_email)
            .map(str::to_string)
            .unwrap_or_else(|| self.identity.contact_email.clone())
    }
}

/// Logs a failed section fetch and drops the error.
fn recover<T>(section: &'static str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(section, status = err.status(), error = %err, "Home page section unavailable");
            None
        }
    }
}

#[async_trait]
impl HomePageUseCase for HomePageService {
    async fn execute(&self) -> HomePage {
        let s = &self.sources;

        let (profile, about, projects, skills, experiences, posts, github) = futures::join!(
            s.profile.get_profile(),
            s.about.get_about(),
            s.projects.list(PageNumber::FIRST),
            s.skills.get_skills(),
            s.experiences.get_experiences(),
            s.posts.list(PageNumber::FIRST),
            self.github_stats(),
        );

        let profile = recover("profile", profile);
        let about = recover("about", about);
        let projects = recover("projects", projects).unwrap_or_default();
        let skills = recover("skills", skills).unwrap_or_default();
        let experiences = recover("experiences", experiences).unwrap_or_default();
        let posts = recover("posts", posts).unwrap_or_default();

        debug!(
            projects = projects.data.len(),
            posts = posts.data.len(),
            has_profile = profile.is_some(),
            has_github = github.is_some(),
            "Home page composed"
        );

        HomePage {
            display_name: self.display_name(profile.as_ref()),
            contact_email: self.contact_email(profile.as_ref()),
            profile,
            about,
            projects: projects
                .data
                .into_iter()
                .take(HOME_PROJECT_LIMIT)
                .map(ProjectCard::from)
                .collect(),
            skills: SkillsSection::from(skills),
            experiences: experiences.into_iter().map(ExperienceEntry::from).collect(),
            posts: posts
                .data
                .into_iter()
                .take(HOME_POST_LIMIT)
                .map(BlogCard::from)
                .collect(),
            github,
        }
    }
}
