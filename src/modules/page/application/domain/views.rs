use serde::Serialize;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::github::application::domain::entities::GithubStats;
use crate::modules::profile::application::domain::entities::{About, Profile};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::domain::entities::{Skill, SkillsByCategory};
use crate::shared::format::format_display_date;
use crate::shared::pagination::PageMeta;

pub const HOME_PROJECT_LIMIT: usize = 6;
pub const HOME_POST_LIMIT: usize = 3;
pub const CARD_TAG_LIMIT: usize = 3;

pub const PROJECT_THUMBNAIL_PLACEHOLDER: &str = "/placeholder-project.jpg";
pub const PROJECT_DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// Tab selected when the backend sent no categories at all.
pub const DEFAULT_SKILL_CATEGORY: &str = "Backend";

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: String,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: bool,
}

impl From<Project> for ProjectCard {
    fn from(project: Project) -> Self {
        let featured = project.is_featured();
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: non_blank(project.description)
                .unwrap_or_else(|| PROJECT_DESCRIPTION_PLACEHOLDER.to_string()),
            thumbnail: non_blank(project.thumbnail)
                .unwrap_or_else(|| PROJECT_THUMBNAIL_PLACEHOLDER.to_string()),
            tech_stack: project.tech_stack,
            github_url: non_blank(project.github_url),
            demo_url: non_blank(project.demo_url),
            featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: ProjectCard,
    /// `created_at` formatted for display.
    pub created_on: Option<String>,
}

impl From<Project> for ProjectDetail {
    fn from(mut project: Project) -> Self {
        let created_on = non_blank(project.created_at.take()).map(|raw| format_display_date(&raw));
        Self {
            project: ProjectCard::from(project),
            created_on,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsPage {
    pub projects: Vec<ProjectCard>,
    pub meta: Option<PageMeta>,
}

//
// ──────────────────────────────────────────────────────────
// Blog
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogCard {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub thumbnail: Option<String>,
    pub published_on: String,
    pub reading_minutes: u32,
    pub tags: Vec<String>,
}

impl From<BlogPost> for BlogCard {
    fn from(post: BlogPost) -> Self {
        let reading_minutes = post.reading_minutes();
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            thumbnail: non_blank(post.thumbnail),
            published_on: format_display_date(&post.published_at),
            reading_minutes,
            tags: post.tags.into_iter().take(CARD_TAG_LIMIT).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogIndexPage {
    pub posts: Vec<BlogCard>,
    pub meta: Option<PageMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogDetail {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Backend HTML, unmodified.
    pub content: String,
    pub thumbnail: Option<String>,
    pub gallery: Vec<String>,
    pub published_at: String,
    pub published_on: String,
    pub reading_minutes: u32,
    pub tags: Vec<String>,
}

impl From<BlogPost> for BlogDetail {
    fn from(post: BlogPost) -> Self {
        let reading_minutes = post.reading_minutes();
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            thumbnail: non_blank(post.thumbnail),
            gallery: post
                .additional_photos
                .into_iter()
                .filter(|photo| !photo.trim().is_empty())
                .collect(),
            published_on: format_display_date(&post.published_at),
            published_at: post.published_at,
            reading_minutes,
            tags: post.tags,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Home
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsSection {
    pub categories: Vec<String>,
    pub active_category: String,
    pub groups: SkillsByCategory,
    pub all_skills: Vec<Skill>,
}

impl From<SkillsByCategory> for SkillsSection {
    fn from(groups: SkillsByCategory) -> Self {
        let active_category = groups
            .first_category()
            .unwrap_or(DEFAULT_SKILL_CATEGORY)
            .to_string();
        Self {
            categories: groups.category_names(),
            active_category,
            all_skills: groups.all_skills(),
            groups,
        }
    }
}

impl Default for SkillsSection {
    fn default() -> Self {
        SkillsByCategory::default().into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub description: String,
    pub period: String,
    pub location: Option<String>,
    pub current: bool,
}

impl From<Experience> for ExperienceEntry {
    fn from(experience: Experience) -> Self {
        Self {
            period: experience.period_label(),
            current: experience.is_current(),
            company: experience.company,
            role: experience.role,
            description: experience.description,
            location: non_blank(experience.location),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub profile: Option<Profile>,
    pub about: Option<About>,
    pub projects: Vec<ProjectCard>,
    pub skills: SkillsSection,
    pub experiences: Vec<ExperienceEntry>,
    pub posts: Vec<BlogCard>,
    pub github: Option<GithubStats>,
    pub display_name: String,
    pub contact_email: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
