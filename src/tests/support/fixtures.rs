// Sample records shared by service and route tests.
use std::collections::BTreeMap;

use crate::config::SiteIdentity;
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::github::application::domain::entities::GithubStats;
use crate::modules::profile::application::domain::entities::{About, Profile};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::domain::entities::{Skill, SkillCategory, SkillsByCategory};
use crate::shared::pagination::{PageMeta, Paginated};

pub fn sample_identity() -> SiteIdentity {
    SiteIdentity {
        owner_name: "IchwalM".to_string(),
        contact_email: "contact@example.com".to_string(),
    }
}

pub fn sample_profile() -> Profile {
    let mut social_links = BTreeMap::new();
    social_links.insert("github".to_string(), "https://github.com/IchwalM".to_string());
    Profile {
        id: 1,
        name: "Ichwal".to_string(),
        bio: "Full stack developer and network engineer".to_string(),
        hero_image: Some("/hero.jpg".to_string()),
        social_links,
        email: Some("ichwal@example.com".to_string()),
        open_work: true,
    }
}

pub fn sample_about() -> About {
    About {
        about_photo: Some("/about.jpg".to_string()),
        description: Some("I build things.".to_string()),
    }
}

pub fn sample_project(id: u64, slug: &str) -> Project {
    Project {
        id,
        title: format!("Project {}", id),
        slug: slug.to_string(),
        description: Some("A sample project".to_string()),
        thumbnail: Some(format!("/projects/{}.jpg", slug)),
        tech_stack: vec!["Rust".to_string(), "Actix".to_string()],
        github_url: Some(format!("https://github.com/IchwalM/{}", slug)),
        demo_url: None,
        featured: None,
        created_at: None,
    }
}

pub fn sample_post(id: u64, slug: &str) -> BlogPost {
    BlogPost {
        id,
        title: format!("Post {}", id),
        slug: slug.to_string(),
        excerpt: "Short summary".to_string(),
        content: "<p>Hello world</p>".to_string(),
        thumbnail: None,
        additional_photos: vec![],
        published_at: "2024-01-05".to_string(),
        reading_time: Some(4),
        tags: vec!["rust".to_string()],
    }
}

pub fn sample_skills() -> SkillsByCategory {
    SkillsByCategory::new(vec![SkillCategory {
        name: "Backend".to_string(),
        skills: vec![Skill {
            name: "Rust".to_string(),
            proficiency: 85,
            icon: "rust".to_string(),
        }],
    }])
}

pub fn sample_experience() -> Experience {
    Experience {
        company: "Acme".to_string(),
        role: "Network Engineer".to_string(),
        description: "Kept the lights on".to_string(),
        start_date: "2021-01-05".to_string(),
        end_date: Some("2023-02-01".to_string()),
        location: Some("Jakarta".to_string()),
    }
}

pub fn sample_stats() -> GithubStats {
    GithubStats {
        followers: 17,
        public_repos: 42,
        total_stars: 10,
        total_forks: 3,
        total_contributions: 520,
        username: "IchwalM".to_string(),
        profile_url: "https://github.com/IchwalM".to_string(),
    }
}

pub fn page_of<T>(data: Vec<T>) -> Paginated<T> {
    let total = data.len() as u64;
    Paginated {
        data,
        meta: Some(PageMeta {
            current_page: 1,
            last_page: 1,
            per_page: 10,
            total,
        }),
    }
}
