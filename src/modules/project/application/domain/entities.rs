use serde::{Deserialize, Serialize};

use crate::modules::project::application::domain::tech_stack;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "tech_stack::deserialize")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default, alias = "live_url")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}
