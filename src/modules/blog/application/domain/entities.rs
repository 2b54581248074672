use serde::{Deserialize, Serialize};

use crate::modules::blog::application::domain::reading_time;
use crate::shared::serde_ext::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    /// Raw HTML from the CMS, passed through untouched.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, alias = "image")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_photos: Vec<String>,
    pub published_at: String,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn reading_minutes(&self) -> u32 {
        match self.reading_time {
            Some(minutes) if minutes > 0 => minutes,
            _ => reading_time::estimate_minutes(&self.content),
        }
    }
}
