use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::serde_ext::{null_as_default, sparse_string_map};

/// Site owner. The backend serves exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default)]
    pub hero_image: Option<String>,
    /// platform => URL, unset platforms dropped
    #[serde(default, deserialize_with = "sparse_string_map")]
    pub social_links: BTreeMap<String, String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_work: bool,
}

impl Profile {
    /// Address for the contact call-to-action: the profile email, else an
    /// `email` entry among the social links. Invalid addresses are skipped.
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .into_iter()
            .chain(self.social_links.get("email").map(String::as_str))
            .map(str::trim)
            .find(|candidate| email_address::EmailAddress::is_valid(candidate))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub about_photo: Option<String>,
    #[serde(default, rename(deserialize = "about_deskripsi"), alias = "description")]
    pub description: Option<String>,
}
