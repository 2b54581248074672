use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::serde_ext::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100.
    #[serde(deserialize_with = "clamp_proficiency")]
    pub proficiency: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

fn clamp_proficiency<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// `GET /skills` body: `{ "<category>": [Skill, ...], ... }`.
///
/// Categories keep the order the backend sent them in; the first one is the
/// tab shown by default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillsByCategory(Vec<SkillCategory>);

impl SkillsByCategory {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.0
    }

    pub fn category_names(&self) -> Vec<String> {
        self.0.iter().map(|c| c.name.clone()).collect()
    }

    pub fn first_category(&self) -> Option<&str> {
        self.0.first().map(|c| c.name.as_str())
    }

    pub fn skills_in(&self, category: &str) -> &[Skill] {
        self.0
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.skills.as_slice())
            .unwrap_or_default()
    }

    pub fn all_skills(&self) -> Vec<Skill> {
        self.0.iter().flat_map(|c| c.skills.iter().cloned()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| c.skills.is_empty())
    }
}

impl<'de> Deserialize<'de> for SkillsByCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SkillsVisitor)
    }
}

struct SkillsVisitor;

impl<'de> Visitor<'de> for SkillsVisitor {
    type Value = SkillsByCategory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category name to skill list")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut categories = Vec::new();
        while let Some((name, skills)) = map.next_entry::<String, Vec<Skill>>()? {
            categories.push(SkillCategory { name, skills });
        }
        Ok(SkillsByCategory(categories))
    }

    // An empty associative array is serialized as `[]` by some backends.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_type(de::Unexpected::Seq, &self));
        }
        Ok(SkillsByCategory::default())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(SkillsByCategory::default())
    }
}
