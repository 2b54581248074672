//! `tech_stack` arrives either as a comma separated string or as a list of
//! strings. It is turned into a list once, while decoding.
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTechStack {
    List(Vec<String>),
    Csv(String),
}

impl RawTechStack {
    pub fn into_list(self) -> Vec<String> {
        let entries: Vec<String> = match self {
            RawTechStack::List(items) => items,
            RawTechStack::Csv(csv) => csv.split(',').map(str::to_string).collect(),
        };

        entries
            .into_iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawTechStack>::deserialize(deserializer)?
        .map(RawTechStack::into_list)
        .unwrap_or_default())
}
