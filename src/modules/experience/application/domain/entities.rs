use serde::{Deserialize, Serialize};

use crate::shared::format::format_display_date;
use crate::shared::serde_ext::null_as_default;

/// One timeline entry. The backend sends them already sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date
            .as_deref()
            .map_or(true, |end| end.trim().is_empty())
    }

    /// `January 5, 2021 - Present`
    pub fn period_label(&self) -> String {
        let end = match self.end_date.as_deref() {
            Some(end) if !self.is_current() => format_display_date(end),
            _ => "Present".to_string(),
        };
        format!("{} - {}", format_display_date(&self.start_date), end)
    }
}
