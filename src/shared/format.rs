// src/shared/format.rs
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static html tag pattern"));

pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, " ").into_owned()
}

/// Words of visible text, ignoring markup.
pub fn word_count(html: &str) -> usize {
    strip_html(html).split_whitespace().count()
}

/// `2024-01-05` (or an RFC 3339 timestamp) => `January 5, 2024`.
/// `2024-01` => `January 2024`. Anything else is returned unchanged.
pub fn format_display_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Some(date) = parse_day(raw) {
        return date.format("%B %-d, %Y").to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return date.format("%B %Y").to_string();
    }

    raw.to_string()
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
