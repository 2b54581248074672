use crate::shared::format::word_count;

pub const WORDS_PER_MINUTE: usize = 200;

/// Minutes needed to read `html`, rounded up, never below one.
pub fn estimate_minutes(html: &str) -> u32 {
    let words = word_count(html);
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
