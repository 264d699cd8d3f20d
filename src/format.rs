//! Display formatting shared by the widgets.

use chrono::{DateTime, NaiveDate};

/// Number of tag chips shown on a post card before collapsing the rest
/// into a `+N` indicator.
pub const TAG_LIMIT: usize = 3;

/// Reading time assumed when a feed entry does not carry one.
pub const DEFAULT_READING_TIME: u32 = 5;

/// Abbreviates counters: `950` stays `950`, `1000` becomes `1K`,
/// `12345` becomes `12.3K`.
pub fn format_number(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }

    // Tenths of a thousand, halves rounded up.
    let tenths = (n + 50) / 100;
    match tenths % 10 {
        0 => format!("{}K", tenths / 10),
        digit => format!("{}.{}K", tenths / 10, digit),
    }
}

/// Formats a feed timestamp as `Mar 5, 2024`.
///
/// The calendar date is taken in the timestamp's own offset. Input that
/// cannot be parsed is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn reading_time_label(minutes: u32) -> String {
    format!("{} min read", minutes)
}

/// The tags of one post card, capped for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagChips {
    pub shown: Vec<String>,
    /// How many tags were left out.
    pub overflow: usize,
}

impl TagChips {
    pub fn from_tags(tags: &[String], cap: usize) -> Self {
        let shown: Vec<String> = tags.iter().take(cap).cloned().collect();
        let overflow = tags.len() - shown.len();
        Self { shown, overflow }
    }

    /// `+N` when tags were left out.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}
