//! Renderable structures derived from widget state.
//!
//! Everything here is a pure function of fetched data; writing the result
//! somewhere (terminal, HTML file) is left to the caller.

mod html;

pub use html::{escape, render_board_html, render_feed_html};

use std::fmt;

use crate::feed::{FeedEntry, FeedState};
use crate::format::{TAG_LIMIT, TagChips, format_date, reading_time_label};

pub const LOADING_MESSAGE: &str = "Loading posts...";
pub const EMPTY_MESSAGE: &str = "No blog posts yet.";
pub const FAILED_MESSAGE: &str = "Unable to load blog posts.";
pub const FALLBACK_LINK_TEXT: &str = "Visit blog directly →";
pub const VIEW_ALL_TEXT: &str = "View all posts";

/// A post as shown on its card.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub title: String,
    pub url: String,
    pub date_label: String,
    pub reading_label: String,
    pub excerpt: String,
    pub tags: TagChips,
}

impl PostCard {
    pub fn from_entry(entry: &FeedEntry) -> Self {
        Self {
            title: entry.title.clone(),
            url: entry.url.clone(),
            date_label: format_date(&entry.date),
            reading_label: reading_time_label(entry.reading_time()),
            excerpt: entry.description.clone(),
            tags: TagChips::from_tags(entry.tags(), TAG_LIMIT),
        }
    }
}

/// What the blog section displays.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedPanel {
    Loading,
    Posts(Vec<PostCard>),
    Empty,
    Failed { blog_url: String },
}

impl FeedPanel {
    pub fn from_state(state: &FeedState, blog_url: &str) -> Self {
        match state {
            FeedState::Loading => FeedPanel::Loading,
            FeedState::Loaded(posts) => {
                FeedPanel::Posts(posts.iter().map(PostCard::from_entry).collect())
            }
            FeedState::Empty => FeedPanel::Empty,
            FeedState::Failed => FeedPanel::Failed {
                blog_url: blog_url.to_string(),
            },
        }
    }
}

impl fmt::Display for PostCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  {} • {}", self.date_label, self.reading_label)?;
        if !self.excerpt.is_empty() {
            writeln!(f, "  {}", self.excerpt)?;
        }
        if !self.tags.is_empty() {
            let mut chips: Vec<String> = self.tags.shown.iter().map(|t| format!("[{}]", t)).collect();
            if let Some(more) = self.tags.overflow_label() {
                chips.push(more);
            }
            writeln!(f, "  {}", chips.join(" "))?;
        }
        write!(f, "  {}", self.url)
    }
}

impl fmt::Display for FeedPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedPanel::Loading => write!(f, "{}", LOADING_MESSAGE),
            FeedPanel::Empty => write!(f, "{}", EMPTY_MESSAGE),
            FeedPanel::Failed { blog_url } => {
                write!(f, "{}\n{} {}", FAILED_MESSAGE, FALLBACK_LINK_TEXT, blog_url)
            }
            FeedPanel::Posts(cards) => {
                let rendered: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", rendered.join("\n\n"))
            }
        }
    }
}
