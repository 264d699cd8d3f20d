use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_READING_TIME;

/// One post as published in the remote feed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub title: String,
    pub url: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl FeedEntry {
    /// Minutes to read; a missing or zero value falls back to the default.
    pub fn reading_time(&self) -> u32 {
        self.reading_time
            .filter(|&minutes| minutes > 0)
            .unwrap_or(DEFAULT_READING_TIME)
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// The feed document, posts in publication order as served.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct FeedDocument {
    pub posts: Vec<FeedEntry>,
}

impl FeedDocument {
    pub fn truncated(mut self, limit: usize) -> Self {
        self.posts.truncate(limit);
        self
    }
}
