//! Repository stats widget.
//!
//! Each project card that names a repository gets two independent lookups:
//! the star count and the download total over all releases. Either counter
//! is written as soon as its own lookup finishes; failures are logged and
//! otherwise leave the counter untouched.

mod github;

pub use github::GitHubProvider;

use anyhow::Result;
use async_trait::async_trait;
use futures_util::future::join_all;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::format::format_number;

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format '{}'. Expected 'owner/repo'.", s)
        } else {
            Ok(RepoId::new(parts[0], parts[1]))
        }
    }
}

/// Repository metadata counters. Forks are fetched but not displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseAsset {
    pub download_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Release {
    pub assets: Vec<ReleaseAsset>,
}

/// The two counters on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Stars,
    Downloads,
}

impl Counter {
    /// Marker used on the display node.
    pub fn as_str(&self) -> &'static str {
        match self {
            Counter::Stars => "stars",
            Counter::Downloads => "downloads",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source-hosting API the counters come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch repository metadata (stars, forks).
    async fn get_repo_stats(&self, repo: &RepoId) -> Result<RepoStats>;

    /// Fetch the release list with per-asset download counts.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>>;
}

/// Where counter text ends up. Implementations locate the card's display
/// node and overwrite it; unknown cards are ignored.
#[cfg_attr(test, mockall::automock)]
pub trait StatsTarget: Send + Sync {
    fn write_counter(&self, card: usize, counter: Counter, text: &str);
}

/// Star and fork counts, or `None` when the lookup failed for any reason.
#[tracing::instrument(skip(provider))]
pub async fn load_repo_stats<P: Provider + ?Sized>(provider: &P, repo: &RepoId) -> Option<RepoStats> {
    match provider.get_repo_stats(repo).await {
        Ok(stats) => Some(stats),
        Err(e) => {
            warn!("Failed to fetch stats for {}: {:#}", repo, e);
            None
        }
    }
}

/// Downloads summed over every asset of every release. A repository without
/// releases has a total of zero; `None` means the lookup failed.
#[tracing::instrument(skip(provider))]
pub async fn load_download_total<P: Provider + ?Sized>(provider: &P, repo: &RepoId) -> Option<u64> {
    match provider.get_releases(repo).await {
        Ok(releases) => Some(total_downloads(&releases)),
        Err(e) => {
            warn!("Failed to fetch downloads for {}: {:#}", repo, e);
            None
        }
    }
}

pub fn total_downloads(releases: &[Release]) -> u64 {
    releases
        .iter()
        .flat_map(|release| release.assets.iter())
        .map(|asset| asset.download_count)
        .sum()
}

/// Text to write for a fetched value, or `None` to leave the counter as is.
///
/// Zero counts are treated like missing ones, so a repository without
/// stars or releases keeps its unloaded placeholder.
pub fn counter_text(counter: Counter, value: Option<u64>) -> Option<String> {
    let value = match counter {
        Counter::Stars | Counter::Downloads => value.filter(|&count| count > 0),
    }?;
    Some(format_number(value))
}

/// Runs both lookups for one card concurrently and writes each counter as
/// soon as its own lookup settles.
#[tracing::instrument(skip(provider, target))]
pub async fn refresh_card<P, T>(provider: &P, card: usize, repo: &RepoId, target: &T)
where
    P: Provider + ?Sized,
    T: StatsTarget + ?Sized,
{
    let stars = async {
        let value = load_repo_stats(provider, repo).await.map(|stats| stats.stars);
        if let Some(text) = counter_text(Counter::Stars, value) {
            target.write_counter(card, Counter::Stars, &text);
        }
    };

    let downloads = async {
        let value = load_download_total(provider, repo).await;
        if let Some(text) = counter_text(Counter::Downloads, value) {
            target.write_counter(card, Counter::Downloads, &text);
        }
    };

    tokio::join!(stars, downloads);
    debug!("Card {} ({}) settled", card, repo);
}

/// Refreshes every card independently. There is no batching between cards
/// and no ordering guarantee across them.
pub async fn refresh_cards<P, T>(provider: &P, cards: &[(usize, RepoId)], target: &T)
where
    P: Provider + ?Sized,
    T: StatsTarget + ?Sized,
{
    debug!("Refreshing stats for {} card(s)", cards.len());
    join_all(
        cards
            .iter()
            .map(|(card, repo)| refresh_card(provider, *card, repo, target)),
    )
    .await;
}
