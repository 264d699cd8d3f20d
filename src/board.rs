//! Project cards and the counter slots the stats widget writes into.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::sync::Mutex;

use crate::runtime::Runtime;
use crate::stats::{Counter, RepoId, StatsTarget};

/// One entry of `projects.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub deploy_url: Option<String>,
    #[serde(default)]
    pub github_owner: Option<String>,
    #[serde(default)]
    pub github_repo: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

impl Project {
    /// A bare card that only carries a repository identity.
    pub fn for_repo(id: &str, repo: &RepoId) -> Self {
        Self {
            id: id.to_string(),
            name: repo.to_string(),
            github_url: Some(format!("https://github.com/{}", repo)),
            github_owner: Some(repo.owner.clone()),
            github_repo: Some(repo.repo.clone()),
            ..Default::default()
        }
    }

    /// The repository this card shows counters for, when it names one.
    pub fn repo_id(&self) -> Option<RepoId> {
        let owner = self.github_owner.as_deref().map(str::trim)?;
        let repo = self.github_repo.as_deref().map(str::trim)?;
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(RepoId::new(owner, repo))
    }
}

/// Display state of one card's counters. `None` is the unloaded default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardCounters {
    pub stars: Option<String>,
    pub downloads: Option<String>,
}

impl CardCounters {
    pub fn get(&self, counter: Counter) -> Option<&str> {
        match counter {
            Counter::Stars => self.stars.as_deref(),
            Counter::Downloads => self.downloads.as_deref(),
        }
    }

    fn set(&mut self, counter: Counter, text: &str) {
        let slot = match counter {
            Counter::Stars => &mut self.stars,
            Counter::Downloads => &mut self.downloads,
        };
        *slot = Some(text.to_string());
    }
}

/// The project section of the page.
#[derive(Debug)]
pub struct Board {
    projects: Vec<Project>,
    counters: Mutex<Vec<CardCounters>>,
}

impl Board {
    pub fn new(projects: Vec<Project>) -> Self {
        let counters = vec![CardCounters::default(); projects.len()];
        Self {
            projects,
            counters: Mutex::new(counters),
        }
    }

    /// Reads a `projects.json` array.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read projects from {}", path.display()))?;
        let projects: Vec<Project> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse projects in {}", path.display()))?;
        debug!("Loaded {} project(s) from {}", projects.len(), path.display());
        Ok(Self::new(projects))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Cards that carry a repository identity, with their index.
    pub fn stat_cards(&self) -> Vec<(usize, RepoId)> {
        self.projects
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.repo_id().map(|repo| (i, repo)))
            .collect()
    }

    pub fn counter(&self, card: usize, counter: Counter) -> Option<String> {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(card)
            .and_then(|c| c.get(counter))
            .map(str::to_string)
    }

    /// Copy of every card's counters, in card order.
    pub fn snapshot(&self) -> Vec<CardCounters> {
        self.counters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl StatsTarget for Board {
    fn write_counter(&self, card: usize, counter: Counter, text: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        match counters.get_mut(card) {
            Some(slot) => slot.set(counter, text),
            None => debug!("No card {} on the board, dropping {} update", card, counter),
        }
    }
}
