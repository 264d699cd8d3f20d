//! GitHub provider implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::{Provider, Release, ReleaseAsset, RepoId, RepoStats};

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct RepoInfo {
        pub stargazers_count: u64,
        pub forks_count: u64,
    }

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub download_count: u64,
    }
}

/// Unauthenticated (or token-authenticated) GitHub REST client.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    pub fn new(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    async fn get_repo_stats(&self, repo: &RepoId) -> Result<RepoStats> {
        let url = format!("{}/repos/{}/{}", self.api_url, repo.owner, repo.repo);
        debug!("Fetching repo info from {}...", url);
        let info: api::RepoInfo = self.http_client.get_json(&url).await?;
        Ok(info.into())
    }

    /// A single request for the first page of releases.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);
        debug!("Fetching releases from {}...", url);
        let releases: Vec<api::Release> = self.http_client.get_json(&url).await?;
        Ok(releases.into_iter().map(Release::from).collect())
    }
}

impl From<api::RepoInfo> for RepoStats {
    fn from(info: api::RepoInfo) -> Self {
        RepoStats {
            stars: info.stargazers_count,
            forks: info.forks_count,
        }
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            assets: r
                .assets
                .into_iter()
                .map(|a| ReleaseAsset {
                    download_count: a.download_count,
                })
                .collect(),
        }
    }
}
