use anyhow::Result;

use crate::{
    board::{Board, CardCounters, Project},
    config::{Config, Overrides},
    runtime::Runtime,
    stats::{GitHubProvider, RepoId, refresh_cards},
};

/// Fetches stars and downloads for each `owner/repo` and prints one line per card.
#[tracing::instrument(skip(runtime, overrides))]
pub async fn stats<R: Runtime>(runtime: R, overrides: Overrides, repos: &[String]) -> Result<()> {
    let repos = repos
        .iter()
        .map(|s| s.parse::<RepoId>())
        .collect::<Result<Vec<_>>>()?;

    let config = Config::from_runtime(&runtime, overrides);
    let provider = GitHubProvider::new(config.http_client()?, &config.api_url);

    let board = Board::new(
        repos
            .iter()
            .enumerate()
            .map(|(i, repo)| Project::for_repo(&i.to_string(), repo))
            .collect(),
    );
    refresh_cards(&provider, &board.stat_cards(), &board).await;

    for (project, counters) in board.projects().iter().zip(board.snapshot()) {
        println!("{}", stats_line(project, &counters));
    }
    Ok(())
}

fn stats_line(project: &Project, counters: &CardCounters) -> String {
    format!(
        "{}  stars: {}  downloads: {}",
        project.name,
        counters.stars.as_deref().unwrap_or("-"),
        counters.downloads.as_deref().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_stats_line() {
        let project = Project::for_repo("0", &RepoId::new("me", "tool"));
        let counters = CardCounters {
            stars: Some("1.2K".into()),
            downloads: None,
        };
        assert_eq!(
            stats_line(&project, &counters),
            "me/tool  stars: 1.2K  downloads: -"
        );
    }

    #[tokio::test]
    async fn test_stats_rejects_bad_repo() {
        let runtime = MockRuntime::new();
        let result = stats(runtime, Overrides::default(), &["not-a-repo".to_string()]).await;
        assert!(result.is_err());
    }
}
