use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::{
    board::Board,
    config::{Config, Overrides},
    feed::FeedWidget,
    runtime::Runtime,
    stats::{GitHubProvider, refresh_cards},
    view::{FeedPanel, render_board_html, render_feed_html},
};

/// Loads the feed and every card's counters concurrently, then writes the
/// blog and project sections as one HTML fragment.
#[tracing::instrument(skip(runtime, overrides))]
pub async fn render<R: Runtime>(
    runtime: R,
    overrides: Overrides,
    projects: &Path,
    output: Option<PathBuf>,
    limit: usize,
) -> Result<()> {
    let board = Board::load(&runtime, projects)?;
    let config = Config::from_runtime(&runtime, overrides);
    let http = config.http_client()?;
    let provider = GitHubProvider::new(http.clone(), &config.api_url);

    let cards = board.stat_cards();
    let (feed, ()) = tokio::join!(
        FeedWidget::load(&http, &config.feed_url, limit),
        refresh_cards(&provider, &cards, &board),
    );

    let panel = FeedPanel::from_state(feed.state(), &config.blog_url);
    let html = format!(
        "{}{}",
        render_feed_html(&panel, &config.blog_url),
        render_board_html(&board)
    );

    match output {
        Some(path) => {
            runtime.write(&path, html.as_bytes())?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}
