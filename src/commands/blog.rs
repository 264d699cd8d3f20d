use anyhow::Result;
use log::debug;

use crate::{
    config::{Config, Overrides},
    feed::FeedWidget,
    runtime::Runtime,
    view::FeedPanel,
};

/// Fetches the feed once and prints the resulting panel.
#[tracing::instrument(skip(runtime, overrides))]
pub async fn blog<R: Runtime>(runtime: R, overrides: Overrides, limit: usize) -> Result<()> {
    let config = Config::from_runtime(&runtime, overrides);
    let http = config.http_client()?;

    debug!("Loading up to {} post(s) from {}", limit, config.feed_url);
    let widget = FeedWidget::load(&http, &config.feed_url, limit).await;

    println!("{}", FeedPanel::from_state(widget.state(), &config.blog_url));
    Ok(())
}
