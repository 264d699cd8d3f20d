//! Blog feed widget.
//!
//! Fetches the remote JSON feed once, keeps the newest few posts and settles
//! into one of three terminal states.

mod types;
mod widget;

pub use types::{FeedDocument, FeedEntry};
pub use widget::{FeedState, FeedWidget};

use log::debug;

use crate::http::{FetchError, HttpClient};

/// Number of posts the panel shows.
pub const FEED_LIMIT: usize = 4;

/// Fetches the feed and keeps the first `limit` posts in source order.
#[tracing::instrument(skip(http))]
pub async fn load_feed(
    http: &HttpClient,
    feed_url: &str,
    limit: usize,
) -> Result<FeedDocument, FetchError> {
    let document: FeedDocument = http.get_json(feed_url).await?;
    debug!(
        "Feed returned {} post(s), keeping at most {}",
        document.posts.len(),
        limit
    );
    Ok(document.truncated(limit))
}
