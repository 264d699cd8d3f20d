use log::{debug, warn};

use crate::http::{FetchError, HttpClient};

use super::{FeedDocument, FeedEntry, load_feed};

/// Display state of the feed panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Loaded(Vec<FeedEntry>),
    /// The feed was fetched but holds no posts.
    Empty,
    /// Any transport, status or decode failure. The cause is only logged.
    Failed,
}

impl FeedState {
    pub fn from_result(result: Result<FeedDocument, FetchError>) -> Self {
        match result {
            Ok(document) if document.posts.is_empty() => FeedState::Empty,
            Ok(document) => FeedState::Loaded(document.posts),
            Err(e) => {
                warn!("Failed to fetch blog posts: {}", e);
                FeedState::Failed
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, FeedState::Loading)
    }

    pub fn posts(&self) -> &[FeedEntry] {
        match self {
            FeedState::Loaded(posts) => posts,
            _ => &[],
        }
    }
}

/// One mounted feed panel. Starts in `Loading` and settles exactly once.
#[derive(Debug, Default)]
pub struct FeedWidget {
    state: FeedState,
}

impl FeedWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a widget and performs its single fetch.
    #[tracing::instrument(skip(http))]
    pub async fn load(http: &HttpClient, feed_url: &str, limit: usize) -> Self {
        let mut widget = Self::new();
        widget.resolve(load_feed(http, feed_url, limit).await);
        widget
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Applies the fetch outcome. Returns `false` and leaves the state alone
    /// when the widget has already settled.
    pub fn resolve(&mut self, result: Result<FeedDocument, FetchError>) -> bool {
        if self.state.is_terminal() {
            debug!("Feed widget already settled, ignoring late result");
            return false;
        }
        self.state = FeedState::from_result(result);
        true
    }

    pub fn into_state(self) -> FeedState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FEED_LIMIT;
    use reqwest::Client;

    fn entry(title: &str) -> FeedEntry {
        FeedEntry {
            title: title.into(),
            url: format!("https://blog.example.com/{}/", title),
            date: "2024-03-05T00:00:00Z".into(),
            description: String::new(),
            reading_time: None,
            tags: None,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let widget = FeedWidget::new();
        assert_eq!(widget.state(), &FeedState::Loading);
        assert!(!widget.state().is_terminal());
        assert!(widget.state().posts().is_empty());
    }

    #[test]
    fn test_from_result_variants() {
        let loaded = FeedState::from_result(Ok(FeedDocument {
            posts: vec![entry("a"), entry("b")],
        }));
        assert_eq!(loaded.posts().len(), 2);

        let empty = FeedState::from_result(Ok(FeedDocument::default()));
        assert_eq!(empty, FeedState::Empty);

        let failed = FeedState::from_result(Err(FetchError::Status(404)));
        assert_eq!(failed, FeedState::Failed);
        assert!(failed.posts().is_empty());
    }

    #[test]
    fn test_resolve_settles_once() {
        let mut widget = FeedWidget::new();
        assert!(widget.resolve(Err(FetchError::Transport("reset".into()))));
        assert_eq!(widget.state(), &FeedState::Failed);

        // A second outcome does not re-enter another state
        assert!(!widget.resolve(Ok(FeedDocument {
            posts: vec![entry("late")],
        })));
        assert_eq!(widget.into_state(), FeedState::Failed);
    }

    #[test_log::test(tokio::test)]
    async fn test_load_failure_collapses_to_failed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/index.json")
            .with_status(502)
            .create_async()
            .await;

        let http = HttpClient::new(Client::new());
        let widget =
            FeedWidget::load(&http, &format!("{}/index.json", server.url()), FEED_LIMIT).await;

        assert_eq!(widget.state(), &FeedState::Failed);
    }

    #[tokio::test]
    async fn test_load_empty_feed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/index.json")
            .with_status(200)
            .with_body(r#"{"posts": []}"#)
            .create_async()
            .await;

        let http = HttpClient::new(Client::new());
        let widget =
            FeedWidget::load(&http, &format!("{}/index.json", server.url()), FEED_LIMIT).await;

        assert_eq!(widget.state(), &FeedState::Empty);
    }
}
