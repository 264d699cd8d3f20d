use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{http::HttpClient, runtime::Runtime};

pub const DEFAULT_BLOG_URL: &str = "https://blog.harshalkudale.com";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub const BLOG_URL_ENV: &str = "FOLIO_BLOG_URL";
pub const FEED_URL_ENV: &str = "FOLIO_BLOG_API_URL";
pub const API_URL_ENV: &str = "FOLIO_GITHUB_API_URL";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

const USER_AGENT: &str = "folio-cli";

/// Values given explicitly on the command line. They win over the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub blog_url: Option<String>,
    pub feed_url: Option<String>,
    pub api_url: Option<String>,
}

/// Where the widgets fetch from.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Public blog site, used for the fallback link.
    pub blog_url: String,
    /// JSON feed document.
    pub feed_url: String,
    /// Source-hosting API base.
    pub api_url: String,
    github_token: Option<String>,
}

impl Config {
    #[tracing::instrument(skip(runtime, overrides))]
    pub fn from_runtime<R: Runtime>(runtime: &R, overrides: Overrides) -> Self {
        let lookup = |key: &str| runtime.env_var(key).ok().filter(|v| !v.trim().is_empty());

        let blog_url = overrides
            .blog_url
            .or_else(|| lookup(BLOG_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BLOG_URL.to_string());
        let blog_url = blog_url.trim_end_matches('/').to_string();

        let feed_url = overrides
            .feed_url
            .or_else(|| lookup(FEED_URL_ENV))
            .unwrap_or_else(|| format!("{}/index.json", blog_url));

        let api_url = overrides
            .api_url
            .or_else(|| lookup(API_URL_ENV))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();

        let github_token = lookup(TOKEN_ENV);

        debug!(
            "Resolved config: blog={} feed={} api={}",
            blog_url, feed_url, api_url
        );

        Self {
            blog_url,
            feed_url,
            api_url,
            github_token,
        }
    }

    /// Builds the shared HTTP client. A `GITHUB_TOKEN`, when present, is sent
    /// as a bearer token to lift the anonymous rate limit.
    pub fn http_client(&self) -> Result<HttpClient> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.github_token {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using {} for authentication", TOKEN_ENV);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(HttpClient::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockito::{Matcher, Server};
    use std::collections::HashMap;

    fn runtime_with_env(vars: &[(&str, &str)]) -> MockRuntime {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut runtime = MockRuntime::new();
        runtime.expect_env_var().returning(move |key| {
            vars.get(key)
                .cloned()
                .ok_or(std::env::VarError::NotPresent)
        });
        runtime
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let runtime = runtime_with_env(&[]);
        let config = Config::from_runtime(&runtime, Overrides::default());

        assert_eq!(config.blog_url, "https://blog.harshalkudale.com");
        assert_eq!(config.feed_url, "https://blog.harshalkudale.com/index.json");
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.github_token, None);
    }

    #[test]
    fn test_feed_url_follows_blog_url() {
        let runtime = runtime_with_env(&[(BLOG_URL_ENV, "https://notes.example.com/")]);
        let config = Config::from_runtime(&runtime, Overrides::default());

        assert_eq!(config.blog_url, "https://notes.example.com");
        assert_eq!(config.feed_url, "https://notes.example.com/index.json");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let runtime = runtime_with_env(&[
            (FEED_URL_ENV, "https://cdn.example.com/feed.json"),
            (API_URL_ENV, "http://localhost:9999"),
        ]);
        let config = Config::from_runtime(&runtime, Overrides::default());

        assert_eq!(config.blog_url, DEFAULT_BLOG_URL);
        assert_eq!(config.feed_url, "https://cdn.example.com/feed.json");
        assert_eq!(config.api_url, "http://localhost:9999");
    }

    #[test]
    fn test_empty_env_counts_as_unset() {
        let runtime = runtime_with_env(&[(BLOG_URL_ENV, ""), (API_URL_ENV, "  ")]);
        let config = Config::from_runtime(&runtime, Overrides::default());

        assert_eq!(config.blog_url, DEFAULT_BLOG_URL);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_overrides_win_over_env() {
        let runtime = runtime_with_env(&[(FEED_URL_ENV, "https://env.example.com/index.json")]);
        let config = Config::from_runtime(
            &runtime,
            Overrides {
                feed_url: Some("https://flag.example.com/index.json".into()),
                ..Default::default()
            },
        );

        assert_eq!(config.feed_url, "https://flag.example.com/index.json");
    }

    /// Verifies the Authorization header with and without GITHUB_TOKEN set.
    async fn verify_authorization_header(token: Option<&str>) {
        let runtime = match token {
            Some(t) => runtime_with_env(&[(TOKEN_ENV, t)]),
            None => runtime_with_env(&[]),
        };

        let mut server = Server::new_async().await;

        let expected_header = match token {
            Some(t) => Matcher::Exact(format!("Bearer {}", t)),
            None => Matcher::Missing,
        };

        let mock = server
            .mock("GET", "/")
            .match_header("Authorization", expected_header)
            .match_header("User-Agent", "folio-cli")
            .with_body("{}")
            .create_async()
            .await;

        let config = Config::from_runtime(&runtime, Overrides::default());
        let client = config.http_client().unwrap();
        let body: serde_json::Value = client.get_json(&server.url()).await.unwrap();
        assert!(body.is_object());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_client_with_github_token() {
        verify_authorization_header(Some("test_token")).await;
    }

    #[tokio::test]
    async fn test_http_client_without_github_token() {
        verify_authorization_header(None).await;
    }
}
