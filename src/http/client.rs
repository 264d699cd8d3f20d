//! Thin HTTP client for JSON documents.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::FetchError;

/// HTTP client issuing exactly one request per call.
///
/// There is no retry, timeout or back-off: a failure is reported once and a
/// hung request simply never resolves.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} answered {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        // Read the body first so that a bad payload is reported as Decode
        // rather than as a transport problem.
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
