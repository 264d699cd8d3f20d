//! Classification of fetch failures.

/// Why a single fetch did not produce a value.
///
/// The widgets collapse every variant into one failure state; the variant
/// only matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never got a response (DNS, connect, TLS, reset).
    Transport(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not the JSON shape we expected.
    Decode(String),
}

impl FetchError {
    /// Classifies a reqwest error raised while sending a request or reading its body.
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return FetchError::Status(status.as_u16());
        }
        if error.is_decode() {
            return FetchError::Decode(error.to_string());
        }
        FetchError::Transport(error.to_string())
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Request failed: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status {}", code),
            FetchError::Decode(msg) => write!(f, "Malformed response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
