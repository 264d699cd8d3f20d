//! HTTP client module: single-shot JSON fetches and their failure taxonomy.

mod client;
mod error;

pub use client::HttpClient;
pub use error::FetchError;
