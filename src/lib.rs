//! Remote-data widgets for a static portfolio site.
//!
//! - [`feed`] fetches the blog feed and settles it into a display state.
//! - [`stats`] fetches star and download counters for project cards.
//! - [`view`] turns widget state into cards and HTML fragments.
//! - [`board`] holds the project cards the counters are written into.
//! - [`theme`] keeps the light/dark preference.

pub mod board;
pub mod commands;
pub mod config;
pub mod feed;
pub mod format;
pub mod http;
pub mod runtime;
pub mod stats;
pub mod theme;
pub mod view;
