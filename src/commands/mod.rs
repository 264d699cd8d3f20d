//! Command implementations behind the `folio` binary.

mod blog;
mod render;
mod stats;
mod theme;

pub use blog::blog;
pub use render::render;
pub use stats::stats;
pub use theme::theme;
