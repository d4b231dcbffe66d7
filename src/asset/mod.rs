//! Asset reference handling for the HTML entry page.

pub mod version;

pub use version::{RewriteReport, rewrite, update_file, version_token};
