//! `[version]` section configuration.
//!
//! Names of the assets whose references receive a cache-busting marker.
//!
//! # Example
//!
//! ```toml
//! [version]
//! html = "index.html"
//! stylesheet = "assets/styles/styles.css"
//! main_script = "app.js"
//! service_worker = "service-worker.js"
//! ```

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// HTML file rewritten in place, relative to project root.
    pub html: PathBuf,

    /// Stylesheet referenced from a `<link href>`.
    pub stylesheet: String,

    /// Main script referenced from a `<script src>` and the version-check fallback.
    pub main_script: String,

    /// Script passed to `navigator.serviceWorker.register`.
    pub service_worker: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            html: PathBuf::from("index.html"),
            stylesheet: "assets/styles/styles.css".to_string(),
            main_script: "app.js".to_string(),
            service_worker: "service-worker.js".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.version.html, PathBuf::from("index.html"));
        assert_eq!(config.version.stylesheet, "assets/styles/styles.css");
        assert_eq!(config.version.main_script, "app.js");
        assert_eq!(config.version.service_worker, "service-worker.js");
    }

    #[test]
    fn test_partial_override() {
        let config = test_parse_config("[version]\nmain_script = \"main.js\"");
        assert_eq!(config.version.main_script, "main.js");
        assert_eq!(config.version.html, PathBuf::from("index.html"));
    }
}
