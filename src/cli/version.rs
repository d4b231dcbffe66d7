//! `update-version` command.

use anyhow::Result;

use super::VersionCli;
use crate::asset::version::{self, RewriteReport};
use crate::config::{ToolConfig, project_name};
use crate::debug;
use crate::logger::status_success;

/// Refresh the version markers in the project's HTML entry page.
///
/// Returns `Ok(None)` when the HTML file does not exist.
pub fn update_version(cli: &VersionCli) -> Result<Option<RewriteReport>> {
    let mut config = ToolConfig::load(&cli.common)?;
    if let Some(html) = &cli.html {
        config.version.html.clone_from(html);
    }

    let project = cli
        .project
        .clone()
        .unwrap_or_else(|| project_name(config.get_root()));
    let html_path = config.root_join(&config.version.html);
    debug!("version"; "rewriting {}", html_path.display());

    let token = version::version_token();
    let Some(report) = version::update_file(&html_path, token, &config.version)? else {
        return Ok(None);
    };

    for (rule, count) in &report.applied {
        debug!("version"; "{}: {} reference(s)", rule, count);
    }
    status_success(&format!("{project}: version updated to {token}"));

    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CommonArgs;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn version_cli(root: &Path) -> VersionCli {
        VersionCli {
            project: Some("demo".to_string()),
            html: None,
            common: CommonArgs {
                root: Some(root.to_path_buf()),
                ..CommonArgs::default()
            },
        }
    }

    #[test]
    fn test_updates_index_html() {
        let dir = TempDir::new().unwrap();
        let index = dir.path().join("index.html");
        fs::write(
            &index,
            r#"<link rel="stylesheet" href="assets/styles/styles.css?v=1"><script src="app.js?v=1"></script>"#,
        )
        .unwrap();

        let report = update_version(&version_cli(dir.path())).unwrap().unwrap();
        let html = fs::read_to_string(&index).unwrap();
        let marker = format!("?v={}", report.version);

        assert!(html.contains(&format!("styles.css{marker}")));
        assert!(html.contains(&format!("app.js{marker}")));
        assert!(!html.contains("?v=1\""));
        assert_eq!(report.count("stylesheet"), 1);
        assert_eq!(report.count("main-script"), 1);
    }

    #[test]
    fn test_html_override_and_config_names() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pwa-tools.toml"),
            "[version]\nmain_script = \"main.js\"",
        )
        .unwrap();
        fs::create_dir(dir.path().join("public")).unwrap();
        let page = dir.path().join("public/home.html");
        fs::write(&page, r#"<script src="main.js"></script>"#).unwrap();

        let mut cli = version_cli(dir.path());
        cli.html = Some(PathBuf::from("public/home.html"));
        let report = update_version(&cli).unwrap().unwrap();

        assert_eq!(report.count("main-script"), 1);
        assert!(fs::read_to_string(&page).unwrap().contains("main.js?v="));
    }

    #[test]
    fn test_missing_html_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let result = update_version(&version_cli(dir.path())).unwrap();
        assert!(result.is_none());
        assert!(!dir.path().join("index.html").exists());
    }
}
