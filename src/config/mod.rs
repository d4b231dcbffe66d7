//! Tool configuration management for `pwa-tools.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── icon       # [icon]
//! │   └── version    # [version]
//! ├── types/         # ConfigError, ConfigDiagnostic
//! ├── util.rs        # config file lookup, project name
//! └── mod.rs         # ToolConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[icon]`    | Output directory, rasterizer backend, SVG output |
//! | `[version]` | HTML file and asset names for cache busting      |
//!
//! The file is optional. Without one, the current directory is the project
//! root and every section takes its defaults.

pub mod section;
pub mod types;
mod util;

pub use section::{IconConfig, SvgConverter, VersionConfig};
pub use types::{ConfigDiagnostic, ConfigError};
pub use util::project_name;

use crate::{cli::CommonArgs, debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pwa-tools.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolConfig {
    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Icon generator settings
    #[serde(default)]
    pub icon: IconConfig,

    /// Cache-busting settings
    #[serde(default)]
    pub version: VersionConfig,
}

impl ToolConfig {
    /// Load configuration for a command run.
    ///
    /// With `--root`, the config file is looked up only in that directory.
    /// Otherwise it is searched upward from cwd, and the directory holding it
    /// becomes the project root; with no file, cwd is the root.
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (root, config_path) = match &args.root {
            Some(root) => {
                let root = cwd.join(root);
                let candidate = root.join(&args.config);
                let found = candidate.is_file().then_some(candidate);
                (root, found)
            }
            None => match find_config_file(&cwd, &args.config) {
                Some(path) => {
                    let root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                    (root, Some(path))
                }
                None => (cwd, None),
            },
        };

        let mut config = match &config_path {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                Self::from_path(path)?
            }
            None => {
                debug!("config"; "no {} found, using defaults", args.config.display());
                Self::default()
            }
        };

        config.root = root;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(ConfigError::from)
            .with_context(|| format!("invalid config `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} (ignored): {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

/// Parse a config snippet, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ToolConfig {
    let (parsed, ignored) = ToolConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_with_root(root: &Path) -> CommonArgs {
        CommonArgs {
            root: Some(root.to_path_buf()),
            ..CommonArgs::default()
        }
    }

    #[test]
    fn test_invalid_toml() {
        let result = ToolConfig::parse_with_ignored("[icon\noutput = \".\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[icon]\nkeep_svg = true\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = ToolConfig::parse_with_ignored(content).unwrap();

        assert!(config.icon.keep_svg);
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = ToolConfig::parse_with_ignored("[version]\nhtml = \"a.html\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_with_root_and_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pwa-tools.toml"),
            "[icon]\nconverter = \"magick\"\noutput = \"public\"",
        )
        .unwrap();

        let config = ToolConfig::load(&args_with_root(dir.path())).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.icon.converter, SvgConverter::Magick);
        assert_eq!(config.root_join(&config.icon.output), dir.path().join("public"));
    }

    #[test]
    fn test_load_with_root_without_file() {
        let dir = TempDir::new().unwrap();
        let config = ToolConfig::load(&args_with_root(dir.path())).unwrap();
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.version.html, PathBuf::from("index.html"));
    }

    #[test]
    fn test_load_reports_bad_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pwa-tools.toml"), "[icon]\nkeep_svg = \"yes\"").unwrap();
        let err = ToolConfig::load(&args_with_root(dir.path())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }
}
