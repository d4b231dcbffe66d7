//! `[icon]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [icon]
//! output = "."            # Output directory, relative to project root
//! converter = "builtin"   # Rasterization backend: builtin | magick | ffmpeg
//! keep_svg = false        # Also write icon-192.svg / icon-512.svg
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use crate::config::ConfigDiagnostic;

/// SVG rasterization backend
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SvgConverter {
    /// Use built-in Rust libraries (resvg).
    #[default]
    Builtin,
    /// Use ImageMagick (`magick` command).
    Magick,
    /// Use FFmpeg for conversion.
    Ffmpeg,
}

impl SvgConverter {
    /// External program backing this converter, if any.
    pub const fn program(self) -> Option<&'static str> {
        match self {
            Self::Builtin => None,
            Self::Magick => Some("magick"),
            Self::Ffmpeg => Some("ffmpeg"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Directory receiving `icon-192.png` and `icon-512.png`.
    pub output: PathBuf,

    /// Conversion backend for rasterization.
    pub converter: SvgConverter,

    /// Keep the intermediate SVG documents next to the PNGs.
    pub keep_svg: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            converter: SvgConverter::Builtin,
            keep_svg: false,
        }
    }
}

impl IconConfig {
    /// Validate icon configuration.
    ///
    /// # Checks
    /// - An external converter (magick/ffmpeg) must be installed.
    pub fn validate(&self) -> Result<(), ConfigDiagnostic> {
        let Some(program) = self.converter.program() else {
            return Ok(());
        };

        if which::which(program).is_err() {
            return Err(
                ConfigDiagnostic::new("icon.converter", format!("`{program}` command not found"))
                    .with_hint(format!(
                        "install {program} or set icon.converter = \"builtin\""
                    )),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.icon.output, PathBuf::from("."));
        assert_eq!(config.icon.converter, SvgConverter::Builtin);
        assert!(!config.icon.keep_svg);
    }

    #[test]
    fn test_converter_parsing() {
        let cases = [
            ("builtin", SvgConverter::Builtin),
            ("magick", SvgConverter::Magick),
            ("ffmpeg", SvgConverter::Ffmpeg),
        ];
        for (input, expected) in cases {
            let config = test_parse_config(&format!("[icon]\nconverter = \"{input}\""));
            assert_eq!(config.icon.converter, expected, "failed for {input}");
        }
    }

    #[test]
    fn test_unknown_converter_rejected() {
        let result: Result<crate::config::ToolConfig, _> =
            toml::from_str("[icon]\nconverter = \"cairo\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_program_names() {
        assert_eq!(SvgConverter::Builtin.program(), None);
        assert_eq!(SvgConverter::Magick.program(), Some("magick"));
        assert_eq!(SvgConverter::Ffmpeg.program(), Some("ffmpeg"));
    }

    #[test]
    fn test_builtin_always_valid() {
        assert!(IconConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_matches_path_lookup() {
        let config = IconConfig {
            converter: SvgConverter::Magick,
            ..IconConfig::default()
        };
        let installed = which::which("magick").is_ok();
        match config.validate() {
            Ok(()) => assert!(installed),
            Err(diag) => {
                assert!(!installed);
                assert_eq!(diag.field, "icon.converter");
                assert!(diag.hint.is_some());
            }
        }
    }
}
