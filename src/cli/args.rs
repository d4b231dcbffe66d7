//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config::SvgConverter;

/// Default config file name, searched upward from the current directory.
pub const CONFIG_FILE: &str = "pwa-tools.toml";

/// Render the app icon (192px and 512px PNG) from a short text
#[derive(Parser, Debug, Clone)]
#[command(name = "generate-icon", version, about, long_about = None)]
pub struct IconCli {
    /// Text shown on the icon (split over two lines when long)
    #[arg(value_name = "TEXT", value_parser = parse_icon_text)]
    pub text: String,

    /// Output directory for the PNG files (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Rasterization backend
    #[arg(long, value_enum)]
    pub converter: Option<SvgConverter>,

    /// Also write the intermediate SVG documents
    #[arg(long)]
    pub keep_svg: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Refresh `?v=` cache-busting markers on asset references in index.html
#[derive(Parser, Debug, Clone)]
#[command(name = "update-version", version, about, long_about = None)]
pub struct VersionCli {
    /// Project name shown in the confirmation (default: root directory name)
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// HTML file to rewrite (relative to project root)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub html: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Reject blank icon text at parse time so clap prints the usage line.
fn parse_icon_text(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("icon text must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Options shared by both tools.
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file name (default: pwa-tools.toml)
    #[arg(short = 'C', long, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root (default: directory of the config file, else cwd)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            config: PathBuf::from(CONFIG_FILE),
            root: None,
            verbose: false,
        }
    }
}
