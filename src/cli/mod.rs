//! Command-line interface module.

mod args;
pub mod common;
pub mod icon;
pub mod version;

pub use args::{CONFIG_FILE, CommonArgs, IconCli, VersionCli};
