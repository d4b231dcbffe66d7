//! Configuration section definitions.

mod icon;
mod version;

pub use icon::{IconConfig, SvgConverter};
pub use version::VersionConfig;
