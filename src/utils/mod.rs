//! Utility modules shared by both tools.

pub mod exec;
pub mod xml;
