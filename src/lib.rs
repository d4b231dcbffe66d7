//! pwa-tools - build-time helpers for a progressive web app.
//!
//! Two tools share this library:
//!
//! - `generate-icon`: renders a text icon to `icon-192.png` and `icon-512.png`
//! - `update-version`: refreshes `?v=` cache-busting markers in `index.html`

pub mod asset;
pub mod cli;
pub mod config;
pub mod icon;
pub mod image;
pub mod logger;
pub mod utils;
