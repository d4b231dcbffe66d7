//! SVG rasterization.
//!
//! ```text
//! SVG document
//!         │
//!         ▼
//!    ┌─────────┐
//!    │ convert │ ──► PNG bytes (builtin/magick/ffmpeg)
//!    └─────────┘
//! ```

pub mod convert;

pub use convert::{RasterError, Rasterizer};
