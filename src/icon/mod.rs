//! Icon text layout and SVG composition.
//!
//! # Pipeline
//!
//! ```text
//! text ──► split ──► font sizes ──► layout ──► compose ──► SVG string
//!          (1-2 lines)  (per line)   (per canvas)
//! ```
//!
//! # Modules
//!
//! - [`split`]: one or two lines from the input text
//! - [`font`]: width estimate and font size fitting
//! - [`layout`]: canvas sizes, static layout table, resolved layout
//! - [`compose`]: SVG document builder

pub mod compose;
pub mod font;
pub mod layout;
pub mod split;

pub use compose::compose;
pub use layout::{CanvasSize, IconLayout, IconRequest, LayoutParams};
pub use split::LineSplit;

/// Lay out and compose the SVG document for `text` at `size`.
pub fn render_svg(text: &str, size: CanvasSize) -> String {
    let layout = IconLayout::compute(&IconRequest::new(text, size));
    compose(&layout)
}
