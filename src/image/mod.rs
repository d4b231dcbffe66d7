//! Image output: SVG rasterization.

pub mod svg;
