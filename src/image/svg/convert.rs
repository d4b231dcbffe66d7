//! SVG to PNG conversion.
//!
//! Converts SVG documents to square PNG images using one of three backends:
//! built-in (resvg), ImageMagick or FFmpeg.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgba};
use resvg::tiny_skia;
use thiserror::Error;

use crate::config::SvgConverter;
use crate::utils::exec::Cmd;
use crate::{debug, log};

/// Rasterization failures.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Failed to parse SVG")]
    Parse(#[from] usvg::Error),

    #[error("Invalid raster size: {0}x{0}")]
    InvalidSize(u32),

    #[error("Failed to encode PNG")]
    Encode(#[from] image::ImageError),

    #[error("`{program}` produced no image data")]
    EmptyOutput { program: &'static str },

    #[error(transparent)]
    Command(#[from] anyhow::Error),
}

/// Renders SVG documents to PNG with a fixed backend.
///
/// For the builtin backend the system font database is loaded once and
/// shared by every render. External backends are expected to be installed;
/// `IconConfig::validate` checks that before a rasterizer is built.
pub struct Rasterizer {
    converter: SvgConverter,
    options: usvg::Options<'static>,
}

impl Rasterizer {
    pub fn new(converter: SvgConverter) -> Self {
        let mut options = usvg::Options::default();
        if converter == SvgConverter::Builtin {
            options.fontdb_mut().load_system_fonts();
            let faces = options.fontdb.len();
            if faces == 0 {
                log!("warning"; "no system fonts found, icon text will not be drawn");
            } else {
                debug!("raster"; "loaded {} font faces", faces);
            }
        }

        Self { converter, options }
    }

    pub fn converter(&self) -> SvgConverter {
        self.converter
    }

    /// Render `svg_data` to a `px` x `px` PNG.
    pub fn render_png(&self, svg_data: &[u8], px: u32) -> Result<Vec<u8>, RasterError> {
        if px == 0 {
            return Err(RasterError::InvalidSize(px));
        }

        match self.converter {
            SvgConverter::Builtin => convert_builtin(svg_data, px, &self.options),
            SvgConverter::Magick => convert_magick(svg_data, px),
            SvgConverter::Ffmpeg => convert_ffmpeg(svg_data, px),
        }
    }
}

/// Convert using resvg, scaling the document to fill the pixmap.
#[allow(clippy::cast_precision_loss)]
fn convert_builtin(
    svg_data: &[u8],
    px: u32,
    options: &usvg::Options<'_>,
) -> Result<Vec<u8>, RasterError> {
    let tree = usvg::Tree::from_data(svg_data, options)?;

    let mut pixmap = tiny_skia::Pixmap::new(px, px).ok_or(RasterError::InvalidSize(px))?;
    let size = tree.size();
    let transform =
        tiny_skia::Transform::from_scale(px as f32 / size.width(), px as f32 / size.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    encode_png(&pixmap)
}

/// Encode a pixmap as PNG.
///
/// tiny-skia stores premultiplied alpha; PNG expects straight alpha.
fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, RasterError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(pixmap.width(), pixmap.height(), rgba)
            .ok_or(RasterError::InvalidSize(pixmap.width()))?;

    let mut png = Vec::new();
    buffer.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Convert using ImageMagick
fn convert_magick(svg_data: &[u8], px: u32) -> Result<Vec<u8>, RasterError> {
    let geometry = format!("{px}x{px}!");

    let output = Cmd::new("magick")
        .args(["-background", "none", "-density", "96", "svg:-"])
        .args(["-resize", &geometry, "png:-"])
        .stdin(svg_data)
        .run()
        .map_err(|e| e.context("ImageMagick conversion failed"))?;

    non_empty(output.stdout, "magick")
}

/// Convert using FFmpeg
fn convert_ffmpeg(svg_data: &[u8], px: u32) -> Result<Vec<u8>, RasterError> {
    let size = format!("{px}x{px}");

    let output = Cmd::new("ffmpeg")
        .args(["-loglevel", "error", "-f", "svg_pipe", "-i", "pipe:"])
        .args(["-s", &size, "-frames:v", "1"])
        .args(["-f", "image2pipe", "-c:v", "png", "pipe:1"])
        .stdin(svg_data)
        .run()
        .map_err(|e| e.context("FFmpeg conversion failed"))?;

    non_empty(output.stdout, "ffmpeg")
}

fn non_empty(data: Vec<u8>, program: &'static str) -> Result<Vec<u8>, RasterError> {
    if data.is_empty() {
        Err(RasterError::EmptyOutput { program })
    } else {
        Ok(data)
    }
}
