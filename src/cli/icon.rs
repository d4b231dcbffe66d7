//! `generate-icon` command.
//!
//! # Flow
//!
//! ```text
//! text ──► SVG (192, 512) ──► temp dir ──► rasterize ──► icon-192.png
//!                                                    └─► icon-512.png
//! ```
//!
//! Both PNGs are rendered in memory before anything is written to the output
//! directory, so a failed run leaves previous icons untouched. The temporary
//! directory is removed on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::IconCli;
use crate::config::{ConfigError, ToolConfig};
use crate::icon::{self, CanvasSize};
use crate::image::svg::{RasterError, Rasterizer};
use crate::logger::status_success;
use crate::{debug, log};

/// One icon size, rendered but not yet written.
#[derive(Debug)]
struct GeneratedIcon {
    size: CanvasSize,
    svg: String,
    png: Vec<u8>,
}

/// Generate both icon sizes for `cli.text`; returns the written files.
pub fn generate_icons(cli: &IconCli) -> Result<Vec<PathBuf>> {
    let text = cli.text.trim();
    if text.is_empty() {
        bail!("icon text must not be empty");
    }

    let mut config = ToolConfig::load(&cli.common)?;
    apply_args(&mut config, cli);
    config.icon.validate().map_err(ConfigError::from)?;

    let output_dir = config.root_join(&config.icon.output);
    log!("icon"; "generating icons with text: \"{}\"", text);
    log!("icon"; "directory: {}", output_dir.display());

    let rasterizer = Rasterizer::new(config.icon.converter);
    debug!("icon"; "converter: {:?}", rasterizer.converter());
    let icons = render_all(text, &std::env::temp_dir(), |svg, px| {
        rasterizer.render_png(svg, px)
    })?;
    write_icons(&icons, &output_dir, config.icon.keep_svg)
}

/// CLI flags take precedence over the config file.
fn apply_args(config: &mut ToolConfig, cli: &IconCli) {
    if let Some(output) = &cli.output {
        config.icon.output.clone_from(output);
    }
    if let Some(converter) = cli.converter {
        config.icon.converter = converter;
    }
    if cli.keep_svg {
        config.icon.keep_svg = true;
    }
}

/// Compose and rasterize every canvas size through a scoped directory
/// under `temp_root`, removed when this returns.
fn render_all<F>(text: &str, temp_root: &Path, rasterize: F) -> Result<Vec<GeneratedIcon>>
where
    F: Fn(&[u8], u32) -> Result<Vec<u8>, RasterError>,
{
    let temp_dir = tempfile::Builder::new()
        .prefix("pwa-icons-")
        .tempdir_in(temp_root)
        .context("Failed to create temporary directory")?;
    debug!("icon"; "working in {}", temp_dir.path().display());

    CanvasSize::ALL
        .into_iter()
        .map(|size| render_one(text, size, &rasterize, temp_dir.path()))
        .collect()
}

fn render_one<F>(
    text: &str,
    size: CanvasSize,
    rasterize: &F,
    temp_dir: &Path,
) -> Result<GeneratedIcon>
where
    F: Fn(&[u8], u32) -> Result<Vec<u8>, RasterError>,
{
    let svg = icon::render_svg(text, size);
    let svg_path = temp_dir.join(format!("{}.svg", size.file_stem()));
    fs::write(&svg_path, &svg)
        .with_context(|| format!("Failed to write {}", svg_path.display()))?;

    let svg_data =
        fs::read(&svg_path).with_context(|| format!("Failed to read {}", svg_path.display()))?;
    let png = rasterize(&svg_data, size.px())
        .with_context(|| format!("Failed to convert {} to PNG", size.file_stem()))?;

    debug!("icon"; "{} rendered ({} bytes)", size, png.len());
    Ok(GeneratedIcon { size, svg, png })
}

fn write_icons(icons: &[GeneratedIcon], output_dir: &Path, keep_svg: bool) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut written = Vec::with_capacity(icons.len() * 2);
    for icon in icons {
        let stem = icon.size.file_stem();

        let png_path = output_dir.join(format!("{stem}.png"));
        fs::write(&png_path, &icon.png)
            .with_context(|| format!("Failed to write {}", png_path.display()))?;
        status_success(&format!("generated {stem}.png ({})", icon.size));
        written.push(png_path);

        if keep_svg {
            let svg_path = output_dir.join(format!("{stem}.svg"));
            fs::write(&svg_path, &icon.svg)
                .with_context(|| format!("Failed to write {}", svg_path.display()))?;
            written.push(svg_path);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CommonArgs;
    use crate::config::SvgConverter;
    use tempfile::TempDir;

    fn icon_cli(text: &str, root: &Path) -> IconCli {
        IconCli {
            text: text.to_string(),
            output: None,
            converter: Some(SvgConverter::Builtin),
            keep_svg: false,
            common: CommonArgs {
                root: Some(root.to_path_buf()),
                ..CommonArgs::default()
            },
        }
    }

    #[test]
    fn test_generates_both_pngs() {
        let dir = TempDir::new().unwrap();
        let written = generate_icons(&icon_cli("RECURSOS HUMANOS", dir.path())).unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("icon-192.png"), dir.path().join("icon-512.png")]
        );
        for (path, px) in written.iter().zip([192, 512]) {
            let decoded = image::open(path).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (px, px));
        }
    }

    #[test]
    fn test_keep_svg_and_output_override() {
        let dir = TempDir::new().unwrap();
        let mut cli = icon_cli("HR", dir.path());
        cli.output = Some(PathBuf::from("public/icons"));
        cli.keep_svg = true;

        let written = generate_icons(&cli).unwrap();
        let out = dir.path().join("public/icons");
        assert_eq!(written.len(), 4);
        let svg = fs::read_to_string(out.join("icon-512.svg")).unwrap();
        assert!(svg.contains(r#"y="275""#));
        assert!(out.join("icon-192.png").is_file());
    }

    #[test]
    fn test_config_file_output_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pwa-tools.toml"),
            "[icon]\noutput = \"static\"\nkeep_svg = true",
        )
        .unwrap();

        generate_icons(&icon_cli("HR", dir.path())).unwrap();
        assert!(dir.path().join("static/icon-192.svg").is_file());
        assert!(dir.path().join("static/icon-512.png").is_file());
    }

    #[test]
    fn test_blank_text_rejected() {
        let dir = TempDir::new().unwrap();
        let err = generate_icons(&icon_cli("   ", dir.path())).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
        assert!(!dir.path().join("icon-192.png").exists());
    }

    fn scratch_dirs(root: &Path) -> usize {
        fs::read_dir(root)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("pwa-icons-"))
            .count()
    }

    #[test]
    fn test_scratch_dir_removed_after_render() {
        let temp_root = TempDir::new().unwrap();
        let rasterizer = Rasterizer::new(SvgConverter::Builtin);

        let icons = render_all("RECURSOS HUMANOS", temp_root.path(), |svg, px| {
            assert_eq!(scratch_dirs(temp_root.path()), 1);
            rasterizer.render_png(svg, px)
        })
        .unwrap();

        assert_eq!(icons.len(), 2);
        assert_eq!(scratch_dirs(temp_root.path()), 0);
    }

    #[test]
    fn test_scratch_dir_removed_when_render_fails() {
        let temp_root = TempDir::new().unwrap();

        let err = render_all("HR", temp_root.path(), |_, px| {
            Err(RasterError::InvalidSize(px))
        })
        .unwrap_err();

        assert!(format!("{err:#}").contains("Failed to convert icon-192 to PNG"));
        assert_eq!(scratch_dirs(temp_root.path()), 0);
    }

    #[test]
    fn test_scratch_dir_removed_when_second_size_fails() {
        let temp_root = TempDir::new().unwrap();
        let calls = std::cell::Cell::new(0);

        let result = render_all("HR", temp_root.path(), |_, px| {
            calls.set(calls.get() + 1);
            if px == 512 {
                Err(RasterError::InvalidSize(px))
            } else {
                Ok(vec![1, 2, 3])
            }
        });

        assert!(result.is_err());
        assert_eq!(calls.get(), 2);
        assert_eq!(scratch_dirs(temp_root.path()), 0);
    }

    #[test]
    fn test_write_icons_replaces_previous_files() {
        let dir = TempDir::new().unwrap();
        let previous = dir.path().join("icon-192.png");
        fs::write(&previous, b"old").unwrap();

        let icons = [GeneratedIcon {
            size: CanvasSize::Small,
            svg: String::from("<svg/>"),
            png: b"new".to_vec(),
        }];
        let written = write_icons(&icons, dir.path(), false).unwrap();

        assert_eq!(written, vec![previous.clone()]);
        assert_eq!(fs::read(&previous).unwrap(), b"new");
        assert!(!dir.path().join("icon-192.svg").exists());
    }
}
