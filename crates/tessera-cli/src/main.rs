//! `tessera`: renders one GeoJSON tile to an image.

mod source;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::{DynamicImage, ImageFormat};

use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::paint::Color;
use tessera_engine::render::{Canvas, RenderConfig};
use tessera_engine::tile::TileScene;

#[derive(Debug, Parser)]
#[command(name = "tessera", version, about = "Rasterize a GeoJSON map tile")]
struct Args {
    /// GeoJSON FeatureCollection with the tile's features.
    input: PathBuf,

    /// Output image; the format follows the extension (png, jpg, bmp, ...).
    #[arg(short, long, default_value = "tile.png")]
    output: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = RenderConfig::default().width)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = RenderConfig::default().height)]
    height: u32,

    /// Background color as #rrggbb or #rrggbbaa.
    #[arg(long, default_value = "#ffffff", value_parser = parse_color)]
    background: Color,

    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long)]
    log: Option<String>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("invalid color {s:?}, expected #rrggbb or #rrggbbaa"))
}

/// Writes `canvas` in the format implied by `path`'s extension.
///
/// JPEG has no alpha channel, so the tile is flattened to RGB first.
fn save_canvas(canvas: &Canvas, path: &Path) -> Result<()> {
    let rgba = image::RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgba8())
        .context("canvas buffer does not match its dimensions")?;
    let image = DynamicImage::ImageRgba8(rgba);

    let written = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => image.to_rgb8().save(path),
        _ => image.save(path),
    };
    written.with_context(|| format!("failed to write {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = args.log.clone() {
        logging = logging.with_filter(filter);
    }
    init_logging(logging);

    let started = Instant::now();
    let features = source::read_features(&args.input)?;

    let mut scene = TileScene::new();
    let produced = scene.add_all(&features);
    log::info!("classified {produced} of {} features", features.len());

    let config = RenderConfig::new(args.width, args.height).background(args.background);
    let canvas = scene
        .render(&config)
        .with_context(|| format!("failed to render {}", args.input.display()))?;

    save_canvas(&canvas, &args.output)?;
    log::info!(
        "wrote {} ({}x{}) in {:.1?}",
        args.output.display(),
        canvas.width(),
        canvas.height(),
        started.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_engine::paint::palette;
    use tessera_engine::render::DrawTarget;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tessera-{}-{name}", std::process::id()))
    }

    fn coral_tile() -> Canvas {
        let mut canvas = Canvas::new(16, 8).unwrap();
        canvas.fill(palette::LIGHT_CORAL);
        canvas
    }

    #[test]
    fn saves_jpeg_without_alpha() {
        let path = scratch_path("tile.jpg");
        save_canvas(&coral_tile(), &path).unwrap();

        let decoded = image::open(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn saves_png_with_alpha() {
        let path = scratch_path("tile.png");
        save_canvas(&coral_tile(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();
        assert_eq!(decoded.get_pixel(3, 3).0, [240, 128, 128, 255]);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let path = scratch_path("tile.nope");
        assert!(save_canvas(&coral_tile(), &path).is_err());
    }
}
