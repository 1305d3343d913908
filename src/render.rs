use crate::font;
use crate::spec::{FALLBACK_COLOR, GLYPH, GLYPH_COLOR, ICONSET, OUTPUT_DIR, TRANSPARENT};

use ab_glyph::PxScale;
use anyhow::{Context, Result, bail};
use image::RgbaImage;
use imageproc::drawing::{draw_filled_ellipse_mut, draw_text_mut, text_size};
use log::{info, warn};
use std::path::Path;

/// Render one icon and write it as a PNG to `output_path`.
///
/// Font trouble is recoverable and degrades to the circle fallback; a
/// failed write is not and aborts the whole run.
pub fn render_icon(size: u32, output_path: &Path) -> Result<()> {
    let mut canvas = RgbaImage::from_pixel(size, size, TRANSPARENT);

    if let Err(e) = draw_glyph(&mut canvas, size) {
        warn!("Glyph rendering failed, using circle fallback: {e}");
        // Start over so a partially drawn glyph never leaks into the output.
        canvas = RgbaImage::from_pixel(size, size, TRANSPARENT);
        draw_fallback(&mut canvas);
    }

    canvas
        .save(output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Created: {} ({size}x{size})", output_path.display());
    Ok(())
}

fn draw_glyph(canvas: &mut RgbaImage, size: u32) -> Result<()> {
    let font = font::load_glyph_font(GLYPH)?;

    let scale = PxScale::from(size as f32 * 0.7);
    let (text_width, text_height) = text_size(scale, &font, GLYPH);
    if text_width == 0 || text_height == 0 {
        bail!("glyph {GLYPH:?} measured as empty at {size}px");
    }

    let (x, y) = centered_origin(size, text_width, text_height);
    draw_text_mut(canvas, GLYPH_COLOR, x, y, scale, &font, GLYPH);
    Ok(())
}

/// Top-left draw origin that centers a `width` x `height` box on the canvas.
fn centered_origin(size: u32, width: u32, height: u32) -> (i32, i32) {
    let x = (size as i32 - width as i32) / 2;
    let y = (size as i32 - height as i32) / 2;
    (x, y)
}

/// Solid tomato-colored circle inscribed with a 10%-of-size margin.
pub fn draw_fallback(canvas: &mut RgbaImage) {
    let size = canvas.width() as i32;
    let margin = size / 10;
    let center = (size / 2, size / 2);
    let radius = size / 2 - margin;
    draw_filled_ellipse_mut(canvas, center, radius, radius, FALLBACK_COLOR);
}

/// Render every entry of the iconset table into `dir`, in order.
pub fn generate_iconset(dir: &Path) -> Result<()> {
    for spec in ICONSET {
        let output_path = dir.join(spec.filename);
        render_icon(spec.size, &output_path)?;
    }
    Ok(())
}

pub fn run() -> Result<()> {
    generate_iconset(Path::new(OUTPUT_DIR))
}
