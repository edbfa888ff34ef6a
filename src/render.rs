//! Icon rendering: paints the orange gradient canvas, overlays the "MB"
//! lettering, and persists the result as a PNG.

use crate::font;
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::fs::File;

pub const CANVAS_SIZE: u32 = 1024;

// Moodle orange gradient endpoints (#FF8800 to #FF5500).
pub const LIGHT_ORANGE: Rgb<u8> = Rgb([255, 136, 0]);
pub const DARK_ORANGE: Rgb<u8> = Rgb([255, 85, 0]);

pub const LABEL: &str = "MB";
pub const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const FONT_SIZE: f32 = 420.0;

/// Fixed upward shift applied after vertical centering. Visual tuning from
/// the original icon recipe, deliberately not derived from font metrics.
const VERTICAL_NUDGE: i32 = 40;

pub const OUTPUT_PATH: &str = "build/icon-source.png";

/// Color of gradient row `y`: linear interpolation between the light and dark
/// endpoints with each channel truncated to an integer. `ratio` runs from 0.0
/// at the top to just under 1.0 at the bottom, so the full canvas blends
/// smoothly without ever quite reaching the interpolation limit.
pub fn gradient_row_color(y: u32, height: u32) -> Rgb<u8> {
    let ratio = y as f64 / height as f64;
    let channel =
        |light: u8, dark: u8| (light as f64 + (dark as f64 - light as f64) * ratio) as u8;
    Rgb([
        channel(LIGHT_ORANGE[0], DARK_ORANGE[0]),
        channel(LIGHT_ORANGE[1], DARK_ORANGE[1]),
        channel(LIGHT_ORANGE[2], DARK_ORANGE[2]),
    ])
}

fn paint_gradient(canvas: &mut RgbImage) {
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        let color = gradient_row_color(y, height);
        for x in 0..width {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Draw the label centered on the canvas, in solid black. The ink bounding
/// box of the whole string is measured first and its top-left corner placed
/// at the centered offset, then each glyph is coverage-blended on top of the
/// gradient.
fn draw_label(canvas: &mut RgbImage, font: &Font<'_>) {
    let scale = Scale::uniform(FONT_SIZE);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font
        .layout(LABEL, scale, point(0.0, v_metrics.ascent))
        .collect();

    // Union of the glyph pixel bounding boxes.
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for bb in glyphs.iter().filter_map(|g| g.pixel_bounding_box()) {
        min_x = min_x.min(bb.min.x);
        min_y = min_y.min(bb.min.y);
        max_x = max_x.max(bb.max.x);
        max_y = max_y.max(bb.max.y);
    }
    if min_x > max_x {
        // No visible ink (possible if the font lacks every label glyph).
        return;
    }

    let text_width = max_x - min_x;
    let text_height = max_y - min_y;
    let (width, height) = canvas.dimensions();
    let origin_x = (width as i32 - text_width) / 2;
    let origin_y = (height as i32 - text_height) / 2 - VERTICAL_NUDGE;

    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = origin_x + (bb.min.x - min_x) + gx as i32;
                let py = origin_y + (bb.min.y - min_y) + gy as i32;
                if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                    let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                    for c in 0..3 {
                        let bg = pixel[c] as f32;
                        let fg = LABEL_COLOR[c] as f32;
                        pixel[c] = (bg + (fg - bg) * coverage) as u8;
                    }
                }
            });
        }
    }
}

/// Render the full icon into an in-memory canvas: gradient first, lettering
/// on top.
pub fn render_icon(font: &Font<'_>) -> RgbImage {
    let mut canvas = RgbImage::new(CANVAS_SIZE, CANVAS_SIZE);
    paint_gradient(&mut canvas);
    draw_label(&mut canvas, font);
    canvas
}

/// Generate the icon source image and write it to [`OUTPUT_PATH`].
///
/// The `build/` directory must already exist; a missing directory or an
/// unwritable path is a fatal error. Font resolution, by contrast, can never
/// fail (see [`font::resolve`]).
pub fn generate() -> Result<()> {
    let font = font::resolve();
    let canvas = render_icon(&font);

    let mut out_file = File::create(OUTPUT_PATH)
        .with_context(|| format!("Failed to create {OUTPUT_PATH}"))?;
    canvas
        .write_to(&mut out_file, image::ImageOutputFormat::Png)
        .context("Failed to write PNG")?;

    println!("✅ Icon saved to {OUTPUT_PATH}");
    println!();
    println!("Next steps:");
    println!("1. Install electron-icon-builder: npm install -g electron-icon-builder");
    println!("2. Generate icons: electron-icon-builder --input=build/icon-source.png --output=build");
    println!("3. This will create icon.icns (macOS), icon.ico (Windows), and icon.png (Linux)");

    Ok(())
}
