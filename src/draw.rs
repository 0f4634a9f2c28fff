//! Palette visualization: swatch grids and sine-wave previews, saved as PNG.

use std::path::PathBuf;

use egui::Color32;
use image::{Rgba, RgbaImage};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{Result, StyleError};

// ─────────────────────────────────────────────────────────────────────────────
// Box palette
// ─────────────────────────────────────────────────────────────────────────────

/// Layout of a swatch grid.
#[derive(Clone, Debug)]
pub struct BoxPaletteOptions {
    /// Side of each color block, in pixels.
    pub block: u32,
    /// Background margin around each block, in pixels.
    pub sep: u32,
    pub background: Color32,
    /// Write the image as PNG to this path.
    pub save_to: Option<PathBuf>,
}

impl Default for BoxPaletteOptions {
    fn default() -> Self {
        Self {
            block: 10,
            sep: 1,
            background: Color32::WHITE,
            save_to: None,
        }
    }
}

/// Draw palettes as a grid of square blocks, one row per palette.
///
/// Each cell is `block + 2 * sep` pixels wide with the block centered in it.
/// Rows shorter than the longest one are padded with background.
pub fn draw_box_palette(rows: &[Vec<Color32>], opts: &BoxPaletteOptions) -> Result<RgbaImage> {
    let n_rows = rows.len() as u32;
    let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
    if n_rows == 0 || n_cols == 0 || opts.block == 0 {
        return Err(StyleError::Render("nothing to draw".to_string()));
    }
    let too_large = || {
        StyleError::Render(format!(
            "{n_cols}x{n_rows} blocks of {} px with {} px margins do not fit an image",
            opts.block, opts.sep
        ))
    };
    let side = opts
        .sep
        .checked_mul(2)
        .and_then(|s| s.checked_add(opts.block))
        .ok_or_else(too_large)?;
    let width = side.checked_mul(n_cols).ok_or_else(too_large)?;
    let height = side.checked_mul(n_rows).ok_or_else(too_large)?;

    let mut img = RgbaImage::from_pixel(width, height, rgba(opts.background));
    for (r, row) in rows.iter().enumerate() {
        for (c, color) in row.iter().enumerate() {
            let x0 = opts.sep + side * c as u32;
            let y0 = opts.sep + side * r as u32;
            let px = rgba(*color);
            for y in y0..y0 + opts.block {
                for x in x0..x0 + opts.block {
                    img.put_pixel(x, y, px);
                }
            }
        }
    }

    if let Some(path) = &opts.save_to {
        img.save(path)?;
        log::debug!("saved box palette to {}", path.display());
    }
    Ok(img)
}

fn rgba(c: Color32) -> Rgba<u8> {
    Rgba(c.to_srgba_unmultiplied())
}

// ─────────────────────────────────────────────────────────────────────────────
// Sine palette
// ─────────────────────────────────────────────────────────────────────────────

/// Canvas settings for [`draw_sin_palette`].
#[derive(Clone, Debug)]
pub struct SinPaletteOptions {
    pub width: u32,
    pub height: u32,
    pub line_width: f32,
    /// `None` leaves the canvas transparent.
    pub background: Option<Color32>,
    pub save_to: Option<PathBuf>,
}

impl Default for SinPaletteOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            line_width: 2.5,
            background: None,
            save_to: None,
        }
    }
}

const SIN_SAMPLES: usize = 100;
const SIN_MARGIN: f32 = 0.05;

/// Draw one sine wave per color: wave `i` (1-based) is `sin(x + i/2) * (n + 1 - i)`
/// over `x` in `[-5, 5]`, so earlier colors get the larger amplitudes.
pub fn draw_sin_palette(colors: &[Color32], opts: &SinPaletteOptions) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(opts.width, opts.height).ok_or_else(|| {
        StyleError::Render(format!("invalid canvas {}x{}", opts.width, opts.height))
    })?;
    if let Some(bg) = opts.background {
        let [r, g, b, a] = bg.to_srgba_unmultiplied();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    let n = colors.len();
    let w = opts.width as f32;
    let h = opts.height as f32;
    let amp_max = n.max(1) as f32;
    let to_px = |x: f32, y: f32| {
        let u = (x + 5.0) / 10.0;
        let v = 0.5 - y / (2.0 * amp_max);
        (
            w * (SIN_MARGIN + u * (1.0 - 2.0 * SIN_MARGIN)),
            h * (SIN_MARGIN + v * (1.0 - 2.0 * SIN_MARGIN)),
        )
    };

    let stroke = Stroke {
        width: opts.line_width,
        ..Stroke::default()
    };
    for (k, color) in colors.iter().enumerate() {
        let i = (k + 1) as f32;
        let amp = (n + 1) as f32 - i;
        let mut pb = PathBuilder::new();
        for s in 0..SIN_SAMPLES {
            let x = -5.0 + 10.0 * s as f32 / (SIN_SAMPLES - 1) as f32;
            let (px, py) = to_px(x, (x + i * 0.5).sin() * amp);
            if s == 0 {
                pb.move_to(px, py);
            } else {
                pb.line_to(px, py);
            }
        }
        let Some(path) = pb.finish() else {
            continue;
        };
        let mut paint = Paint::default();
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    if let Some(path) = &opts.save_to {
        pixmap
            .save_png(path)
            .map_err(|e| StyleError::Render(format!("{}: {e}", path.display())))?;
        log::debug!("saved sine palette to {}", path.display());
    }
    Ok(pixmap)
}
