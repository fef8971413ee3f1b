//! Rasterizer: paint commands → RGBA pixels
//!
//! Everything is drawn at `supersample ×` the CSS pixel size. Glyphs come
//! from an embedded 8×8 bitmap font; each glyph pixel becomes a
//! `scale × supersample` square block, which keeps the output deterministic
//! with no font files on disk.

use crate::capture::ImageFetcher;
use crate::rendering::layout::DisplayList;
use crate::rendering::paint::PaintCommand;
use crate::rendering::Bitmap;
use crate::{Error, Result};
use font8x8::legacy::BASIC_LEGACY;

/// Rasterize a display list into a bitmap of
/// `(width × supersample, height × supersample)` device pixels.
pub fn rasterize(
    list: &DisplayList,
    commands: &[PaintCommand],
    supersample: u32,
    fetcher: &ImageFetcher,
) -> Result<Bitmap> {
    let factor = supersample.max(1);
    let width = list.width * factor;
    let height = list.height * factor;
    if width == 0 || height == 0 {
        return Err(Error::Render("page has an empty extent".into()));
    }
    let mut bitmap = Bitmap::new(width, height);

    for command in commands {
        match command {
            PaintCommand::SolidRect {
                x,
                y,
                width,
                height,
                rgba,
            } => fill_rect(
                &mut bitmap,
                x * factor as i32,
                y * factor as i32,
                width * factor,
                height * factor,
                *rgba,
            ),
            PaintCommand::Glyphs {
                x,
                y,
                text,
                scale,
                bold,
                rgba,
            } => draw_text(
                &mut bitmap,
                x * factor as i32,
                y * factor as i32,
                text,
                scale * factor,
                *bold,
                *rgba,
            ),
            PaintCommand::Image {
                x,
                y,
                width,
                height,
                src,
            } => blit_image(
                &mut bitmap,
                fetcher,
                src,
                x * factor as i32,
                y * factor as i32,
                width * factor,
                height * factor,
            )?,
        }
    }
    Ok(bitmap)
}

fn put_pixel(bitmap: &mut Bitmap, x: i32, y: i32, rgba: (u8, u8, u8, u8)) {
    if x < 0 || y < 0 || x >= bitmap.width as i32 || y >= bitmap.height as i32 {
        return;
    }
    let idx = ((y as u32 * bitmap.width + x as u32) * 4) as usize;
    let (r, g, b, a) = rgba;
    if a == 255 {
        bitmap.pixels[idx] = r;
        bitmap.pixels[idx + 1] = g;
        bitmap.pixels[idx + 2] = b;
        bitmap.pixels[idx + 3] = 255;
    } else {
        // Source-over blend against the existing pixel
        let alpha = a as u32;
        let inv = 255 - alpha;
        for (offset, channel) in [r, g, b].into_iter().enumerate() {
            let dst = bitmap.pixels[idx + offset] as u32;
            bitmap.pixels[idx + offset] = ((channel as u32 * alpha + dst * inv) / 255) as u8;
        }
        bitmap.pixels[idx + 3] = 255;
    }
}

fn fill_rect(bitmap: &mut Bitmap, x: i32, y: i32, width: u32, height: u32, rgba: (u8, u8, u8, u8)) {
    for dy in 0..height as i32 {
        for dx in 0..width as i32 {
            put_pixel(bitmap, x + dx, y + dy, rgba);
        }
    }
}

fn draw_text(
    bitmap: &mut Bitmap,
    x: i32,
    y: i32,
    text: &str,
    glyph_scale: u32,
    bold: bool,
    rgba: (u8, u8, u8, u8),
) {
    let k = glyph_scale.max(1);
    let mut pen_x = x;
    for ch in text.chars() {
        let glyph = BASIC_LEGACY[map_char(ch) as usize];
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8u32 {
                if bits & (1 << col) != 0 {
                    let px = pen_x + (col * k) as i32;
                    let py = y + (row as u32 * k) as i32;
                    fill_rect(bitmap, px, py, k, k, rgba);
                    if bold {
                        // Classic double-strike, one device pixel to the right
                        fill_rect(bitmap, px + 1, py, k, k, rgba);
                    }
                }
            }
        }
        pen_x += (8 * k) as i32;
    }
}

// Map a character onto the 7-bit glyph table, transliterating the handful of
// typographic marks the résumé content uses.
fn map_char(ch: char) -> u8 {
    if ch.is_ascii() && !ch.is_ascii_control() {
        return ch as u8;
    }
    match ch {
        '\u{2013}' | '\u{2014}' | '\u{2212}' => b'-',
        '\u{2018}' | '\u{2019}' => b'\'',
        '\u{201c}' | '\u{201d}' => b'"',
        '\u{2022}' | '\u{00b7}' => b'*',
        '\u{2026}' => b'.',
        _ => b'?',
    }
}

fn blit_image(
    bitmap: &mut Bitmap,
    fetcher: &ImageFetcher,
    src: &str,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> Result<()> {
    let bytes = fetcher.fetch(src)?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| Error::Capture(format!("undecodable image content: {e}")))?;
    let resized = image::imageops::resize(
        &decoded.to_rgba8(),
        width.max(1),
        height.max(1),
        image::imageops::FilterType::Triangle,
    );
    for (dx, dy, pixel) in resized.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        put_pixel(bitmap, x + dx as i32, y + dy as i32, (r, g, b, a));
    }
    Ok(())
}
