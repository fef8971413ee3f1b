//! Rendering pipeline: parsed document → layout → display list → raster
//!
//! The pipeline is headless and deterministic: the same document and
//! configuration always produce the same bytes, which is what the golden
//! tests key on.

pub mod layout;
pub mod paint;
pub mod raster;

use crate::capture::ImageFetcher;
use crate::{Error, RenderConfig, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use scraper::Html;
use sha2::{Digest, Sha256};

/// Raw RGBA raster of the rendered page, prior to encoding.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// RGBA, row-major, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; (width as usize) * (height as usize) * 4],
        }
    }

    /// Encode the raster as a PNG screenshot.
    pub fn encode_png(&self) -> Result<Screenshot> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| Error::Encode("raster buffer has the wrong length".into()))?;
        let mut png_data = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut png_data),
                image::ImageOutputFormat::Png,
            )
            .map_err(|e| Error::Encode(e.to_string()))?;
        Ok(Screenshot {
            width: self.width,
            height: self.height,
            png_data,
        })
    }
}

/// A PNG-encoded capture of the rendered page
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Content-addressed digest of the encoded bytes (hex sha-256).
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.png_data);
        hex::encode(hasher.finalize())
    }

    /// The capture as a `data:` URI, suitable for inlining into markup.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png_data))
    }
}

/// Rasterize a rendered document into a bitmap.
///
/// `show_export_control` reflects the page's visibility state at capture
/// time; a suppressed control contributes nothing to layout or paint, so the
/// captured content height collapses exactly as `display: none` would.
///
/// Remote image references are fetched through a blocking HTTP client, so
/// this must run off the async executor (the exporter routes it through
/// `spawn_blocking`).
pub fn rasterize_document(
    html: &str,
    config: &RenderConfig,
    show_export_control: bool,
) -> Result<Bitmap> {
    let document = Html::parse_document(html);
    let list = layout::layout_document(&document, config.viewport, show_export_control);
    let commands = paint::build_display_list(&list);
    let fetcher = ImageFetcher::new(config)?;
    raster::rasterize(&list, &commands, config.supersample, &fetcher)
}
