//! PDF export
//!
//! The export sequence is strictly ordered: suppress the export control,
//! rasterize, restore the control, encode the raster, size the page to the
//! raster's aspect ratio, assemble a single-page document, save under the
//! fixed file name. Rasterization runs on the blocking pool; the caller
//! suspends on it.

use crate::page::Mount;
use crate::rendering::Screenshot;
use crate::{Error, RenderConfig, Result};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Fixed output file name
pub const PDF_FILE_NAME: &str = "resume.pdf";

/// Fixed page width: A4, in millimeters
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// Millimeters per inch, for the raster → page scale
const MM_PER_INCH: f64 = 25.4;

/// What an export invocation produced
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Saved {
        path: PathBuf,
        page_width_mm: f64,
        page_height_mm: f64,
    },
    /// Nothing was mounted; no file was written
    NothingMounted,
}

/// Page size for a captured raster: width fixed at 210 mm, height scaled to
/// preserve the raster's aspect ratio exactly.
pub fn page_size_for(raster_width: u32, raster_height: u32) -> Result<(f64, f64)> {
    if raster_width == 0 || raster_height == 0 {
        return Err(Error::Render("captured raster is empty".into()));
    }
    let height = raster_height as f64 * PAGE_WIDTH_MM / raster_width as f64;
    Ok((PAGE_WIDTH_MM, height))
}

/// Runs export operations, one at a time.
pub struct Exporter {
    config: RenderConfig,
    in_flight: AtomicBool,
}

impl Exporter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Export the mounted page as `resume.pdf` under `out_dir`.
    ///
    /// A no-op when nothing is mounted. Fails fast with
    /// [`Error::ExportInFlight`] when another export is still running; a
    /// rasterization failure propagates after the export control's visibility
    /// has been restored.
    pub async fn export(&self, mount: &Mount, out_dir: &Path) -> Result<ExportOutcome> {
        let Some(page) = mount.page() else {
            log::debug!("export requested with nothing mounted; skipping");
            return Ok(ExportOutcome::NothingMounted);
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::ExportInFlight);
        }
        let _busy = InFlightReset(&self.in_flight);

        let bitmap = {
            let _hidden = page.suppress_export_control();
            let html = page.html().to_owned();
            let config = self.config.clone();
            let show_control = page.export_control_visible();
            let joined = tokio::task::spawn_blocking(move || {
                crate::rendering::rasterize_document(&html, &config, show_control)
            })
            .await;
            match joined {
                Ok(result) => result?,
                Err(e) => return Err(Error::Render(format!("raster task failed: {e}"))),
            }
            // _hidden drops here: visibility is restored before encoding,
            // and on every early return above.
        };

        let screenshot = bitmap.encode_png()?;
        let (page_width_mm, page_height_mm) = page_size_for(screenshot.width, screenshot.height)?;
        let bytes = single_page_pdf(&screenshot, page_width_mm, page_height_mm)?;

        let path = out_dir.join(PDF_FILE_NAME);
        std::fs::write(&path, bytes)?;
        log::info!(
            "saved {} ({}x{} px, {:.0}x{:.1} mm)",
            path.display(),
            screenshot.width,
            screenshot.height,
            page_width_mm,
            page_height_mm
        );
        Ok(ExportOutcome::Saved {
            path,
            page_width_mm,
            page_height_mm,
        })
    }
}

struct InFlightReset<'a>(&'a AtomicBool);

impl Drop for InFlightReset<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// One page sized exactly to the capture, with the image placed full-bleed.
fn single_page_pdf(screenshot: &Screenshot, width_mm: f64, height_mm: f64) -> Result<Vec<u8>> {
    // Decode through printpdf's image re-export so the embedded type matches.
    let decoded = printpdf::image_crate::load_from_memory_with_format(
        &screenshot.png_data,
        printpdf::image_crate::ImageFormat::Png,
    )
    .map_err(|e| Error::Pdf(format!("failed to reread capture: {e}")))?;

    let (doc, page_idx, layer_idx) =
        PdfDocument::new("Resume", Mm(width_mm as f32), Mm(height_mm as f32), "page");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    // At this density the image's physical extent equals the page exactly.
    let dpi = screenshot.width as f64 * MM_PER_INCH / width_mm;
    let pdf_image = Image::from_dynamic_image(&decoded);
    pdf_image.add_to_layer(
        layer,
        ImageTransform {
            dpi: Some(dpi as f32),
            ..Default::default()
        },
    );

    doc.save_to_bytes().map_err(|e| Error::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_width_is_a4() {
        let (w, h) = page_size_for(1588, 2246).unwrap();
        assert_eq!(w, 210.0);
        assert!((h - 2246.0 * 210.0 / 1588.0).abs() < 1e-9);
    }

    #[test]
    fn page_height_preserves_aspect_ratio() {
        for (w, h) in [(800u32, 600u32), (1588, 9000), (210, 210)] {
            let (pw, ph) = page_size_for(w, h).unwrap();
            let page_ratio = ph / pw;
            let raster_ratio = h as f64 / w as f64;
            assert!((page_ratio - raster_ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_raster_is_rejected() {
        assert!(page_size_for(0, 100).is_err());
        assert!(page_size_for(100, 0).is_err());
    }
}
