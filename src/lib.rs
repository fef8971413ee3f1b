//! CVPress
//!
//! A headless renderer for a single static résumé page, with a "download as
//! PDF" export that rasterizes the rendered page and wraps the raster in a
//! single-page PDF document.
//!
//! # Pipeline
//!
//! - **Content** ([`content`]): the static résumé aggregate, built once
//! - **Markup** ([`markup`]): pure content → HTML presentation
//! - **Rendering** ([`rendering`]): layout → display list → supersampled
//!   raster → PNG
//! - **Export** ([`export`]): hide the export control, capture, restore,
//!   size a page to the capture's aspect ratio, save `resume.pdf`
//!
//! # Example
//!
//! ```no_run
//! use cvpress::{content, Exporter, Mount, Page, RenderConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> cvpress::Result<()> {
//! let config = RenderConfig::default();
//! let mut mount = Mount::new();
//! mount.attach(Page::render(content::resume(), &config));
//!
//! let exporter = Exporter::new(config);
//! exporter.export(&mount, std::path::Path::new(".")).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod capture;
pub mod content;
pub mod export;
pub mod markup;
pub mod page;
pub mod rendering;

pub use export::{ExportOutcome, Exporter};
pub use page::{Mount, Page};
pub use rendering::Screenshot;

/// Configuration for rendering and export
///
/// Defaults are sized for an A4-proportioned page: a 794-px viewport width
/// (210 mm at 96 dpi) and a 2× supersampling factor for output sharpness.
///
/// # Examples
///
/// ```
/// let cfg = cvpress::RenderConfig::default();
/// assert_eq!(cfg.supersample, 2);
/// assert!(cfg.user_agent.contains("cvpress"));
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// User agent sent when fetching remote image content
    pub user_agent: String,
    /// Viewport dimensions in CSS pixels; height is the minimum page extent,
    /// content may grow past it
    pub viewport: Viewport,
    /// Capture resolution multiplier over CSS pixels
    pub supersample: u32,
    /// Timeout for remote image fetches in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; cvpress/0.1)".to_string(),
            viewport: Viewport::default(),
            supersample: 2,
            fetch_timeout_ms: 10_000,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        // 210 x 297 mm at 96 dpi
        Self {
            width: 794,
            height: 1123,
        }
    }
}

/// A textual snapshot of the rendered page
///
/// Returned by [`Page::text_snapshot`]; a simple representation of the page
/// content suitable for textual tests and quick inspection.
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    /// Page title
    pub title: String,
    /// Extracted text content
    pub text: String,
}
