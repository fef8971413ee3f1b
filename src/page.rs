//! The rendered page and its mount point
//!
//! A [`Page`] owns the rendered document plus the one piece of mutable state
//! the system has: whether the export control is currently visible. The
//! control is only ever hidden through [`Page::suppress_export_control`],
//! which returns a guard that restores the previous state on every exit path.

use crate::content::Resume;
use crate::rendering::{self, Bitmap, Screenshot};
use crate::{markup, RenderConfig, Result, TextSnapshot};
use scraper::{Html, Selector};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct Page {
    html: String,
    config: RenderConfig,
    export_control_visible: AtomicBool,
}

impl Page {
    /// Render the résumé into a page.
    ///
    /// Debug builds render twice and assert the outputs match; presentation
    /// must stay a pure function of the content model.
    pub fn render(resume: &Resume, config: &RenderConfig) -> Self {
        let html = markup::render_page(resume);
        debug_assert_eq!(
            html,
            markup::render_page(resume),
            "render_page must be idempotent"
        );
        Self {
            html,
            config: config.clone(),
            export_control_visible: AtomicBool::new(true),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn export_control_visible(&self) -> bool {
        self.export_control_visible.load(Ordering::Acquire)
    }

    /// Hide the export control until the returned guard is dropped.
    pub fn suppress_export_control(&self) -> ControlSuppression<'_> {
        let was_visible = self.export_control_visible.swap(false, Ordering::AcqRel);
        ControlSuppression {
            flag: &self.export_control_visible,
            was_visible,
        }
    }

    /// Rasterize the page in its current visibility state.
    ///
    /// Blocking: resolves remote image references synchronously. Async
    /// callers go through `spawn_blocking` (see [`crate::export`]).
    pub fn rasterize(&self) -> Result<Bitmap> {
        rendering::rasterize_document(&self.html, &self.config, self.export_control_visible())
    }

    /// Rasterize and PNG-encode the page.
    pub fn snapshot(&self) -> Result<Screenshot> {
        self.rasterize()?.encode_png()
    }

    /// A plain-text snapshot of the rendered page.
    pub fn text_snapshot(&self) -> TextSnapshot {
        let document = Html::parse_document(&self.html);
        let title_sel = Selector::parse("title").unwrap();
        let body_sel = Selector::parse("body").unwrap();

        let title = document
            .select(&title_sel)
            .next()
            .map(|n| n.text().collect::<String>())
            .unwrap_or_default();

        let text = document
            .select(&body_sel)
            .next()
            .map(|b| b.text().collect::<String>())
            .unwrap_or_default();

        TextSnapshot { title, text }
    }
}

/// Scoped visibility suppression of the export control.
///
/// Dropping the guard restores the visibility observed when it was taken,
/// including on panic and error paths, so the control can never be left
/// hidden by a failed capture.
pub struct ControlSuppression<'a> {
    flag: &'a AtomicBool,
    was_visible: bool,
}

impl Drop for ControlSuppression<'_> {
    fn drop(&mut self) {
        self.flag.store(self.was_visible, Ordering::Release);
    }
}

/// The slot the rendered page is attached to once at startup.
///
/// Export against an empty mount is a no-op, mirroring a click that races
/// ahead of the first render.
#[derive(Default)]
pub struct Mount {
    page: Option<Page>,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, page: Page) -> &Page {
        self.page = Some(page);
        self.page.as_ref().expect("just attached")
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.page.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content, RenderConfig};

    fn page() -> Page {
        Page::render(content::resume(), &RenderConfig::default())
    }

    #[test]
    fn control_starts_visible() {
        assert!(page().export_control_visible());
    }

    #[test]
    fn suppression_is_scoped() {
        let page = page();
        {
            let _guard = page.suppress_export_control();
            assert!(!page.export_control_visible());
        }
        assert!(page.export_control_visible());
    }

    #[test]
    fn suppression_restores_on_panic() {
        let page = page();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = page.suppress_export_control();
            panic!("capture exploded");
        }));
        assert!(result.is_err());
        assert!(page.export_control_visible());
    }

    #[test]
    fn nested_suppression_keeps_the_hidden_state() {
        let page = page();
        let outer = page.suppress_export_control();
        {
            let _inner = page.suppress_export_control();
            assert!(!page.export_control_visible());
        }
        // The inner guard observed "already hidden" and restored exactly that.
        assert!(!page.export_control_visible());
        drop(outer);
        assert!(page.export_control_visible());
    }

    #[test]
    fn empty_mount_reports_unmounted() {
        let mount = Mount::new();
        assert!(!mount.is_mounted());
        assert!(mount.page().is_none());
    }

    #[test]
    fn text_snapshot_carries_title_and_content() {
        let snap = page().text_snapshot();
        assert!(snap.title.contains("Kim Javier"));
        assert!(snap.text.contains("Tournament Bracket App"));
        assert!(snap.text.contains("sargo.ph"));
    }
}
