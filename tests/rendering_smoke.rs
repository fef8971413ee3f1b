use cvpress::{content, Page, RenderConfig};

#[test]
fn smoke_render_and_snapshot_shape() {
    let config = RenderConfig {
        supersample: 1,
        ..RenderConfig::default()
    };
    let page = Page::render(content::resume(), &config);
    assert!(page.html().contains("resume-container"));
    let snapshot = page.text_snapshot();
    assert!(snapshot.title.contains("Resume"));
}
