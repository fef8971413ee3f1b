use std::fs;
use std::path::PathBuf;

use cvpress::rendering::rasterize_document;
use cvpress::{RenderConfig, Viewport};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_raster_matches_fixture() {
    let page = fs::read_to_string("tests/goldens/pages/page1.html").expect("read fixture");
    let config = RenderConfig {
        viewport: Viewport {
            width: 256,
            height: 128,
        },
        supersample: 1,
        ..RenderConfig::default()
    };

    let screenshot = rasterize_document(&page, &config, true)
        .expect("rasterize fixture")
        .encode_png()
        .expect("encode fixture");

    // Goldens are content-addressed by the capture digest
    let expected_path = golden_path("page1.digest");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, screenshot.digest()).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(screenshot.digest(), expected.trim());
}
