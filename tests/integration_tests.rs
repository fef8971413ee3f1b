//! Integration tests for the resume renderer

use cvpress::capture::to_data_uri;
use cvpress::content::{Competency, Contact, Job, Profile, ProjectEntry, Resume};
use cvpress::{content, markup, Page, RenderConfig, Viewport};
use std::io::Cursor;
use std::sync::Once;
use tiny_http::{Response, Server};

static INIT: Once = Once::new();

fn tiny_png(rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(8, 8, image::Rgba(rgba));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .expect("encode fixture png");
    bytes
}

fn fixture_resume(photo: String) -> Resume {
    Resume {
        profile: Profile {
            name: "Ada Lovelace".into(),
            title: "Analyst".into(),
            photo,
            contact: Contact {
                location: "London".into(),
                website: "https://example.org".into(),
                email: "ada@example.org".into(),
                github: "https://github.com/ada".into(),
            },
        },
        summary: "Worked on the Analytical Engine.".into(),
        competencies: vec![Competency {
            category: "Mathematics".into(),
            skills: "Number theory, tables".into(),
        }],
        experience: vec![Job {
            title: "Collaborator".into(),
            details: "1842–1843".into(),
            points: vec!["Published the first program.".into()],
        }],
        projects: vec![ProjectEntry::Text("Notes on the Analytical Engine".into())],
        skills: vec!["Mathematics".into()],
    }
}

/// Serve a small avatar image for capture tests
fn start_avatar_server() -> String {
    INIT.call_once(|| {
        std::thread::spawn(|| {
            let server = Server::http("127.0.0.1:18083").unwrap();
            for request in server.incoming_requests() {
                let response = match request.url() {
                    "/avatar.png" => Response::from_data(tiny_png([200, 40, 40, 255]))
                        .with_header("Content-Type: image/png".parse::<tiny_http::Header>().unwrap()),
                    _ => Response::from_data(b"Not Found".to_vec()).with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });
        // Give the server time to start
        std::thread::sleep(std::time::Duration::from_millis(100));
    });

    "http://127.0.0.1:18083".to_string()
}

#[test]
fn job_heading_matches_the_rendered_page() {
    let job = &content::resume().experience[0];
    let expected = "Founder / Technical Lead – Tournament Bracket App – 2024–Present";
    assert_eq!(markup::job_heading(job), expected);

    let page = Page::render(content::resume(), &RenderConfig::default());
    assert!(page.text_snapshot().text.contains(expected));
}

#[test]
fn empty_details_leave_no_separator_residue() {
    let job = &content::resume().experience[1];
    assert!(job.details.is_empty());
    let heading = markup::job_heading(job);
    assert_eq!(heading, job.title);

    let page = Page::render(content::resume(), &RenderConfig::default());
    let text = page.text_snapshot().text;
    assert!(text.contains(&heading));
    assert!(!text.contains(&format!("{heading} –\n")));
}

#[test]
fn contact_links_display_stripped_forms() {
    let page = Page::render(content::resume(), &RenderConfig::default());
    let html = page.html();
    // Displayed text is the stripped form even though the href keeps the URL
    assert!(html.contains(">sargo.ph</a>"));
    assert!(html.contains(">dominjav43</a>"));
    assert!(html.contains("href=\"https://sargo.ph\""));
    assert!(html.contains("href=\"https://github.com/dominjav43\""));
}

#[test]
fn snapshot_dimensions_follow_the_supersample_factor() {
    let photo = to_data_uri("image/png", &tiny_png([10, 20, 30, 255]));
    let resume = fixture_resume(photo);
    let config = RenderConfig {
        viewport: Viewport {
            width: 640,
            height: 480,
        },
        supersample: 2,
        ..RenderConfig::default()
    };
    let page = Page::render(&resume, &config);
    let shot = page.snapshot().expect("snapshot");
    assert_eq!(shot.width, 640 * 2);
    assert!(shot.height >= 480 * 2);
    assert_eq!(&shot.png_data[0..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn remote_avatar_is_captured_into_the_raster() {
    // Skip on CI where network may not be available
    if std::env::var("CI").is_ok() {
        return;
    }

    let base_url = start_avatar_server();
    let resume = fixture_resume(format!("{base_url}/avatar.png"));
    let config = RenderConfig {
        supersample: 1,
        ..RenderConfig::default()
    };
    let page = Page::render(&resume, &config);
    let shot = page.snapshot().expect("snapshot with remote avatar");

    let decoded = image::load_from_memory(&shot.png_data)
        .expect("decode capture")
        .to_rgba8();
    let found_avatar = decoded
        .pixels()
        .any(|p| p.0[0] > 150 && p.0[1] < 100 && p.0[2] < 100);
    assert!(found_avatar, "expected avatar pixels in the capture");
}

#[test]
fn unresolvable_avatar_fails_the_capture() {
    // Port 9 on loopback refuses connections immediately.
    let resume = fixture_resume("http://127.0.0.1:9/missing.png".into());
    let page = Page::render(&resume, &RenderConfig::default());
    let err = page.snapshot().unwrap_err();
    assert!(matches!(err, cvpress::Error::Capture(_)));
}
