//! Image capture for rasterization
//!
//! Resolves `<img>` sources while the page is being rasterized: `data:` URIs
//! are decoded in place, `http(s)` references are fetched with a blocking
//! client. A reference that cannot be fetched or decoded fails the capture;
//! the exporter propagates that failure without retrying.
//!
//! The blocking client must not run on an async executor thread; callers in
//! async contexts go through `spawn_blocking` (see [`crate::export`]).

use crate::{Error, RenderConfig, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;

pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.fetch_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Resolve an image reference to its raw bytes.
    pub fn fetch(&self, src: &str) -> Result<Vec<u8>> {
        if let Some(rest) = src.strip_prefix("data:") {
            return decode_data_uri(rest);
        }

        let parsed = url::Url::parse(src)
            .map_err(|e| Error::Capture(format!("invalid image reference {src}: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Capture(format!(
                    "unsupported image scheme {other}: {src}"
                )))
            }
        }

        log::debug!("fetching image {src}");
        let response = self
            .client
            .get(parsed.as_str())
            .send()
            .map_err(|e| Error::Capture(format!("failed to fetch {src}: {e}")))?;
        if !response.status().is_success() {
            return Err(Error::Capture(format!(
                "fetching {src} returned {}",
                response.status()
            )));
        }
        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| Error::Capture(format!("failed to read {src}: {e}")))
    }
}

fn decode_data_uri(rest: &str) -> Result<Vec<u8>> {
    let (_media_type, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| Error::Capture("only base64 data URIs are supported".into()))?;
    STANDARD
        .decode(payload.trim())
        .map_err(|e| Error::Capture(format!("invalid base64 payload: {e}")))
}

/// Encode raw bytes as a `data:` URI.
pub fn to_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

// PNG and JPEG cover the photo sources the page uses.
fn sniff_media_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Rewrite remote `<img>` references in a rendered document into inline
/// `data:` URIs, making the written page self-contained.
pub fn inline_images(html: &str, fetcher: &ImageFetcher) -> Result<String> {
    let document = Html::parse_document(html);
    let img_sel = Selector::parse("img").unwrap();
    let mut out = html.to_string();
    for img in document.select(&img_sel) {
        let Some(src) = img.value().attr("src") else {
            continue;
        };
        if !src.starts_with("http://") && !src.starts_with("https://") {
            continue;
        }
        let bytes = fetcher.fetch(src)?;
        let uri = to_data_uri(sniff_media_type(&bytes), &bytes);
        out = out.replace(src, &uri);
    }
    Ok(out)
}
