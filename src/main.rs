use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cvpress::capture::{self, ImageFetcher};
use cvpress::{content, markup, ExportOutcome, Exporter, Mount, Page, RenderConfig, Viewport};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvpress", version, about = "Headless resume renderer and PDF exporter")]
struct Cli {
    /// Viewport width in CSS pixels
    #[arg(long, default_value_t = 794)]
    width: u32,

    /// Capture resolution multiplier
    #[arg(long, default_value_t = 2)]
    scale: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the static resume page as HTML
    Render {
        #[arg(long, default_value = "resume.html")]
        out: PathBuf,
        /// Inline remote images as data URIs so the page is self-contained
        #[arg(long)]
        inline_images: bool,
    },
    /// Capture the page as a PNG screenshot
    Snapshot {
        #[arg(long, default_value = "resume.png")]
        out: PathBuf,
    },
    /// Export the page as a single-page PDF (resume.pdf)
    Export {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print a plain-text snapshot of the page
    Text,
    /// Dump the resume content model as JSON
    Content,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RenderConfig {
        viewport: Viewport {
            width: cli.width,
            ..Viewport::default()
        },
        supersample: cli.scale,
        ..RenderConfig::default()
    };

    match cli.command {
        Command::Render { out, inline_images } => {
            let html = markup::render_page(content::resume());
            let html = if inline_images {
                let config = config.clone();
                tokio::task::spawn_blocking(move || -> cvpress::Result<String> {
                    let fetcher = ImageFetcher::new(&config)?;
                    capture::inline_images(&html, &fetcher)
                })
                .await
                .context("inline task failed")??
            } else {
                html
            };
            std::fs::write(&out, html).with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {}", out.display());
        }
        Command::Snapshot { out } => {
            let shot = tokio::task::spawn_blocking(move || {
                let page = Page::render(content::resume(), &config);
                page.snapshot()
            })
            .await
            .context("capture task failed")??;
            std::fs::write(&out, &shot.png_data)
                .with_context(|| format!("writing {}", out.display()))?;
            println!(
                "wrote {} ({}x{}, sha256 {})",
                out.display(),
                shot.width,
                shot.height,
                &shot.digest()[..12]
            );
        }
        Command::Export { out_dir } => {
            let mut mount = Mount::new();
            mount.attach(Page::render(content::resume(), &config));
            let exporter = Exporter::new(config);
            match exporter.export(&mount, &out_dir).await? {
                ExportOutcome::Saved {
                    path,
                    page_width_mm,
                    page_height_mm,
                } => println!(
                    "wrote {} ({:.0} x {:.1} mm)",
                    path.display(),
                    page_width_mm,
                    page_height_mm
                ),
                ExportOutcome::NothingMounted => println!("nothing mounted; no file written"),
            }
        }
        Command::Text => {
            let page = Page::render(content::resume(), &config);
            let snapshot = page.text_snapshot();
            println!("{}", snapshot.title);
            println!();
            println!("{}", snapshot.text.trim());
        }
        Command::Content => {
            println!("{}", serde_json::to_string_pretty(content::resume())?);
        }
    }

    Ok(())
}
