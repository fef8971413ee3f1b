//! Presentation component: résumé content → HTML document
//!
//! A pure function from the static content model to the page markup. Render
//! is idempotent and side-effect free; optional fields that are absent simply
//! omit their fragment. The export control's wrapper element is part of the
//! emitted subtree so the capture path has something to suppress.

use crate::content::{Job, ProjectEntry, Resume};

/// Class of the wrapper element around the export control
pub const EXPORT_CONTROL_CLASS: &str = "export-bar";

/// Heading text for one experience entry.
///
/// Reads "`<title> – <detail>`" when the detail string is non-empty and is
/// exactly the title otherwise.
pub fn job_heading(job: &Job) -> String {
    if job.details.is_empty() {
        job.title.clone()
    } else {
        format!("{} – {}", job.title, job.details)
    }
}

/// Website display form: scheme prefix stripped.
pub fn display_website(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Code-hosting display form: base URL prefix stripped down to the handle.
pub fn display_github(url: &str) -> &str {
    url.strip_prefix("https://github.com/")
        .or_else(|| url.strip_prefix("http://github.com/"))
        .unwrap_or(url)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full résumé document.
pub fn render_page(resume: &Resume) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{} – Resume</title>\n", escape(&resume.profile.name)));
    html.push_str("<style>\n");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<div class=\"resume-container\">\n");

    header_section(&mut html, resume);
    summary_section(&mut html, resume);
    experience_section(&mut html, resume);
    projects_section(&mut html, resume);
    skills_section(&mut html, resume);
    export_bar(&mut html);

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn header_section(html: &mut String, resume: &Resume) {
    let contact = &resume.profile.contact;
    html.push_str("<header class=\"resume-header\">\n<div class=\"header-main\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&resume.profile.name)));
    html.push_str(&format!("<p class=\"title\">{}</p>\n", escape(&resume.profile.title)));
    html.push_str("<div class=\"contact-info\">\n");
    html.push_str(&format!(
        "<div class=\"contact-item\">{}</div>\n",
        escape(&contact.location)
    ));
    html.push_str(&format!(
        "<div class=\"contact-item\"><a href=\"{}\">{}</a></div>\n",
        escape(&contact.website),
        escape(display_website(&contact.website))
    ));
    html.push_str(&format!(
        "<div class=\"contact-item\"><a href=\"mailto:{}\">{}</a></div>\n",
        escape(&contact.email),
        escape(&contact.email)
    ));
    html.push_str(&format!(
        "<div class=\"contact-item\"><a href=\"{}\">{}</a></div>\n",
        escape(&contact.github),
        escape(display_github(&contact.github))
    ));
    html.push_str("</div>\n</div>\n");
    html.push_str(&format!(
        "<img class=\"profile-image\" src=\"{}\" alt=\"Profile\">\n",
        escape(&resume.profile.photo)
    ));
    html.push_str("</header>\n");
}

fn summary_section(html: &mut String, resume: &Resume) {
    html.push_str("<section class=\"summary\">\n<h2>Summary</h2>\n");
    html.push_str(&format!("<p>{}</p>\n", escape(&resume.summary)));
    html.push_str("<h3>Core Competencies:</h3>\n<ul>\n");
    for comp in &resume.competencies {
        html.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>\n",
            escape(&comp.category),
            escape(&comp.skills)
        ));
    }
    html.push_str("</ul>\n</section>\n");
}

fn experience_section(html: &mut String, resume: &Resume) {
    html.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
    for job in &resume.experience {
        html.push_str("<div class=\"job-entry\">\n");
        html.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape(&job_heading(job))));
        for point in &job.points {
            html.push_str(&format!("<li>{}</li>\n", escape(point)));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</section>\n");
}

fn projects_section(html: &mut String, resume: &Resume) {
    html.push_str("<section class=\"projects\">\n<h2>Projects / Featured Work</h2>\n<ul>\n");
    for project in &resume.projects {
        match project {
            ProjectEntry::Text(text) => {
                html.push_str(&format!("<li>{}</li>\n", escape(text)));
            }
            ProjectEntry::Linked {
                before,
                link_text,
                href,
                after,
            } => {
                html.push_str(&format!(
                    "<li>{}<a href=\"{}\">{}</a>{}</li>\n",
                    escape(before),
                    escape(href),
                    escape(link_text),
                    escape(after)
                ));
            }
        }
    }
    html.push_str("</ul>\n</section>\n");
}

fn skills_section(html: &mut String, resume: &Resume) {
    html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n<ul>\n");
    for skill in &resume.skills {
        html.push_str(&format!("<li>{}</li>\n", escape(skill)));
    }
    html.push_str("</ul>\n</section>\n");
}

fn export_bar(html: &mut String) {
    html.push_str(&format!(
        "<div class=\"{}\"><button class=\"download-btn\" type=\"button\">Download PDF</button></div>\n",
        EXPORT_CONTROL_CLASS
    ));
}

const STYLESHEET: &str = "\
body { font-family: Georgia, serif; color: #202020; background: #f4f4f4; margin: 0; }
.resume-container { max-width: 794px; margin: 0 auto; padding: 24px; background: #ffffff; }
.resume-header { display: flex; justify-content: space-between; }
.profile-image { width: 96px; height: 96px; border-radius: 50%; object-fit: cover; }
h1 { margin: 0; font-size: 2em; }
h2 { border-bottom: 2px solid #3a6da3; padding-bottom: 4px; }
.title { color: #555555; }
.contact-info { font-size: 0.9em; }
.export-bar { text-align: center; margin-top: 16px; }
.download-btn { padding: 8px 16px; }
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{self, Job};

    #[test]
    fn heading_with_details_uses_separator() {
        let job = &content::resume().experience[0];
        assert_eq!(
            job_heading(job),
            "Founder / Technical Lead – Tournament Bracket App – 2024–Present"
        );
    }

    #[test]
    fn heading_without_details_is_bare_title() {
        let job = Job {
            title: "EV Industry – Infrastructure & Systems Architect".into(),
            details: String::new(),
            points: vec![],
        };
        assert_eq!(job_heading(&job), job.title);
    }

    #[test]
    fn contact_urls_are_stripped_for_display() {
        assert_eq!(display_website("https://sargo.ph"), "sargo.ph");
        assert_eq!(display_website("http://sargo.ph"), "sargo.ph");
        assert_eq!(display_github("https://github.com/dominjav43"), "dominjav43");
    }

    #[test]
    fn render_is_idempotent() {
        let resume = content::resume();
        assert_eq!(render_page(resume), render_page(resume));
    }

    #[test]
    fn page_contains_sections_and_export_control() {
        let html = render_page(content::resume());
        for marker in [
            "<h2>Summary</h2>",
            "<h2>Experience</h2>",
            "<h2>Projects / Featured Work</h2>",
            "<h2>Skills</h2>",
            "class=\"export-bar\"",
            "Download PDF",
        ] {
            assert!(html.contains(marker), "missing {marker}");
        }
    }

    #[test]
    fn first_job_renders_five_bullets() {
        let html = render_page(content::resume());
        let start = html.find("Founder / Technical Lead").expect("job heading present");
        let end = html[start..].find("</div>").map(|i| start + i).unwrap();
        let entry = &html[start..end];
        assert_eq!(entry.matches("<li>").count(), 5);
    }

    #[test]
    fn text_is_escaped() {
        let html = render_page(content::resume());
        assert!(html.contains("Infrastructure &amp; Cloud Automation"));
        assert!(!html.contains("& Cloud Automation"));
    }
}
