//! Static résumé content
//!
//! The résumé is process-wide immutable data: one [`Resume`] aggregate built
//! on first access and shared for the lifetime of the process. Rendering
//! reads it, nothing mutates it.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Contact fields shown in the page header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub location: String,
    /// Full website URL; displayed with the scheme stripped
    pub website: String,
    pub email: String,
    /// Full code-hosting profile URL; displayed with the base prefix stripped
    pub github: String,
}

/// Identity block at the top of the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    /// Photo reference: an `http(s)` URL or a `data:` URI
    pub photo: String,
    pub contact: Contact,
}

/// A (category, skills) pair under "Core Competencies"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competency {
    pub category: String,
    pub skills: String,
}

/// One experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    /// Date/detail string; empty means the heading shows the bare title
    pub details: String,
    pub points: Vec<String>,
}

/// A project line: plain text, or text with one embedded hyperlink
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectEntry {
    Text(String),
    Linked {
        before: String,
        link_text: String,
        href: String,
        after: String,
    },
}

/// The whole résumé aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub profile: Profile,
    pub summary: String,
    pub competencies: Vec<Competency>,
    pub experience: Vec<Job>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
}

/// The résumé constant. Built once, never mutated.
pub fn resume() -> &'static Resume {
    static RESUME: OnceLock<Resume> = OnceLock::new();
    RESUME.get_or_init(build_resume)
}

fn build_resume() -> Resume {
    Resume {
        profile: Profile {
            name: "Kim Javier".into(),
            title: "Technical Leader | Project Manager | DevOps & Full-Stack Developer".into(),
            photo: "https://media.licdn.com/dms/image/v2/C5603AQFGp_E9-asKBA/profile-displayphoto-shrink_800_800/0/1610005980560".into(),
            contact: Contact {
                location: "Camarines Sur, Philippines".into(),
                website: "https://sargo.ph".into(),
                email: "dominjav43@gmail.com".into(),
                github: "https://github.com/dominjav43".into(),
            },
        },
        summary: "Hands-on technical leader and project manager with expertise in \
                  full-stack development, DevOps, cloud infrastructure, network \
                  automation, and enterprise security. I build and lead engineering \
                  teams to deliver robust, automated, and secure systems for \
                  industries including EV platforms and intercloud services. Skilled \
                  in bridging software development, infrastructure, and network \
                  operations, with a focus on scalable, high-performance, and \
                  maintainable applications."
            .into(),
        competencies: vec![
            Competency {
                category: "Infrastructure & Cloud Automation".into(),
                skills: "AWS, OVH, Terraform, Docker/Kubernetes, IAM, SOPS, HashiCorp Vault".into(),
            },
            Competency {
                category: "Full-Stack & Microservices".into(),
                skills: "NestJS, React, Node.js, PostgreSQL, Microfrontend architectures".into(),
            },
            Competency {
                category: "Network Automation & Connectivity".into(),
                skills: "Cisco NSO, NetBox, Megaport, Equinix".into(),
            },
            Competency {
                category: "Enterprise Security".into(),
                skills: "OIDC/OAuth2, Keycloak, SSO, IAM, Vault, SOPS".into(),
            },
            Competency {
                category: "Testing & Reliability".into(),
                skills: "Stress/load testing, integration testing, Pact, WireMock".into(),
            },
            Competency {
                category: "CI/CD & DevOps".into(),
                skills: "GitHub Actions, GitLab pipelines, production deployments".into(),
            },
            Competency {
                category: "UI/UX & Documentation".into(),
                skills: "Figma, developer-friendly specifications".into(),
            },
        ],
        experience: vec![
            Job {
                title: "Founder / Technical Lead – Tournament Bracket App".into(),
                details: "2024–Present".into(),
                points: vec![
                    "Designed and launched a fully automated tournament bracket platform with dynamic scheduling and player management.".into(),
                    "Built a microservices backend (NestJS + PostgreSQL) and a modern React frontend.".into(),
                    "Implemented CI/CD pipelines via GitHub Actions, reducing deployment time from hours to minutes.".into(),
                    "Integrated user login with Google authentication for secure access.".into(),
                    "Delivered a reliable platform supporting continuous tournaments and high concurrency.".into(),
                ],
            },
            Job {
                title: "EV Industry – Infrastructure & Systems Architect".into(),
                details: String::new(),
                points: vec![
                    "Architected scalable EV backend platforms on AWS and OVH, handling thousands of concurrent connections.".into(),
                    "Automated provisioning, scaling, and identity/access management across multiple cloud environments.".into(),
                    "Implemented stress/load testing to validate performance and reliability.".into(),
                    "Managed secrets and secure configuration using SOPS and Keycloak.".into(),
                ],
            },
            Job {
                title: "Legacy System Modernization & Intercloud Migration".into(),
                details: String::new(),
                points: vec![
                    "Migrated legacy React apps to the latest versions, improving maintainability and developer velocity.".into(),
                    "Transformed monolithic frontends into microfrontend architecture, enabling independent feature deployment.".into(),
                    "Implemented intercloud infrastructure with Terraform for seamless multi-cloud operations.".into(),
                    "Built integration contract testing systems using Pact, reducing integration failures by 70%.".into(),
                    "Integrated enterprise authentication and authorization using OIDC, OAuth2, Cognito, SSO, and Keycloak.".into(),
                ],
            },
            Job {
                title: "Network Services Automation – Cisco NSO & Vendor Integration".into(),
                details: String::new(),
                points: vec![
                    "Designed backend automation systems using Cisco NSO, integrating Megaport virtual connectivity and Equinix data centers.".into(),
                    "Maintained network inventory and orchestration with NetBox.".into(),
                    "Ensured secure vendor API authentication and automated workflows.".into(),
                ],
            },
        ],
        projects: vec![
            ProjectEntry::Linked {
                before: "Tournament Bracket Platform – Live at ".into(),
                link_text: "sargo.ph".into(),
                href: "https://sargo.ph".into(),
                after: " (Google login)".into(),
            },
            ProjectEntry::Text(
                "EV Backend Platforms – Scalable, stress-tested systems on AWS and OVH".into(),
            ),
            ProjectEntry::Text(
                "Legacy React Migration & Microfrontend Implementation".into(),
            ),
            ProjectEntry::Text(
                "Network Automation Backend – Cisco NSO integration with Megaport & Equinix".into(),
            ),
        ],
        skills: vec![
            "Project Management / Agile / Scrum".into(),
            "Full-Stack Development: NestJS, React, Node.js, TypeScript, TypeORM, PostgreSQL".into(),
            "Cloud & Infrastructure: AWS, OVH, Terraform, Kubernetes, Docker, IAM".into(),
            "Network Automation: Cisco NSO, NetBox, Megaport, Equinix".into(),
            "Security & Identity: Cognito, OIDC, OAuth2, SSO, Keycloak, SOPS, HashiCorp Vault".into(),
            "Testing & Reliability: Simulators, Pact, WireMock, Stress/Load Testing".into(),
            "CI/CD: GitHub Actions, GitLab, Production Pipelines".into(),
            "UI/UX & Documentation: Figma, Developer-Friendly Specifications".into(),
        ],
    }
}
