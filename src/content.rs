//! Page content
//!
//! The page ships with a built-in content set. A TOML file with the same
//! shape as [`Content`] can replace it; either way content is read once at
//! startup and never changes afterwards.
//!
//! ```toml
//! [profile]
//! name = "Ada Lovelace"
//! brand = "AL."
//! # ...
//!
//! [[nav]]
//! name = "About"
//! href = "#about"
//!
//! [[skills]]
//! name = "Rust"
//! glyph = "project-management"
//! ```

use std::fs;
use std::path::Path;

use log::debug;

pub use crate::core::models::Content;
use crate::core::error::SiteError;
use crate::core::models::{
    CertificationItem, ExperienceItem, Glyph, LanguageItem, NavLink, Profile, ProjectItem,
    SkillItem, SocialLink, SocialNetwork,
};

/// Load content from a TOML file
pub fn load_file(path: &Path) -> Result<Content, SiteError> {
    let text = fs::read_to_string(path).map_err(|source| SiteError::ContentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content: Content = toml::from_str(&text).map_err(|source| SiteError::ContentParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded content from {}: {} experience, {} skills, {} projects",
        path.display(),
        content.experience.len(),
        content.skills.len(),
        content.projects.len()
    );
    Ok(content)
}

/// Built-in content, or the file at `path` when given
pub fn load(path: Option<&Path>) -> Result<Content, SiteError> {
    path.map_or_else(|| Ok(builtin()), load_file)
}

/// The built-in content set
#[must_use]
pub fn builtin() -> Content {
    Content {
        profile: profile(),
        nav: nav_links(),
        experience: experience(),
        skills: skills(),
        certifications: certifications(),
        projects: projects(),
        languages: languages(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Sahil Chauhan".into(),
        brand: "SC.".into(),
        headline: "Full Stack Developer & Student Ambassador".into(),
        tagline: "Turning ideas into scalable web applications.".into(),
        about: "I’m a B.Tech CSE student at K.R. Mangalam University with a passion for \
                building scalable web applications and integrating AI into everyday life. \
                My current focus is on real-world project-based learning and agile product \
                development."
            .into(),
        location: "Gurgaon / Delhi NCR / Mumbai".into(),
        portrait_url: "https://th.bing.com/th/id/OIP.ddGV1BR2zluM8kg-6bosswHaHa?w=168&h=180&c=7&r=0&o=7&dpr=1.1&pid=1.7&rm=3".into(),
        email: "sahilchauhan70320@gmail.com".into(),
        contact_blurb: "I'm currently open to new opportunities and collaborations. \
                        Feel free to reach out!"
            .into(),
        social: vec![
            SocialLink {
                network: SocialNetwork::LinkedIn,
                url: "https://www.linkedin.com/in/sahil-chauhan-6863562b6".into(),
            },
            SocialLink {
                network: SocialNetwork::GitHub,
                url: "https://github.com/sahill973".into(),
            },
        ],
    }
}

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("About", "#about"),
        NavLink::new("Experience", "#experience"),
        NavLink::new("Skills", "#skills"),
        NavLink::new("Projects", "#projects"),
        NavLink::new("Contact", "#contact"),
    ]
}

fn experience() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem::new(
            "Allsoft Solutions & Services Pvt. Ltd., Noida",
            "Full Stack Development Intern",
            "June 2025 – August 2025 | Ongoing",
            [
                "Gaining hands-on experience in building and deploying full-stack web applications.",
                "Working in agile environment with exposure to front-end (React.js) and back-end \
                 (Node.js, Express.js, MongoDB) technologies.",
                "Collaborating with senior developers and mentors on debugging, optimization, and \
                 problem-solving.",
            ],
        ),
        ExperienceItem::new(
            "K.R. Mangalam University",
            "Student Ambassador",
            "May 2025 – Present",
            [
                "Represented the institution during events, webinars, and digital outreach.",
                "Promoted academic culture via peer engagement, student tours, and feedback-driven \
                 insights for admission and marketing teams.",
            ],
        ),
    ]
}

fn skills() -> Vec<SkillItem> {
    vec![
        SkillItem::new("HTML", Glyph::Html),
        SkillItem::new("CSS", Glyph::Css),
        SkillItem::new("JavaScript", Glyph::JavaScript),
        SkillItem::new("React.js", Glyph::React),
        SkillItem::new("Node.js", Glyph::Node),
        SkillItem::new("Express.js", Glyph::Express),
        SkillItem::new("MongoDB", Glyph::MongoDb),
        SkillItem::new("Project Management", Glyph::ProjectManagement),
    ]
}

fn certifications() -> Vec<CertificationItem> {
    vec![CertificationItem::new(
        "Project Management Ready",
        "Project Management Institute (PMI)",
        Glyph::Pmi,
    )]
}

fn projects() -> Vec<ProjectItem> {
    vec![
        ProjectItem::new(
            "Library Management System",
            "OCR-enabled book tracking system with user roles and smart recommendations.",
            ["React.js", "Node.js", "MongoDB"],
            "https://th.bing.com/th/id/OIP.WkfLR5ljBkJhuSM1TTnhIAHaFS?w=263&h=188&c=7&r=0&o=7&dpr=1.1&pid=1.7&rm=3",
        ),
        ProjectItem::new(
            "Weather App",
            "A real-time weather app using public APIs with location-based data display.",
            ["React.js", "OpenWeather API"],
            "https://th.bing.com/th/id/OIP.yDBqiO_eZ5gBKhzEQ8hV3gHaHa?w=172&h=180&c=7&r=0&o=7&dpr=1.1&pid=1.7&rm=3",
        ),
        ProjectItem::new(
            "YouTube Video Automation Tool",
            "Automates video uploads and schedules using Puppeteer + Node.js.",
            ["Puppeteer", "Node.js"],
            "https://th.bing.com/th/id/OIP.X2OIcLJFMAqhfROH7UgOgwHaEK?w=314&h=180&c=7&r=0&o=7&dpr=1.1&pid=1.7&rm=3",
        ),
    ]
}

fn languages() -> Vec<LanguageItem> {
    vec![
        LanguageItem::new("English", "🇬🇧", "Fluent"),
        LanguageItem::new("Hindi", "🇮🇳", "Native"),
    ]
}
