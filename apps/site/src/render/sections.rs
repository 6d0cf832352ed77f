//! Per-region HTML fragments.
//!
//! Each region is rendered independently from the normalized document. A
//! section with no source key produces no update, so the static markup for
//! that region stays as authored.

use crate::interactions::expand::{ExpandControl, VISIBLE_BULLETS};
use crate::models::resume::{Contact, EducationEntry, ExperienceEntry, ResumeDocument, Skills};
use crate::render::escape::{escape, escape_opt};

pub const YEAR: &str = "year";
pub const ABOUT_SUMMARY: &str = "about-summary";
pub const ABOUT_PROFILE: &str = "about-profile";
pub const EXPERIENCE_LIST: &str = "experience-list";
pub const EDUCATION_LIST: &str = "education-list";
pub const SKILLS_LIST: &str = "skills-list";
pub const PROJECTS_LIST: &str = "projects-list";
pub const CONTACT_EMAIL: &str = "contact-email";
pub const CONTACT_LINKEDIN: &str = "contact-linkedin";
pub const CONTACT_GITHUB: &str = "contact-github";
pub const DOWNLOAD_LINKS: &str = "download-links";

const PLACEHOLDER: &str = r#"<p class="muted">Nothing listed yet.</p>"#;

/// New inner HTML for the element with the given id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUpdate {
    pub id: &'static str,
    pub html: String,
}

impl RegionUpdate {
    fn new(id: &'static str, html: impl Into<String>) -> Self {
        Self {
            id,
            html: html.into(),
        }
    }
}

/// Renders every region the document has data for.
pub fn render(doc: &ResumeDocument) -> Vec<RegionUpdate> {
    let mut updates = Vec::new();

    if let Some(about) = &doc.about {
        updates.extend(about_regions(about));
    }
    if let Some(experience) = &doc.experience {
        updates.push(RegionUpdate::new(
            EXPERIENCE_LIST,
            list_or_placeholder(experience, experience_item),
        ));
    }
    if let Some(education) = &doc.education {
        updates.push(RegionUpdate::new(
            EDUCATION_LIST,
            list_or_placeholder(education, education_item),
        ));
    }
    if let Some(skills) = &doc.skills {
        updates.push(RegionUpdate::new(SKILLS_LIST, skills_html(skills)));
    }
    if let Some(certifications) = &doc.certifications {
        updates.push(RegionUpdate::new(PROJECTS_LIST, certifications_html(certifications)));
    }
    if let Some(contact) = &doc.contact {
        updates.extend(contact_regions(contact));
    }

    updates
}

/// First item is the summary; the rest are joined into the profile paragraph.
fn about_regions(about: &[String]) -> Vec<RegionUpdate> {
    let summary = about.first().map(String::as_str).unwrap_or_default();
    let profile = about.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();

    vec![
        RegionUpdate::new(ABOUT_SUMMARY, paragraph(summary)),
        RegionUpdate::new(ABOUT_PROFILE, paragraph(&profile)),
    ]
}

fn paragraph(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", escape(text))
    }
}

fn list_or_placeholder<T>(items: &[T], render_item: fn(&T) -> String) -> String {
    if items.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        items.iter().map(render_item).collect()
    }
}

/// One experience entry. Bullets past the sixth are moved behind a
/// "Show more" control.
pub fn experience_item(exp: &ExperienceEntry) -> String {
    let bullets: Vec<&str> = exp
        .bullets
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();

    let mut meta = format!("{} – {}", escape(&exp.start), escape(&exp.end));
    let place = [exp.company.as_str(), exp.location.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    if !place.is_empty() {
        meta.push_str(" | ");
        meta.push_str(&escape(&place));
    }

    let mut html = format!(
        r#"<div class="item"><h3>{}</h3><div class="meta">{meta}</div>"#,
        escape(&exp.title)
    );

    if !bullets.is_empty() {
        let (shown, hidden) = bullets.split_at(bullets.len().min(VISIBLE_BULLETS));
        html.push_str(&format!(r#"<ul class="bullets">{}</ul>"#, list_items(shown)));

        if !hidden.is_empty() {
            let control = ExpandControl::closed(hidden.len());
            html.push_str(&format!(
                r#"<button class="more-btn" {}>{}</button><ul class="{}">{}</ul>"#,
                control.data_attrs(),
                control.label(),
                if control.list_hidden() { "bullets hidden" } else { "bullets" },
                list_items(hidden)
            ));
        }
    }

    html.push_str("</div>");
    html
}

fn list_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

fn education_item(entry: &EducationEntry) -> String {
    match entry {
        EducationEntry::Plain(text) => format!(r#"<div class="item"><p>{}</p></div>"#, escape(text)),
        EducationEntry::Structured(record) => {
            let mut html = format!(r#"<div class="item"><h3>{}</h3>"#, escape(&record.degree));
            if !record.institution.is_empty() {
                html.push_str(&format!(
                    r#"<div class="meta">{}</div>"#,
                    escape(&record.institution)
                ));
            }
            if !record.details.is_empty() {
                html.push_str(&format!("<p>{}</p>", escape(&record.details)));
            }
            html.push_str("</div>");
            html
        }
    }
}

fn skills_html(skills: &Skills) -> String {
    match skills {
        Skills::Grouped(groups) if groups.is_empty() => PLACEHOLDER.to_string(),
        Skills::Grouped(groups) => groups
            .iter()
            .map(|group| {
                let items: Vec<&str> = group.items.iter().map(String::as_str).collect();
                format!(
                    r#"<div class="skill-group"><h3>{}</h3><ul>{}</ul></div>"#,
                    escape(&group.name),
                    list_items(&items)
                )
            })
            .collect(),
        Skills::Flat(items) if items.is_empty() => PLACEHOLDER.to_string(),
        Skills::Flat(items) => {
            let items: Vec<&str> = items.iter().map(String::as_str).collect();
            format!(r#"<ul class="skills">{}</ul>"#, list_items(&items))
        }
    }
}

fn certifications_html(certifications: &[String]) -> String {
    if certifications.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let items: Vec<&str> = certifications.iter().map(String::as_str).collect();
    format!(r#"<ul class="certs">{}</ul>"#, list_items(&items))
}

fn contact_regions(contact: &Contact) -> Vec<RegionUpdate> {
    let mut updates = Vec::new();

    let email = escape_opt(contact.email.as_deref());
    if !email.is_empty() {
        updates.push(RegionUpdate::new(
            CONTACT_EMAIL,
            format!(r#"<a href="mailto:{email}">{email}</a>"#),
        ));
    }
    if let Some(link) = external_link(contact.linkedin.as_deref(), "LinkedIn") {
        updates.push(RegionUpdate::new(CONTACT_LINKEDIN, link));
    }
    if let Some(link) = external_link(contact.github.as_deref(), "GitHub") {
        updates.push(RegionUpdate::new(CONTACT_GITHUB, link));
    }

    updates
}

fn external_link(href: Option<&str>, label: &str) -> Option<String> {
    let href = escape_opt(href);
    (!href.is_empty())
        .then(|| format!(r#"<a href="{href}" target="_blank" rel="noopener">{label}</a>"#))
}

/// Links to the raw parsed document and its JSON Resume sibling.
pub fn download_links(raw_path: &str, json_resume_path: &str) -> RegionUpdate {
    RegionUpdate::new(
        DOWNLOAD_LINKS,
        format!(
            r#"<a href="{}" download>Raw JSON</a> <a href="{}" download>JSON Resume</a>"#,
            escape(raw_path),
            escape(json_resume_path)
        ),
    )
}

pub fn year(year: i32) -> RegionUpdate {
    RegionUpdate::new(YEAR, year.to_string())
}
