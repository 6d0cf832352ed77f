//! Export to the JSON Resume schema (https://jsonresume.org/schema).
//!
//! Served for the "JSON Resume" download link when no pre-built sibling file
//! exists next to the parsed document.

use serde_json::{json, Value};

use crate::models::resume::{EducationEntry, ResumeDocument, Skills};
use crate::resume::skills::group_skills;

const SUMMARY_MAX_CHARS: usize = 300;

pub fn to_json_resume(doc: &ResumeDocument, name: &str) -> Value {
    let contact = doc.contact.clone().unwrap_or_default();

    let work: Vec<Value> = doc
        .experience
        .iter()
        .flatten()
        .map(|exp| {
            let end_date = if exp.end.eq_ignore_ascii_case("current") || exp.end.is_empty() {
                Value::Null
            } else {
                Value::String(exp.end.clone())
            };
            let summary: String = exp
                .bullets
                .first()
                .map(|b| b.chars().take(SUMMARY_MAX_CHARS).collect())
                .unwrap_or_default();
            json!({
                "name": exp.company,
                "position": exp.title,
                "location": exp.location,
                "startDate": exp.start,
                "endDate": end_date,
                "summary": summary,
                "highlights": exp.bullets,
            })
        })
        .collect();

    let education: Vec<Value> = doc
        .education
        .iter()
        .flatten()
        .map(|entry| match entry {
            EducationEntry::Structured(record) => json!({
                "institution": record.institution,
                "studyType": record.degree,
                "area": "",
                "startDate": "",
                "endDate": "",
                "score": "",
                "courses": [],
            }),
            EducationEntry::Plain(text) => json!({
                "institution": "",
                "studyType": text,
                "area": "",
                "startDate": "",
                "endDate": "",
                "score": "",
                "courses": [],
            }),
        })
        .collect();

    let groups = match &doc.skills {
        Some(Skills::Grouped(groups)) => groups.clone(),
        Some(Skills::Flat(flat)) => group_skills(flat),
        None => Vec::new(),
    };
    let skills: Vec<Value> = groups
        .iter()
        .map(|g| json!({ "name": g.name, "keywords": g.items }))
        .collect();

    let certificates: Vec<Value> = doc
        .certifications
        .iter()
        .flatten()
        .map(|c| json!({ "name": c }))
        .collect();

    json!({
        "basics": {
            "name": name,
            "email": contact.email.unwrap_or_default(),
            "phone": contact.phone.unwrap_or_default(),
            "url": contact.linkedin.unwrap_or_default(),
        },
        "work": work,
        "education": education,
        "skills": skills,
        "certificates": certificates,
        "meta": { "generator": env!("CARGO_PKG_NAME") },
    })
}
