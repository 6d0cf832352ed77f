//! Decode step: raw parser output → `ResumeDocument`.
//!
//! Runs once per load. Renderers only ever see the normalized shape, so all
//! alternate-key and text-or-array handling lives here.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::resume::{
    Contact, EducationEntry, EducationRecord, ExperienceEntry, ResumeDocument, SkillGroup, Skills,
};
use crate::resume::lookup::{first_present, ABOUT_KEYS, EDUCATION_KEYS, FLAT_SKILL_KEYS};

pub fn normalize(raw: &Value) -> ResumeDocument {
    let Some(object) = raw.as_object() else {
        debug!("Resume document is not a JSON object; treating it as empty");
        return ResumeDocument::default();
    };

    ResumeDocument {
        about: first_present(raw, ABOUT_KEYS).and_then(|(key, v)| text_list(key, v)),
        experience: object
            .get("EXPERIENCE_STRUCTURED")
            .and_then(|v| items(v, "EXPERIENCE_STRUCTURED"))
            .map(|entries| entries.iter().filter_map(experience_entry).collect()),
        education: first_present(raw, EDUCATION_KEYS).map(|(key, v)| education(key, v)),
        skills: skills(raw),
        certifications: first_present(raw, &["CERTIFICATIONS_STRUCTURED"])
            .and_then(|(key, v)| text_list(key, v)),
        contact: object.get("CONTACT").and_then(contact),
    }
}

/// Text-or-array fields. Non-string array items are dropped.
fn text_list(key: &str, value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(s) => Some(vec![s.trim().to_string()]),
        Value::Array(values) => Some(
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        other => {
            debug!("Ignoring {key}: expected text or array, got {}", type_name(other));
            None
        }
    }
}

fn items<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    let array = value.as_array();
    if array.is_none() {
        debug!("Ignoring {key}: expected array, got {}", type_name(value));
    }
    array
}

fn experience_entry(value: &Value) -> Option<ExperienceEntry> {
    let Some(object) = value.as_object() else {
        debug!("Skipping experience entry of type {}", type_name(value));
        return None;
    };

    Some(ExperienceEntry {
        title: str_field(object, "title"),
        start: str_field(object, "start"),
        end: str_field(object, "end"),
        company: str_field(object, "company"),
        location: str_field(object, "location"),
        bullets: object
            .get("bullets")
            .and_then(|b| text_list("bullets", b))
            .unwrap_or_default(),
    })
}

fn education(key: &str, value: &Value) -> Vec<EducationEntry> {
    let entries = match value {
        Value::Array(values) => values.as_slice(),
        Value::String(s) => return vec![EducationEntry::Plain(s.trim().to_string())],
        other => {
            debug!("Ignoring {key}: expected array, got {}", type_name(other));
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => {
                Some(EducationEntry::Plain(s.trim().to_string()))
            }
            Value::Object(object) => Some(EducationEntry::Structured(EducationRecord {
                degree: str_field(object, "degree"),
                institution: str_field(object, "institution"),
                details: str_field(object, "details"),
            })),
            _ => None,
        })
        .collect()
}

fn skills(raw: &Value) -> Option<Skills> {
    if let Some(Value::Object(groups)) = raw.get("SKILLS_GROUPED") {
        let groups = groups
            .iter()
            .map(|(name, items)| SkillGroup {
                name: name.clone(),
                items: text_list(name, items).unwrap_or_default(),
            })
            .collect();
        return Some(Skills::Grouped(groups));
    }

    first_present(raw, FLAT_SKILL_KEYS)
        .and_then(|(key, v)| text_list(key, v))
        .map(Skills::Flat)
}

fn contact(value: &Value) -> Option<Contact> {
    let Some(object) = value.as_object() else {
        debug!("Ignoring CONTACT of type {}", type_name(value));
        return None;
    };

    let field = |key: &str| Some(str_field(object, key)).filter(|s| !s.is_empty());
    Some(Contact {
        email: field("email"),
        linkedin: field("linkedin"),
        github: field("github"),
        phone: field("phone"),
    })
}

/// Missing or non-string fields read as empty.
fn str_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
