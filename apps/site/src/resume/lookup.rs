//! Ordered key lookup over the raw document.
//!
//! Older parser runs wrote the same section under different names, so each
//! section has a precedence list and the first present key wins.

use serde_json::Value;

pub const ABOUT_KEYS: &[&str] = &["SUMMARY", "PROFILE", "ABOUT", "UNCLASSIFIED"];
pub const EDUCATION_KEYS: &[&str] = &["EDUCATION_STRUCTURED", "EDUCATION"];
pub const FLAT_SKILL_KEYS: &[&str] = &["SKILLS_FLAT", "SKILLS", "TECHNICAL SKILLS"];

/// Returns the first key in `keys` whose value is present, along with it.
///
/// `null` and the empty string count as absent. Empty arrays and objects are
/// present: the section exists, it just has nothing in it.
pub fn first_present<'a>(raw: &'a Value, keys: &[&'static str]) -> Option<(&'static str, &'a Value)> {
    let object = raw.as_object()?;
    keys.iter().find_map(|key| {
        object
            .get(*key)
            .filter(|value| is_present(value))
            .map(|value| (*key, value))
    })
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}
