/// The résumé after the decode step. Every section is optional: `None` means
/// the source document carried no key for it, which renderers treat as
/// "leave the region alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeDocument {
    pub about: Option<Vec<String>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Skills>,
    pub certifications: Option<Vec<String>>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub title: String,
    pub start: String,
    pub end: String,
    pub company: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationRecord {
    pub degree: String,
    pub institution: String,
    pub details: String,
}

/// Legacy `EDUCATION` arrays hold plain paragraphs; the structured variant
/// comes from `EDUCATION_STRUCTURED`. Both may appear in either key.
#[derive(Debug, Clone, PartialEq)]
pub enum EducationEntry {
    Plain(String),
    Structured(EducationRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Skills {
    /// Groups in document order.
    Grouped(Vec<SkillGroup>),
    Flat(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub phone: Option<String>,
}

