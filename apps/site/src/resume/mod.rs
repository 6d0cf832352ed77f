// Résumé ingestion: where the document comes from, and the one-time decode
// of its loosely shaped JSON into `ResumeDocument`.

pub mod json_resume;
pub mod lookup;
pub mod normalize;
pub mod skills;
pub mod source;

pub use normalize::normalize;
pub use source::ResumeSource;
