//! The page controller owns the loaded résumé for the lifetime of the process
//! and turns it into the served page.

use chrono::{Datelike, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::interactions::theme::Theme;
use crate::models::resume::ResumeDocument;
use crate::render::sections::{download_links, year};
use crate::render::{inject, render, set_root_class};
use crate::resume::json_resume::to_json_resume;
use crate::resume::{normalize, ResumeSource};

pub const EMBEDDED_TEMPLATE: &str = include_str!("../assets/index.html");

/// Public paths of the two downloadable resources.
#[derive(Debug, Clone)]
pub struct DownloadPaths {
    pub raw: String,
    pub json_resume: String,
}

impl Default for DownloadPaths {
    fn default() -> Self {
        Self {
            raw: "parsed_resume.json".to_string(),
            json_resume: "json_resume.json".to_string(),
        }
    }
}

/// A successfully fetched document: the raw JSON (served for download as-is)
/// and its normalized form (what renderers consume).
#[derive(Debug, Clone)]
pub struct LoadedResume {
    pub raw: Value,
    pub document: ResumeDocument,
}

pub struct PageController {
    template: String,
    downloads: DownloadPaths,
    owner_name: String,
    loaded: Option<LoadedResume>,
}

impl PageController {
    pub fn new(template: impl Into<String>, downloads: DownloadPaths) -> Self {
        Self {
            template: template.into(),
            downloads,
            owner_name: String::new(),
            loaded: None,
        }
    }

    pub fn with_owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = name.into();
        self
    }

    /// Fetches the document once. Failures are logged and swallowed: the page
    /// keeps serving its static markup. Returns whether a document is held.
    pub async fn load(&mut self, source: &dyn ResumeSource) -> bool {
        match source.fetch().await {
            Ok(raw) => {
                let document = normalize(&raw);
                info!("Loaded resume from {}", source.describe());
                self.loaded = Some(LoadedResume { raw, document });
                true
            }
            Err(e) => {
                warn!("Resume load issue ({}): {e}", source.describe());
                false
            }
        }
    }

    pub fn loaded(&self) -> Option<&LoadedResume> {
        self.loaded.as_ref()
    }

    /// The full page for the given theme. The year is stamped even when no
    /// document was loaded.
    pub fn page(&self, theme: Theme) -> String {
        let mut updates = vec![year(Utc::now().year())];
        if let Some(loaded) = &self.loaded {
            updates.extend(render(&loaded.document));
            updates.push(download_links(&self.downloads.raw, &self.downloads.json_resume));
        }

        let page = inject(&self.template, &updates);
        match theme.root_class() {
            Some(class) => set_root_class(&page, class),
            None => page,
        }
    }

    /// The loaded document in JSON Resume shape.
    pub fn json_resume(&self) -> Option<Value> {
        self.loaded
            .as_ref()
            .map(|loaded| to_json_resume(&loaded.document, &self.owner_name))
    }
}
