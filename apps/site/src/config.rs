use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL or file path of the parsed résumé.
    pub resume_source: String,
    /// File holding a pre-built JSON Resume export, if one was generated.
    pub json_resume_path: PathBuf,
    /// Page markup overriding the embedded template.
    pub page_template: Option<PathBuf>,
    pub owner_name: String,
    /// When set, render the page to this file once and exit.
    pub render_to: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let resume_source = optional_env("RESUME_SOURCE")
            .unwrap_or_else(|| "parsed_resume.json".to_string());
        let json_resume_path = optional_env("JSON_RESUME_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| sibling_json_resume(&resume_source));

        Ok(Config {
            resume_source,
            json_resume_path,
            page_template: optional_env("PAGE_TEMPLATE").map(PathBuf::from),
            owner_name: optional_env("SITE_OWNER").unwrap_or_default(),
            render_to: optional_env("FOLIO_RENDER_TO").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// `json_resume.json` next to a file source. URL sources have no local
/// sibling, so the export is looked up in the working directory.
fn sibling_json_resume(resume_source: &str) -> PathBuf {
    if resume_source.contains("://") {
        return PathBuf::from("json_resume.json");
    }
    Path::new(resume_source)
        .parent()
        .map(|dir| dir.join("json_resume.json"))
        .unwrap_or_else(|| PathBuf::from("json_resume.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_of_file_source() {
        assert_eq!(
            sibling_json_resume("site/parsed_resume.json"),
            PathBuf::from("site/json_resume.json")
        );
        assert_eq!(
            sibling_json_resume("parsed_resume.json"),
            PathBuf::from("json_resume.json")
        );
    }

    #[test]
    fn test_sibling_of_url_source() {
        assert_eq!(
            sibling_json_resume("https://example.com/r/parsed_resume.json"),
            PathBuf::from("json_resume.json")
        );
    }
}
