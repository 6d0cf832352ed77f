use std::path::PathBuf;
use std::sync::Arc;

use crate::controller::PageController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub controller: Arc<PageController>,
    /// Pre-built JSON Resume export, preferred over deriving one.
    pub json_resume_path: PathBuf,
}
