mod config;
mod controller;
mod errors;
mod interactions;
mod models;
mod render;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::controller::{DownloadPaths, PageController, EMBEDDED_TEMPLATE};
use crate::interactions::theme::Theme;
use crate::routes::build_router;
use crate::routes::page::INTERACTIONS_JS;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    let template = match &config.page_template {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read page template {}", path.display()))?,
        None => EMBEDDED_TEMPLATE.to_string(),
    };

    // Load the résumé once; a failure leaves the page in its static state.
    let mut controller = PageController::new(template, DownloadPaths::default())
        .with_owner_name(config.owner_name.clone());
    let source = resume::source::from_location(&config.resume_source)
        .context("Failed to build resume source")?;
    controller.load(source.as_ref()).await;

    if let Some(out) = &config.render_to {
        return render_static(&controller, out).await;
    }

    let state = AppState {
        controller: Arc::new(controller),
        json_resume_path: config.json_resume_path.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Writes the rendered page and its script for static hosting. The page is
/// rendered dark; the script applies a visitor's stored choice on load.
async fn render_static(controller: &PageController, out: &Path) -> Result<()> {
    let page = controller.page(Theme::Dark);
    tokio::fs::write(out, page)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;

    let assets = out.parent().unwrap_or(Path::new(".")).join("assets");
    tokio::fs::create_dir_all(&assets).await?;
    tokio::fs::write(assets.join("interactions.js"), INTERACTIONS_JS).await?;

    info!("Rendered static page to {}", out.display());
    Ok(())
}
