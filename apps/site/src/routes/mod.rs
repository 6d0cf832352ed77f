pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/index.html", get(page::handle_page))
        .route("/health", get(health::health_handler))
        // Download links
        .route("/parsed_resume.json", get(page::handle_raw_resume))
        .route("/json_resume.json", get(page::handle_json_resume))
        .route("/assets/interactions.js", get(page::handle_interactions_js))
        // Theme
        .route(
            "/api/v1/theme",
            get(page::handle_get_theme).put(page::handle_set_theme),
        )
        .with_state(state)
}
