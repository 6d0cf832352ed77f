//! Axum route handlers for the rendered page and its resources.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::interactions::theme::Theme;
use crate::state::AppState;

pub const INTERACTIONS_JS: &str = include_str!("../../assets/interactions.js");

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// The requesting visitor's theme, from their `theme` cookie.
fn request_theme(headers: &HeaderMap) -> Theme {
    Theme::from_cookie_header(
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok()),
    )
}

/// GET /
///
/// The static page with every region the loaded résumé provides filled in,
/// rooted in the visitor's theme.
pub async fn handle_page(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    Html(state.controller.page(request_theme(&headers)))
}

/// GET /parsed_resume.json
pub async fn handle_raw_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state
        .controller
        .loaded()
        .map(|loaded| Json(loaded.raw.clone()))
        .ok_or_else(|| AppError::NotFound("No resume has been loaded".to_string()))
}

/// GET /json_resume.json
///
/// Serves the pre-built export when one sits next to the parsed document,
/// otherwise derives it from the loaded résumé.
pub async fn handle_json_resume(State(state): State<AppState>) -> Result<Response, AppError> {
    match tokio::fs::read_to_string(&state.json_resume_path).await {
        Ok(body) => {
            debug!("Serving JSON Resume from {}", state.json_resume_path.display());
            return Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("reading {}", state.json_resume_path.display()))
                .into())
        }
    }

    state
        .controller
        .json_resume()
        .map(|exported| Json(exported).into_response())
        .ok_or_else(|| AppError::NotFound("No resume has been loaded".to_string()))
}

/// GET /assets/interactions.js
pub async fn handle_interactions_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        INTERACTIONS_JS,
    )
}

/// GET /api/v1/theme
pub async fn handle_get_theme(headers: HeaderMap) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: request_theme(&headers),
    })
}

/// PUT /api/v1/theme
///
/// Stores the visitor's choice in their own cookie. Nothing is shared between
/// visitors, so concurrent requests cannot clobber each other.
pub async fn handle_set_theme(Json(body): Json<ThemeBody>) -> impl IntoResponse {
    info!("Theme set to {}", body.theme.as_str());
    (
        [(header::SET_COOKIE, body.theme.set_cookie())],
        Json(body),
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::controller::{DownloadPaths, PageController, EMBEDDED_TEMPLATE};
    use crate::resume::source::{LoadError, ResumeSource};
    use crate::routes::build_router;
    use crate::state::AppState;

    struct StaticSource(serde_json::Value);

    #[async_trait]
    impl ResumeSource for StaticSource {
        async fn fetch(&self) -> Result<serde_json::Value, LoadError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    async fn state(doc: Option<serde_json::Value>, json_resume_path: PathBuf) -> AppState {
        let mut controller = PageController::new(EMBEDDED_TEMPLATE, DownloadPaths::default());
        if let Some(doc) = doc {
            controller.load(&StaticSource(doc)).await;
        }
        AppState {
            controller: Arc::new(controller),
            json_resume_path,
        }
    }

    fn missing_path() -> PathBuf {
        PathBuf::from("/definitely/not/here/json_resume.json")
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_page_renders_loaded_resume() {
        let app = build_router(
            state(
                Some(json!({ "SKILLS_GROUPED": { "Languages": ["Go", "Rust"] } })),
                missing_path(),
            )
            .await,
        );

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<h3>Languages</h3><ul><li>Go</li><li>Rust</li></ul>"));
    }

    #[tokio::test]
    async fn test_raw_resume_404_when_not_loaded() {
        let app = build_router(state(None, missing_path()).await);
        let response = app.oneshot(get("/parsed_resume.json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_raw_resume_served_verbatim() {
        let doc = json!({ "SUMMARY": "Hi", "EXTRA": 1 });
        let app = build_router(state(Some(doc.clone()), missing_path()).await);
        let response = app.oneshot(get("/parsed_resume.json")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, doc);
    }

    #[tokio::test]
    async fn test_json_resume_prefers_prebuilt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("json_resume.json");
        std::fs::write(&path, r#"{"basics":{"name":"Prebuilt"}}"#).unwrap();

        let app = build_router(state(Some(json!({})), path).await);
        let response = app.oneshot(get("/json_resume.json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Prebuilt"));
    }

    #[tokio::test]
    async fn test_json_resume_derived_when_no_file() {
        let app = build_router(
            state(Some(json!({ "CERTIFICATIONS_STRUCTURED": ["CKA"] })), missing_path()).await,
        );
        let response = app.oneshot(get("/json_resume.json")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["certificates"][0]["name"], "CKA");
    }

    fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("cookie", cookie)
            .body(Body::empty())
            .unwrap()
    }

    fn put_theme(theme: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/api/v1/theme")
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"theme":"{theme}"}}"#)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_set_theme_returns_cookie() {
        let app = build_router(state(None, missing_path()).await);

        let response = app.clone().oneshot(put_theme("light")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[axum::http::header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("theme=light;"));
        assert_eq!(body_string(response).await, r#"{"theme":"light"}"#);

        let pair = cookie.split(';').next().unwrap();
        let response = app.oneshot(get_with_cookie("/api/v1/theme", pair)).await.unwrap();
        assert_eq!(body_string(response).await, r#"{"theme":"light"}"#);
    }

    #[tokio::test]
    async fn test_theme_is_per_visitor() {
        let app = build_router(state(None, missing_path()).await);

        // One visitor switches to light; another who never chose stays dark.
        let response = app.clone().oneshot(put_theme("light")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let first = body_string(
            app.clone()
                .oneshot(get_with_cookie("/", "theme=light"))
                .await
                .unwrap(),
        )
        .await;
        assert!(first.contains(r#"<html lang="en" class="light">"#));

        let second = body_string(app.oneshot(get("/")).await.unwrap()).await;
        assert!(second.contains(r#"<html lang="en">"#));
        assert!(!second.contains(r#"class="light""#));
    }

    #[tokio::test]
    async fn test_concurrent_theme_choices_do_not_interfere() {
        let app = build_router(state(None, missing_path()).await);

        let mut handles = Vec::new();
        for i in 0..64 {
            let app = app.clone();
            let theme = if i % 2 == 0 { "light" } else { "dark" };
            handles.push(tokio::spawn(async move {
                let response = app.oneshot(put_theme(theme)).await.unwrap();
                (theme, body_string(response).await)
            }));
        }

        for handle in handles {
            let (theme, body) = handle.await.unwrap();
            assert_eq!(body, format!(r#"{{"theme":"{theme}"}}"#));
        }
    }

    #[tokio::test]
    async fn test_set_theme_rejects_unknown_value() {
        let app = build_router(state(None, missing_path()).await);
        let response = app.oneshot(put_theme("purple")).await.unwrap();
        assert!(response.status().is_client_error());
        assert!(response.headers().get(axum::http::header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_interactions_script_served() {
        let app = build_router(state(None, missing_path()).await);
        let response = app.oneshot(get("/assets/interactions.js")).await.unwrap();
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/javascript"
        );
        let script = body_string(response).await;
        assert!(script.contains("more-btn"));
        assert!(script.contains("btn.dataset.labelOpen"));
        assert!(script.contains("localStorage.setItem(THEME_KEY"));
        assert!(script.contains("localStorage.getItem(THEME_KEY"));
    }

    #[tokio::test]
    async fn test_health_reports_load_state() {
        let app = build_router(state(None, missing_path()).await);
        let response = app.oneshot(get("/health")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["resume_loaded"], false);
    }
}
