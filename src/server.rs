//! Axum HTTP server: persist experiment session payloads.
//!
//! Every request is independent. The only shared state is the read-only
//! [`SaverConfig`], held as `Arc<SaverConfig>` across handlers. Request bodies
//! are not size-limited: axum's default body limit is disabled.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/save-json` | Write the JSON body to `session-<uuid>.json` |

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::{SAVE_SUCCESS_MESSAGE, SESSION_DIR};
use crate::error::SaveError;
use crate::storage::write_session;

/// Where session files go. Built once in `main` and handed to the router.
#[derive(Debug, Clone)]
pub struct SaverConfig {
    pub session_dir: PathBuf,
}

impl Default for SaverConfig {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from(SESSION_DIR),
        }
    }
}

pub type AppState = Arc<SaverConfig>;

pub fn create_router(config: SaverConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/save-json", post(handle_save_json))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .with_state(Arc::new(config))
}

// ── Response types ──────────────────────────────────────────────────

#[derive(Serialize)]
struct SaveResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, msg: String) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error: msg }))
}

/// True for `application/json` and `application/*+json`, ignoring parameters.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_save_json(
    State(config): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SaveResponse>, (StatusCode, Json<ErrorResponse>)> {
    match save_session(&config, &headers, &body).await {
        Ok(()) => Ok(Json(SaveResponse {
            message: SAVE_SUCCESS_MESSAGE,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "session save failed");
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

async fn save_session(
    config: &SaverConfig,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), SaveError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
    if !content_type.as_deref().is_some_and(is_json_content_type) {
        return Err(SaveError::UnsupportedContentType(content_type));
    }

    let payload: serde_json::Value = serde_json::from_slice(body).map_err(SaveError::Parse)?;
    let (session_id, path) = write_session(&config.session_dir, &payload).await?;
    tracing::info!(%session_id, path = %path.display(), "session saved");
    Ok(())
}
