//! HTTP API for summarizing videos.
//!
//! `POST /api/summarize` with `{"url": "..."}` returns the formatted
//! transcript, video title, and summary. Every route answers CORS preflights.

use crate::config::ServerSettings;
use crate::error::TldwError;
use crate::pipeline::{Pipeline, VideoSummary};
use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Shared application state.
struct AppState {
    pipeline: Pipeline,
}

/// Build the API router.
pub fn router(pipeline: Pipeline, settings: &ServerSettings) -> Router {
    let state = Arc::new(AppState { pipeline });

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/summarize",
            get(api_status)
                .post(summarize)
                .fallback(method_not_allowed),
        )
        .route("/api/{*path}", get(api_status).post(catch_all))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(middleware::from_fn(options_no_content))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(PREFLIGHT_MAX_AGE)
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct SummarizeRequest {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Serialize)]
struct SummarizeResponse {
    success: bool,
    #[serde(flatten)]
    summary: VideoSummary,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Map a pipeline failure to its HTTP status and message.
fn pipeline_error(err: TldwError) -> Response {
    match err {
        TldwError::InvalidInput(msg) => error_response(StatusCode::BAD_REQUEST, msg),
        TldwError::CaptionsNotFound(_) => error_response(
            StatusCode::NOT_FOUND,
            "Could not fetch transcript for this video",
        ),
        TldwError::Captions(msg) => error_response(
            StatusCode::NOT_FOUND,
            format!("Could not fetch transcript: {}", msg),
        ),
        other => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Server error: {}", other),
        ),
    }
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn api_status() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "API is running" }))
}

/// Answer every OPTIONS request with 204. The CORS layer replies to them
/// before routing, with its headers and a 200 status.
async fn options_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status().is_success() {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn catch_all() -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        "This is a catch-all route. Please use a specific API endpoint.",
    )
}

async fn summarize(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    if !state.pipeline.is_configured() {
        error!("Missing OpenAI API key");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: Missing API key",
        );
    }

    let request: SummarizeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Error parsing request JSON: {}", e);
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid request: Could not parse JSON",
            );
        }
    };

    let Some(url) = request.url.filter(|url| !url.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing URL parameter");
    };

    match state.pipeline.summarize(&url).await {
        Ok(summary) => Json(SummarizeResponse {
            success: true,
            summary,
        })
        .into_response(),
        Err(e) => {
            error!("Failed to summarize {}: {}", url, e);
            pipeline_error(e)
        }
    }
}
