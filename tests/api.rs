mod mocks;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mocks::{captions::MockCaptions, summarizer::MockSummarizer};
use serde_json::{json, Value};
use std::sync::Arc;
use tldw::config::ServerSettings;
use tldw::pipeline::Pipeline;
use tldw::server::router;
use tower::util::ServiceExt;

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn app(captions: MockCaptions, summarizer: MockSummarizer) -> Router {
    let pipeline = Pipeline::with_components(Arc::new(captions), Arc::new(summarizer), "en");
    router(pipeline, &ServerSettings::default())
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ─── Happy path ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_summarize_returns_transcript_and_summary() {
    let captions = MockCaptions::new(&[
        "welcome back everyone",
        "today we talk about R&amp;D.",
        "it&#39;s fun!",
        "really?",
        "yes.",
        "the end",
    ]);
    let summarizer = MockSummarizer::new("A short video about research.");
    let caption_calls = captions.calls.clone();
    let summarizer_calls = summarizer.calls.clone();

    let (status, body) = send(
        app(captions, summarizer),
        post_json("/api/summarize", json!({ "url": VIDEO_URL }).to_string()),
    )
    .await;

    let transcript = "Welcome back everyone today we talk about R&D. It's fun! Really? Yes.\n\nThe end.";

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "videoId": "dQw4w9WgXcQ",
            "videoTitle": "Mock Video",
            "summary": "A short video about research.",
            "transcript": transcript,
        })
    );
    assert_eq!(*caption_calls.lock().unwrap(), vec!["dQw4w9WgXcQ"]);
    assert_eq!(*summarizer_calls.lock().unwrap(), vec![transcript]);
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/summarize")
        .body(Body::from(json!({ "url": "dQw4w9WgXcQ" }).to_string()))
        .unwrap();

    let (status, body) = send(
        app(MockCaptions::new(&["hi"]), MockSummarizer::new("ok")),
        request,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transcript"], "Hi.");
}

// ─── Request validation ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_api_key() {
    let (status, body) = send(
        app(MockCaptions::new(&["hi"]), MockSummarizer::unconfigured()),
        post_json("/api/summarize", json!({ "url": VIDEO_URL }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server configuration error: Missing API key");
}

#[tokio::test]
async fn test_invalid_json() {
    let (status, body) = send(
        app(MockCaptions::new(&["hi"]), MockSummarizer::new("ok")),
        post_json("/api/summarize", "{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request: Could not parse JSON");
}

#[tokio::test]
async fn test_missing_url() {
    for payload in [json!({}), json!({ "url": "" }), json!({ "url": null })] {
        let (status, body) = send(
            app(MockCaptions::new(&["hi"]), MockSummarizer::new("ok")),
            post_json("/api/summarize", payload.to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["error"], "Missing URL parameter");
    }
}

#[tokio::test]
async fn test_blank_url_is_not_missing() {
    let (status, body) = send(
        app(MockCaptions::new(&["hi"]), MockSummarizer::new("ok")),
        post_json("/api/summarize", json!({ "url": "   " }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid YouTube URL");
}

#[tokio::test]
async fn test_invalid_youtube_url() {
    let captions = MockCaptions::new(&["hi"]);
    let calls = captions.calls.clone();

    let (status, body) = send(
        app(captions, MockSummarizer::new("ok")),
        post_json(
            "/api/summarize",
            json!({ "url": "https://vimeo.com/12345" }).to_string(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid YouTube URL");
    assert!(calls.lock().unwrap().is_empty());
}

// ─── Upstream failures ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_no_captions() {
    let summarizer = MockSummarizer::new("unused");
    let summarizer_calls = summarizer.calls.clone();

    let (status, body) = send(
        app(MockCaptions::new(&[]), summarizer),
        post_json("/api/summarize", json!({ "url": VIDEO_URL }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Could not fetch transcript for this video");
    assert!(summarizer_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_caption_fetch_failure() {
    let (status, body) = send(
        app(
            MockCaptions::failing("Video dQw4w9WgXcQ is unavailable"),
            MockSummarizer::new("unused"),
        ),
        post_json("/api/summarize", json!({ "url": VIDEO_URL }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Could not fetch transcript: Video dQw4w9WgXcQ is unavailable"
    );
}

#[tokio::test]
async fn test_summarizer_failure() {
    let (status, body) = send(
        app(
            MockCaptions::new(&["hello."]),
            MockSummarizer::failing("Failed to generate summary: rate limited"),
        ),
        post_json("/api/summarize", json!({ "url": VIDEO_URL }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Server error: Failed to generate summary: rate limited"
    );
}

// ─── Status, catch-all, and CORS ─────────────────────────────────────────────

#[tokio::test]
async fn test_status_endpoints() {
    for uri in ["/api/summarize", "/api/anything/else"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(
            app(MockCaptions::new(&[]), MockSummarizer::new("")),
            request,
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ "status": "API is running" }));
    }

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(MockCaptions::new(&[]), MockSummarizer::new("")), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_catch_all_post() {
    let (status, body) = send(
        app(MockCaptions::new(&[]), MockSummarizer::new("")),
        post_json("/api/other", "{}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "This is a catch-all route. Please use a specific API endpoint."
    );
}

#[tokio::test]
async fn test_method_not_allowed() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/summarize")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(MockCaptions::new(&[]), MockSummarizer::new("")), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_plain_options_is_no_content() {
    for uri in ["/api/summarize", "/api/anything/else"] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let (status, body) =
            send(app(MockCaptions::new(&[]), MockSummarizer::new("")), request).await;

        assert_eq!(status, StatusCode::NO_CONTENT, "{uri}");
        assert_eq!(body, Value::Null);
    }
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/summarize")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app(MockCaptions::new(&[]), MockSummarizer::new(""))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(), "86400");
    assert!(headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .contains("POST"));
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let settings = ServerSettings {
        allowed_origins: vec!["https://tldw.example".to_string()],
        ..ServerSettings::default()
    };
    let pipeline = Pipeline::with_components(
        Arc::new(MockCaptions::new(&[])),
        Arc::new(MockSummarizer::new("")),
        "en",
    );
    let app = router(pipeline, &settings);

    let request = Request::builder()
        .uri("/api/summarize")
        .header(header::ORIGIN, "https://tldw.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://tldw.example"
    );

    let request = Request::builder()
        .uri("/api/summarize")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
