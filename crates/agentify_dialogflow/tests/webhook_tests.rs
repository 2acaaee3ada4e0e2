//! HTTP-level tests for the Dialogflow fulfillment webhook.
//!
//! These drive the real router in-process with `tower::ServiceExt::oneshot`
//! and prove the envelope contract: v1 bodies are fulfilled, v2 and unknown
//! bodies get their fixed 400 messages, and the GitHub-backed default
//! handler degrades to an apology instead of an error. The GitHub upstream
//! is a throwaway axum server bound to an ephemeral port.

use std::sync::Arc;

use agentify_config::{AppConfig, GithubConfig, ServerConfig};
use agentify_dialogflow::handlers::{INVALID_WEBHOOK_REQUEST_MSG, V2_NOT_SUPPORTED_MSG};
use agentify_dialogflow::logic::{GITHUB_APOLOGY_TEXT, WELCOME_TEXT};
use agentify_dialogflow::routes;
use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

// ── Test app builders ──────────────────────────────────────────

fn build_app(github_base_url: &str) -> Router {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        github: GithubConfig {
            base_url: github_base_url.to_string(),
            timeout_secs: 5,
            user_agent: None,
        },
    };
    routes(Arc::new(config))
}

/// Serves a fake GitHub API: `alice` has 42 followers, everyone else is 404.
async fn spawn_github_stub() -> String {
    let stub = Router::new().route(
        "/users/{username}",
        get(|Path(username): Path<String>| async move {
            if username == "alice" {
                Json(json!({ "login": "alice", "followers": 42 })).into_response()
            } else {
                StatusCode::NOT_FOUND.into_response()
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has a local addr");
    tokio::spawn(async move {
        axum::serve(listener, stub).await.expect("stub server died");
    });
    format!("http://{}", addr)
}

fn webhook_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/fulfillment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).expect("body is not JSON")
}

// ── Envelope validation ────────────────────────────────────────

#[tokio::test]
async fn body_without_any_marker_field_is_rejected() {
    let app = build_app("http://127.0.0.1:1");
    let response = app
        .oneshot(webhook_request(json!({ "status": { "code": 200 } })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, INVALID_WEBHOOK_REQUEST_MSG);
}

#[tokio::test]
async fn v2_body_is_rejected_with_its_own_message() {
    let app = build_app("http://127.0.0.1:1");
    let response = app
        .oneshot(webhook_request(
            json!({ "queryResult": { "action": "input.welcome" } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, V2_NOT_SUPPORTED_MSG);
}

#[tokio::test]
async fn unreadable_v1_result_takes_the_malformed_body_path() {
    let app = build_app("http://127.0.0.1:1");
    // `result` present but not an object.
    let response = app
        .oneshot(webhook_request(json!({ "result": "input.welcome" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, INVALID_WEBHOOK_REQUEST_MSG);
}

// ── Generic channel ────────────────────────────────────────────

#[tokio::test]
async fn welcome_intent_replies_with_the_greeting_on_both_fields() {
    // The welcome handler never leaves the process; the upstream URL is irrelevant.
    let app = build_app("http://127.0.0.1:1");
    let response = app
        .oneshot(webhook_request(json!({
            "result": { "action": "input.welcome", "parameters": {}, "contexts": [] }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "speech": WELCOME_TEXT, "displayText": WELCOME_TEXT })
    );
}

#[tokio::test]
async fn unknown_action_falls_through_to_the_github_handler() {
    let base_url = spawn_github_stub().await;
    let app = build_app(&base_url);

    let response = app
        .oneshot(webhook_request(json!({
            "result": {
                "action": "some.unmapped.action",
                "parameters": { "githubusername": "alice" }
            }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["speech"], "You have 42 followers on Git Hub");
    assert_eq!(body["displayText"], "You have 42 followers on Git Hub");
}

#[tokio::test]
async fn upstream_failure_becomes_an_apology_not_an_error() {
    let base_url = spawn_github_stub().await;
    let app = build_app(&base_url);

    let response = app
        .oneshot(webhook_request(json!({
            "result": {
                "parameters": { "githubusername": "nobody-by-that-name" }
            }
        })))
        .await
        .unwrap();

    // Still a successful webhook call; the failure is conversational.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["speech"], GITHUB_APOLOGY_TEXT);
    assert_eq!(body["displayText"], GITHUB_APOLOGY_TEXT);
}

#[tokio::test]
async fn unreachable_upstream_also_becomes_an_apology() {
    // Nothing listens here; the outbound call fails at connect.
    let app = build_app("http://127.0.0.1:1");

    let response = app
        .oneshot(webhook_request(json!({
            "result": { "parameters": { "githubusername": "alice" } }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["speech"], GITHUB_APOLOGY_TEXT);
}

// ── Assistant channel ──────────────────────────────────────────

#[tokio::test]
async fn google_source_welcome_closes_the_session_with_the_greeting() {
    let app = build_app("http://127.0.0.1:1");
    let response = app
        .oneshot(webhook_request(json!({
            "result": { "action": "input.welcome", "parameters": {} },
            "originalRequest": { "source": "google" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["speech"], WELCOME_TEXT);
    assert_eq!(body["data"]["google"]["expectUserResponse"], false);
}

#[tokio::test]
async fn google_source_github_reply_keeps_the_session_open() {
    let base_url = spawn_github_stub().await;
    let app = build_app(&base_url);

    let response = app
        .oneshot(webhook_request(json!({
            "result": { "parameters": { "githubusername": "alice" } },
            "originalRequest": { "source": "google" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["google"]["expectUserResponse"], true);
    assert_eq!(
        body["data"]["google"]["richResponse"]["items"][0]["simpleResponse"]["textToSpeech"],
        "You have 42 followers on Git Hub"
    );
}
