//! Integration tests for the Ollama inference backend.
//!
//! Each test starts a small in-process axum server that answers `POST /api/chat` the way
//! Ollama does, and points an `OllamaBackend` at it.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use local_chat_api::core::errors::InferenceError;
use local_chat_api::core::messages::{ChatMessage, Role};
use local_chat_api::infrastructure::ollama::OllamaBackend;
use local_chat_api::infrastructure::traits::InferenceBackend;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

type Captured = Arc<Mutex<Vec<Value>>>;

/// Serves a fixed status and body, and records every request body it receives.
async fn spawn_fake_ollama(status: StatusCode, reply: Value) -> (String, Captured) {
    let captured: Captured = Arc::default();
    let recorder = captured.clone();

    let app = Router::new().route(
        "/api/chat",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            let reply = reply.clone();
            async move {
                recorder.lock().unwrap().push(body);
                (status, Json(reply))
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{address}"), captured)
}

fn conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::assistant("How can I help you?"),
        ChatMessage::user("Hello"),
    ]
}

#[tokio::test]
async fn test_chat_sends_model_and_full_history() {
    let (url, captured) = spawn_fake_ollama(
        StatusCode::OK,
        json!({
            "model": "WDOC",
            "created_at": "2024-01-01T00:00:00Z",
            "message": { "role": "assistant", "content": "Hi there!" },
            "done": true
        }),
    )
    .await;

    let backend = OllamaBackend::new(&url);
    let reply = backend.chat("WDOC", &conversation()).await.unwrap();

    assert_eq!(reply, ChatMessage::assistant("Hi there!"));

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({
            "model": "WDOC",
            "messages": [
                { "role": "assistant", "content": "How can I help you?" },
                { "role": "user", "content": "Hello" }
            ],
            "stream": false
        })
    );
}

#[tokio::test]
async fn test_trailing_slash_in_host_is_ignored() {
    let (url, captured) = spawn_fake_ollama(
        StatusCode::OK,
        json!({ "message": { "role": "assistant", "content": "ok" } }),
    )
    .await;

    let backend = OllamaBackend::new(&format!("{url}/"));
    let reply = backend.chat("WDOC", &conversation()).await.unwrap();

    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_error_status_maps_to_backend_error() {
    let (url, _) = spawn_fake_ollama(
        StatusCode::NOT_FOUND,
        json!({ "error": "model 'WDOC' not found" }),
    )
    .await;

    let backend = OllamaBackend::new(&url);
    let err = backend.chat("WDOC", &conversation()).await.unwrap_err();

    assert_eq!(
        err,
        InferenceError::BackendError("model 'WDOC' not found".to_owned())
    );
}

#[tokio::test]
async fn test_error_status_without_body_reports_status() {
    let (url, _) = spawn_fake_ollama(StatusCode::INTERNAL_SERVER_ERROR, Value::Null).await;

    let backend = OllamaBackend::new(&url);
    let err = backend.chat("WDOC", &conversation()).await.unwrap_err();

    match err {
        InferenceError::BackendError(reason) => assert!(reason.contains("500")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_reply_without_message_maps_to_backend_error() {
    let (url, _) = spawn_fake_ollama(StatusCode::OK, json!({ "done": true })).await;

    let backend = OllamaBackend::new(&url);
    let err = backend.chat("WDOC", &conversation()).await.unwrap_err();

    assert!(matches!(err, InferenceError::BackendError(_)));
}

#[tokio::test]
async fn test_malformed_reply_maps_to_backend_error() {
    let (url, _) = spawn_fake_ollama(
        StatusCode::OK,
        json!({ "message": { "role": "assistant" } }),
    )
    .await;

    let backend = OllamaBackend::new(&url);
    let err = backend.chat("WDOC", &conversation()).await.unwrap_err();

    assert!(matches!(err, InferenceError::BackendError(_)));
}

#[tokio::test]
async fn test_unreachable_host_maps_to_backend_unavailable() {
    // Bind and immediately drop a listener to get a port nobody is serving.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let backend = OllamaBackend::new(&format!("http://{address}"));
    let err = backend.chat("WDOC", &conversation()).await.unwrap_err();

    assert!(matches!(err, InferenceError::BackendUnavailable(_)));
}
