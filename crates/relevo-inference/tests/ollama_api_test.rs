//! HTTP-level tests for the Ollama backend against a wiremock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use relevo_core::{CompletionBackend, CompletionRequest};
use relevo_inference::OllamaBackend;

#[tokio::test]
async fn complete_parses_chat_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({ "stream": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "role": "assistant", "content": "rust async tutorial" },
            "eval_count": 17
        })))
        .mount(&server)
        .await;

    let backend = OllamaBackend::with_config(server.uri(), "test-model".to_string());
    let completion = backend
        .complete(
            &CompletionRequest::new("suggest queries")
                .with_temperature(0.3)
                .with_max_tokens(64),
        )
        .await
        .unwrap();

    assert_eq!(completion.text, "rust async tutorial");
    assert_eq!(completion.tokens_used, Some(17));
}

#[tokio::test]
async fn complete_sends_system_message_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "messages": [
                { "role": "system", "content": "you are a search assistant" },
                { "role": "user", "content": "expand: docker" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "role": "assistant", "content": "ok" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = OllamaBackend::with_config(server.uri(), "test-model".to_string());
    let completion = backend
        .complete(&CompletionRequest::new("expand: docker").with_system("you are a search assistant"))
        .await
        .unwrap();

    assert_eq!(completion.text, "ok");
}

#[tokio::test]
async fn complete_errors_on_server_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let backend = OllamaBackend::with_config(server.uri(), "test-model".to_string());
    let result = backend.complete(&CompletionRequest::new("q")).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("500"), "unexpected error: {}", err);
}

#[tokio::test]
async fn is_available_true_on_tags_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .mount(&server)
        .await;

    let backend = OllamaBackend::with_config(server.uri(), "test-model".to_string());
    assert!(backend.is_available().await);
}

#[tokio::test]
async fn is_available_false_on_tags_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend = OllamaBackend::with_config(server.uri(), "test-model".to_string());
    assert!(!backend.is_available().await);
}

#[tokio::test]
async fn is_available_false_when_unreachable() {
    // Port 1 is essentially never listening
    let backend = OllamaBackend::with_config("http://127.0.0.1:1".to_string(), "m".to_string());
    assert!(!backend.is_available().await);
}
