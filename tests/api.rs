use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use textkit::nlp::{LexiconModel, NlpEngine};
use textkit::server::{build_router, AppState};
use textkit::tokenizer::TokenizationMethod;

const LEXICON: &str = r#"{
    "pos": {"the": "DET", "visited": "VERB", "in": "ADP"},
    "entities": {"Alan Turing": "PERSON", "London": "GPE"}
}"#;

fn degraded_app() -> Router {
    let state = AppState::new(NlpEngine::unavailable(), TokenizationMethod::Word);
    build_router(Arc::new(state), 64 * 1024)
}

fn model_app() -> Router {
    let engine = NlpEngine::with_model(LexiconModel::from_json(LEXICON).unwrap());
    let state = AppState::new(engine, TokenizationMethod::Word);
    build_router(Arc::new(state), 64 * 1024)
}

async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

#[tokio::test]
async fn tokenize_words() {
    let (status, body) = post(
        degraded_app(),
        "/tokenize",
        json!({"text": "Hello, world!", "method": "regex_word"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tokens": ["Hello", "world"], "count": 2, "error": null}));
}

#[tokio::test]
async fn tokenize_defaults_to_words() {
    let (_, body) = post(degraded_app(), "/tokenize", json!({"text": "a b"})).await;
    assert_eq!(body["tokens"], json!(["a", "b"]));
    assert_eq!(body["error"], Value::Null);
}

#[tokio::test]
async fn tokenize_sentences() {
    let (_, body) = post(
        degraded_app(),
        "/tokenize",
        json!({"text": "Hi there. How are you? Fine!", "method": "nltk_sentence"}),
    )
    .await;

    assert_eq!(body["tokens"], json!(["Hi there.", "How are you?", "Fine!"]));
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn speech_is_word_tokenized() {
    let (_, body) = post(
        degraded_app(),
        "/tokenize",
        json!({"text": "turn the lights off", "method": "speech"}),
    )
    .await;
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn tokenize_empty_text() {
    let (status, body) = post(
        degraded_app(),
        "/tokenize",
        json!({"text": "", "method": "spacy"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tokens": [], "count": 0, "error": "No text provided"}));
}

#[tokio::test]
async fn tokenize_null_text() {
    let (status, body) = post(
        degraded_app(),
        "/tokenize",
        json!({"text": null, "method": "regex_word"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tokens": [], "count": 0, "error": "No text provided"}));
}

#[tokio::test]
async fn tokenize_method_names_are_exact() {
    for method in ["WORD", "Regex_Word", " spacy"] {
        let (_, body) = post(
            degraded_app(),
            "/tokenize",
            json!({"text": "a. b", "method": method}),
        )
        .await;
        assert_eq!(body["tokens"], json!([]));
        assert_eq!(body["error"], "Invalid tokenization method");
    }
}

#[tokio::test]
async fn tokenize_unknown_method() {
    let (status, body) = post(
        degraded_app(),
        "/tokenize",
        json!({"text": "some text", "method": "morse"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokens"], json!([]));
    assert_eq!(body["count"], 0);
    assert_eq!(body["error"], "Invalid tokenization method");
}

#[tokio::test]
async fn model_tokenization_unavailable() {
    let (_, body) = post(
        degraded_app(),
        "/tokenize",
        json!({"text": "some text", "method": "spacy"}),
    )
    .await;

    assert_eq!(body["tokens"], json!([]));
    assert!(body["error"].as_str().unwrap().contains("not available"));
}

#[tokio::test]
async fn model_tokenization_keeps_punctuation() {
    let (_, body) = post(
        model_app(),
        "/tokenize",
        json!({"text": "Hello, world!", "method": "spacy"}),
    )
    .await;

    assert_eq!(body["tokens"], json!(["Hello", ",", "world", "!"]));
    assert_eq!(body["count"], 4);
    assert_eq!(body["error"], Value::Null);
}

#[tokio::test]
async fn malformed_body_is_reported_in_error_field() {
    let (status, body) = post_raw(degraded_app(), "/tokenize", "{ not json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn analyze_degraded() {
    let (status, body) = post(
        degraded_app(),
        "/analyze",
        json!({"text": "the cat and the dog"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entities"], json!([]));
    assert_eq!(body["pos_tags"], json!([]));
    assert!(body["error"].as_str().unwrap().contains("Only basic analysis"));

    let freq = body["word_frequency"].as_object().unwrap();
    let keys: Vec<&str> = freq.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["the", "cat", "and", "dog"]);
    assert_eq!(body["word_frequency"], json!({"the": 2, "cat": 1, "and": 1, "dog": 1}));
}

#[tokio::test]
async fn analyze_with_model() {
    let (_, body) = post(
        model_app(),
        "/analyze",
        json!({"text": "Alan Turing visited London in 1936."}),
    )
    .await;

    assert_eq!(body["error"], Value::Null);
    assert_eq!(
        body["entities"],
        json!([
            {"text": "Alan Turing", "label": "PERSON"},
            {"text": "London", "label": "GPE"},
            {"text": "1936", "label": "DATE"}
        ])
    );
    assert_eq!(body["pos_tags"][2], json!({"text": "visited", "pos": "VERB"}));
    assert_eq!(body["pos_tags"][6], json!({"text": ".", "pos": "PUNCT"}));
    assert!(body["word_frequency"].get(".").is_none());
    assert_eq!(body["word_frequency"]["london"], 1);
}

#[tokio::test]
async fn analyze_empty_text() {
    let (status, body) = post(model_app(), "/analyze", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "No text provided");
    assert_eq!(body["entities"], json!([]));
}

#[tokio::test]
async fn analyze_null_text() {
    let (status, body) = post(model_app(), "/analyze", json!({"text": null})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "No text provided");
    assert_eq!(body["word_frequency"], json!({}));
}

#[tokio::test]
async fn handlers_are_idempotent() {
    let app = model_app();
    let first = post(app.clone(), "/analyze", json!({"text": "London, London and Paris."})).await;
    let second = post(app.clone(), "/analyze", json!({"text": "London, London and Paris."})).await;
    assert_eq!(first, second);

    let first = post(app.clone(), "/tokenize", json!({"text": "x. y", "method": "regex_sentence"})).await;
    let second = post(app, "/tokenize", json!({"text": "x. y", "method": "regex_sentence"})).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_reports_model_availability() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = degraded_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "ok", "model_available": false}));
}

#[tokio::test]
async fn index_page_renders() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = model_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Language model loaded"));
}
