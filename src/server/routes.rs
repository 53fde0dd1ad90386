use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analyzer;
use crate::error::TextError;
use crate::tokenizer::{TokenizationMethod, Tokenizer};
use super::state::AppState;
use super::types::{
    AnalyzeRequest,
    AnalyzeResponse,
    HealthResponse,
    TokenizeRequest,
    TokenizeResponse,
};

/// Tokenizes the request text with the requested (or default) method.
///
/// Every failure is reported in the `error` field with zero tokens.
pub fn handle_tokenize(state: &AppState, request: TokenizeRequest) -> TokenizeResponse {
    let text = request.text();
    if text.is_empty() {
        return TokenizeResponse::failure(&TextError::EmptyInput);
    }

    let method = match request.method.as_deref() {
        Some(name) => TokenizationMethod::parse(name),
        None => state.default_method.clone(),
    };

    match Tokenizer::new(method, &state.engine).and_then(|t| t.tokenize(text)) {
        Ok(tokens) => TokenizeResponse::success(tokens),
        Err(e) => TokenizeResponse::failure(&e),
    }
}

/// Analyzes the request text; degraded results carry an advisory error.
pub fn handle_analyze(state: &AppState, request: AnalyzeRequest) -> AnalyzeResponse {
    match analyzer::analyze(&state.engine, request.text()) {
        Ok(result) => AnalyzeResponse::from(result),
        Err(e) => AnalyzeResponse::failure(&e),
    }
}

/// Handles the tokenize endpoint
pub async fn tokenize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TokenizeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("[{}] Rejected tokenize body: {}", request_id, rejection.body_text());
            let err = TextError::InvalidRequest(rejection.body_text());
            return Json(TokenizeResponse::failure(&err));
        }
    };

    info!(
        "[{}] Tokenize endpoint called. Method: {:?}, text length: {}",
        request_id, request.method, request.text().len()
    );

    let response = handle_tokenize(&state, request);
    match &response.error {
        Some(e) => warn!("[{}] Tokenize failed: {}", request_id, e),
        None => info!("[{}] Produced {} tokens", request_id, response.count),
    }
    Json(response)
}

/// Handles the analyze endpoint
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("[{}] Rejected analyze body: {}", request_id, rejection.body_text());
            let err = TextError::InvalidRequest(rejection.body_text());
            return Json(AnalyzeResponse::failure(&err));
        }
    };

    info!("[{}] Analyze endpoint called. Text length: {}", request_id, request.text().len());

    let response = handle_analyze(&state, request);
    match &response.error {
        Some(e) => warn!("[{}] Analyze reported: {}", request_id, e),
        None => info!(
            "[{}] Found {} entities, {} words ({} distinct)",
            request_id,
            response.entities.len(),
            response.word_frequency.total(),
            response.word_frequency.len()
        ),
    }
    Json(response)
}

/// Returns a health check response
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("Health check endpoint called");
    Json(HealthResponse {
        status: "ok".to_string(),
        model_available: state.model_available(),
    })
}

/// Renders the index page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    info!("Index page requested");
    Html(render_index(state.model_available()))
}

fn render_index(model_available: bool) -> String {
    let model_status = if model_available {
        "Language model loaded: entity and part-of-speech analysis enabled."
    } else {
        "Language model not available: only basic analysis is provided."
    };
    let model_option = if model_available {
        r#"<option value="spacy">Language model</option>"#
    } else {
        r#"<option value="spacy" disabled>Language model (unavailable)</option>"#
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>textkit</title></head>
<body>
<h1>Text tokenizer</h1>
<p id="model-status">{model_status}</p>
<form>
  <textarea name="text" rows="8" cols="80"></textarea>
  <select name="method">
    <option value="regex_word">Words</option>
    <option value="regex_sentence">Sentences</option>
    {model_option}
  </select>
</form>
<p>POST JSON to <code>/tokenize</code> or <code>/analyze</code>.</p>
</body>
</html>
"#
    )
}
