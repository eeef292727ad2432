use crate::analysis::{Analysis, ANALYSIS_FAILED, EMPTY_INPUT_WARNING};
use crate::server::page::{Page, PageView};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use sentiment_core::SentimentLabel;
use serde::{Deserialize, Serialize};

// ============================================================================
// Page endpoints
// ============================================================================

/// Text submitted through the page form or query string
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub text: Option<String>,
}

pub async fn index(State(state): State<AppState>, Query(form): Query<AnalyzeForm>) -> Response {
    render_page(&state, form.text.unwrap_or_default())
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<AnalyzeForm>) -> Response {
    render_page(&state, form.text.unwrap_or_default())
}

fn render_page(state: &AppState, text: String) -> Response {
    let analysis = Analysis::run(&state.pipeline, &text);
    let page = Page {
        theme: &state.theme,
        load_errors: &state.load_errors,
        text: &text,
        view: PageView::from(&analysis),
    };

    match state.pages.render(&page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

// ============================================================================
// JSON API
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub label: SentimentLabel,
    pub emoji: &'static str,
    /// P(Positive), regardless of the label
    pub confidence: f32,
    pub confidence_percent: String,
}

/// Shown when the request body is not `{"text": ...}`
pub const INVALID_REQUEST: &str = "Request body must be a JSON object with a \"text\" field.";

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("Rejected predict request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(serde_json::json!({
                    "error": INVALID_REQUEST,
                    "details": rejection.body_text(),
                })),
            );
        }
    };

    match Analysis::run(&state.pipeline, &req.text) {
        Analysis::Idle => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": EMPTY_INPUT_WARNING })),
        ),
        Analysis::Result(prediction) => (
            StatusCode::OK,
            Json(serde_json::json!(PredictResponse {
                label: prediction.label,
                emoji: prediction.label.emoji(),
                confidence: prediction.confidence,
                confidence_percent: prediction.confidence_percent(),
            })),
        ),
        Analysis::Error(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": ANALYSIS_FAILED,
                "details": e.to_string(),
            })),
        ),
    }
}

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let status = if state.is_ready() { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "model_loaded": state.pipeline.has_model(),
        "tokenizer_loaded": state.pipeline.has_vocabulary(),
        "load_errors": state.load_errors.as_slice(),
    }))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
