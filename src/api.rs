use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::config::{self, ShellConfig};
use crate::decision::Analysis;
use crate::engine;
use crate::history::{History, SessionStats};

#[derive(Clone)]
pub struct AppState {
    history: Arc<History>,
    config: ShellConfig,
}

pub fn create_router(config: ShellConfig) -> Router {
    let state = AppState {
        history: Arc::new(History::with_capacity(2000)),
        config,
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/history", get(history))
        .route("/history.csv", get(history_csv))
        .route("/history/clear", post(history_clear))
        .route("/stats", get(stats))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    text: String,
    #[serde(default)]
    threshold: Option<f32>, // falls back to the configured default
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<Analysis>, (StatusCode, String)> {
    // Shell-level precondition; the core itself accepts any string.
    if body.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Por favor, insira um texto válido para análise.".to_string(),
        ));
    }

    let threshold = config::clamp_threshold(
        body.threshold
            .unwrap_or(state.config.confidence_threshold),
    );

    let analysis = engine::analyze(&body.text, threshold);
    state.history.push(&body.text, &analysis);

    // Never log raw customer text; label and numbers only.
    tracing::info!(
        target: "cx",
        label = ?analysis.label,
        confidence = analysis.confidence,
        threshold,
        "ticket analyzed"
    );

    Ok(Json(analysis))
}

#[derive(serde::Deserialize)]
struct HistoryQuery {
    #[serde(default)]
    n: Option<usize>,
}

#[derive(serde::Serialize)]
struct HistoryOut {
    ts_unix: u64,
    text: String,
    sentiment: String, // "Bom (85%)" rendering
    reading: String,
}

async fn history(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Json<Vec<HistoryOut>> {
    let n = q.n.unwrap_or(20);
    let out = state
        .history
        .snapshot_last_n(n)
        .into_iter()
        .map(|e| HistoryOut {
            ts_unix: e.ts_unix,
            sentiment: e.sentiment_display(),
            text: e.text,
            reading: e.reading,
        })
        .collect::<Vec<_>>();
    Json(out)
}

async fn history_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let bytes = state
        .history
        .to_csv()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("csv export failed: {e}")))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"historico_analise_sentimento.csv\"",
            ),
        ],
        bytes,
    ))
}

async fn history_clear(State(state): State<AppState>) -> &'static str {
    state.history.clear();
    "cleared"
}

async fn stats(State(state): State<AppState>) -> Json<SessionStats> {
    Json(state.history.stats())
}
