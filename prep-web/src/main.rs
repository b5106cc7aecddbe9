//! Axum server exposing the preprocessing pipeline as JSON endpoints, with a
//! WebSocket that streams each stage of a full analysis as it finishes.
//!
//! Environment:
//! - `PREP_CONFIG`: path to a TOML [`PrepConfig`]; built-in defaults otherwise.
//! - `PREP_ADDR`: listen address, `0.0.0.0:3000` by default.
//! - `RUST_LOG`: tracing filter, `info` by default.

use std::collections::BTreeSet;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use anyhow::Context;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use prep_core::{
    corpus::demo_texts, Analysis, EmojiMode, Entity, PipelineEvent, PrepConfig, Preprocessor, TaggedToken,
    Token,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Pause between streamed events so the page can animate each stage.
const STEP_DELAY: Duration = Duration::from_millis(35);

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

struct AppState {
    prep: Preprocessor,
}

#[derive(Deserialize)]
struct TextRequest {
    text: String,
}

#[derive(Deserialize)]
struct CleanRequest {
    text: String,
    #[serde(default)]
    emoji_mode: EmojiMode,
}

#[derive(Deserialize)]
struct NerRequest {
    text: String,
    #[serde(default)]
    binary: bool,
}

#[derive(Serialize)]
struct CleanResponse {
    lower_cased: String,
    without_html: String,
    without_urls: String,
    without_emoji: String,
    without_punctuation: String,
}

#[derive(Serialize)]
struct TokenizeResponse {
    words: Vec<Token>,
    sentences: Vec<String>,
}

#[derive(Serialize)]
struct RootsResponse {
    strategy: &'static str,
    roots: Vec<String>,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    #[serde(flatten)]
    analysis: Analysis,
    processing_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match std::env::var("PREP_CONFIG") {
        Ok(path) => PrepConfig::from_file(&path).with_context(|| format!("loading {path}"))?,
        Err(_) => PrepConfig::default(),
    };

    // Training is CPU-bound; keep it off the async workers.
    let prep = tokio::task::spawn_blocking(move || Preprocessor::load(&config))
        .await
        .context("model loading task panicked")??;
    let state = Arc::new(AppState { prep });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .route("/clean", post(clean_handler))
        .route("/tokenize", post(tokenize_handler))
        .route("/stopwords", post(stopwords_handler))
        .route("/stem", post(stem_handler))
        .route("/lemmatize", post(lemmatize_handler))
        .route("/pos", post(pos_handler))
        .route("/ner", post(ner_handler))
        .route("/analyze", post(analyze_handler))
        .route("/ws", get(ws_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    let addr = std::env::var("PREP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("preprocessing server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Runs `f` on the blocking pool with a handle to the shared preprocessor.
async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, (StatusCode, String)>
where
    T: Send + 'static,
    F: FnOnce(Preprocessor) -> T + Send + 'static,
{
    let prep = state.prep.clone();
    tokio::task::spawn_blocking(move || f(prep))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("pipeline task failed: {e}")))
}

async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(domain, text)| serde_json::json!({ "domain": domain, "text": text }))
        .collect();
    Json(texts)
}

async fn clean_handler(State(state): State<Arc<AppState>>, Json(req): Json<CleanRequest>) -> Json<CleanResponse> {
    let prep = &state.prep;
    Json(CleanResponse {
        lower_cased: prep.lower_casing(&req.text),
        without_html: prep.remove_html(&req.text),
        without_urls: prep.remove_url(&req.text),
        without_emoji: prep.remove_emoji(&req.text, req.emoji_mode),
        without_punctuation: prep.remove_punctuation(&req.text),
    })
}

async fn tokenize_handler(State(state): State<Arc<AppState>>, Json(req): Json<TextRequest>) -> Json<TokenizeResponse> {
    Json(TokenizeResponse {
        words: state.prep.tokenize_words(&req.text),
        sentences: state.prep.tokenize_sentences(&req.text),
    })
}

async fn stopwords_handler(State(state): State<Arc<AppState>>, Json(req): Json<TextRequest>) -> Json<Vec<Token>> {
    Json(state.prep.stop_word_removal(&req.text))
}

async fn stem_handler(State(state): State<Arc<AppState>>, Json(req): Json<TextRequest>) -> Json<RootsResponse> {
    Json(RootsResponse {
        strategy: "stemming",
        roots: state.prep.stemming(&req.text),
    })
}

async fn lemmatize_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> ApiResult<RootsResponse> {
    let roots = blocking(&state, move |prep| prep.lemmatization(&req.text)).await?;
    Ok(Json(RootsResponse {
        strategy: "lemmatization",
        roots,
    }))
}

async fn pos_handler(State(state): State<Arc<AppState>>, Json(req): Json<TextRequest>) -> ApiResult<Vec<TaggedToken>> {
    let tagged = blocking(&state, move |prep| prep.pos_tagging(&req.text)).await?;
    Ok(Json(tagged))
}

async fn ner_handler(State(state): State<Arc<AppState>>, Json(req): Json<NerRequest>) -> ApiResult<BTreeSet<Entity>> {
    let entities = blocking(&state, move |prep| prep.named_entity_recognizer(&req.text, req.binary)).await?;
    Ok(Json(entities))
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> ApiResult<AnalyzeResponse> {
    if req.text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "text cannot be empty".to_string()));
    }

    let start = Instant::now();
    let analysis = blocking(&state, move |prep| prep.analyze(&req.text)).await?;
    Ok(Json(AnalyzeResponse {
        analysis,
        processing_ms: start.elapsed().as_millis() as u64,
    }))
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Each text message is a document (raw text or `{"text": ...}`); the reply is
/// one JSON [`PipelineEvent`] per finished stage.
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("websocket connected");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(raw) => {
                let text = match serde_json::from_str::<TextRequest>(&raw) {
                    Ok(req) => req.text,
                    Err(_) => raw.to_string(),
                };
                if text.trim().is_empty() {
                    continue;
                }
                info!(chars = text.len(), "analyzing via websocket");

                let (tx, rx) = mpsc::channel::<PipelineEvent>();
                if let Err(e) = blocking(&state, move |prep| prep.analyze_streaming(&text, tx)).await {
                    warn!(error = %e.1, "streaming analysis failed");
                    continue;
                }
                let events: Vec<PipelineEvent> = rx.try_iter().collect();

                for event in &events {
                    let Ok(json) = serde_json::to_string(event) else { continue };
                    if socket.send(Message::Text(json)).await.is_err() {
                        return;
                    }
                    tokio::time::sleep(STEP_DELAY).await;
                }
            }
            Message::Close(_) => {
                info!("websocket disconnected");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}
