mod analysis;
mod config;
mod db;
mod errors;
mod export;
mod extraction;
mod jobs;
mod linkedin;
mod llm_client;
mod models;
mod reconcile;
mod reference;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::db::create_pool;
use crate::extraction::ocr::TesseractOcr;
use crate::extraction::DocumentParser;
use crate::linkedin::fetcher::UnavailableProfileFetcher;
use crate::llm_client::{ChatProvider, GeminiClient, OpenAiClient};
use crate::reference::{PgReferenceStore, ReferenceStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast on missing required env vars
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerScope API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;
    let references: Arc<dyn ReferenceStore> = Arc::new(PgReferenceStore::new(db));

    let openai = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    );
    info!("OpenAI client initialized (model: {})", openai.model());
    let gemini = GeminiClient::new(
        config.google_ai_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    );
    info!("Gemini client initialized (model: {})", gemini.model());
    let openai: Arc<dyn ChatProvider> = Arc::new(openai);
    let gemini: Arc<dyn ChatProvider> = Arc::new(gemini);

    let ocr = TesseractOcr::new(config.tesseract_bin.clone(), config.ocr_language.clone());
    info!(
        "OCR engine: {} (language: {})",
        config.tesseract_bin, config.ocr_language
    );
    let parser = DocumentParser::new(Arc::new(ocr));

    let analyzer = ResumeAnalyzer::new(
        openai.clone(),
        references.clone(),
        parser.clone(),
        config.analysis.clone(),
    );

    let state = AppState {
        analyzer,
        parser,
        openai,
        gemini,
        references,
        profile_fetcher: Arc::new(UnavailableProfileFetcher),
        job_sources: Arc::new(Vec::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
