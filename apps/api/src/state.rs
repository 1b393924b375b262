use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::extraction::DocumentParser;
use crate::jobs::JobSource;
use crate::linkedin::fetcher::ProfileFetcher;
use crate::llm_client::ChatProvider;
use crate::reference::ReferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: ResumeAnalyzer,
    pub parser: DocumentParser,
    /// Primary provider: resume pipeline, LinkedIn categorization, first side of reconciliation.
    pub openai: Arc<dyn ChatProvider>,
    pub gemini: Arc<dyn ChatProvider>,
    pub references: Arc<dyn ReferenceStore>,
    /// Defaults to `UnavailableProfileFetcher` (501 on every LinkedIn request).
    pub profile_fetcher: Arc<dyn ProfileFetcher>,
    /// Empty by default: job search then returns an empty list.
    pub job_sources: Arc<Vec<Arc<dyn JobSource>>>,
}
