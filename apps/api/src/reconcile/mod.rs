//! Multi-provider reconciliation: the same prompt to two providers, merged into one result.

pub mod handlers;
pub mod merge;
pub mod models;
pub mod prompts;

use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, ChatProvider, CompletionRequest};
use merge::merge_results;
use models::AIAnalysisResult;
use prompts::RECONCILE_PROMPT_TEMPLATE;

pub const RECONCILE_FAILED: &str = "Failed to analyze with AI services";

/// Runs both providers concurrently and merges their results, `primary` first.
/// Either provider failing (transport, status, or schema mismatch) aborts the call.
pub async fn analyze_with_providers(
    primary: &dyn ChatProvider,
    secondary: &dyn ChatProvider,
    text: &str,
) -> Result<AIAnalysisResult, AppError> {
    let prompt = RECONCILE_PROMPT_TEMPLATE.replace("{text}", text);
    let request = CompletionRequest::new(prompt, 1000).with_system(JSON_ONLY_SYSTEM);

    let results = tokio::try_join!(
        complete_json::<AIAnalysisResult>(primary, &request),
        complete_json::<AIAnalysisResult>(secondary, &request),
    );

    match results {
        Ok((first, second)) => {
            info!(
                "Reconciling {} and {} results ({} + {} skills)",
                primary.name(),
                secondary.name(),
                first.skills.len(),
                second.skills.len()
            );
            Ok(merge_results(&first, &second))
        }
        Err(e) => {
            error!("AI analysis error: {e}");
            Err(AppError::AnalysisFailed(RECONCILE_FAILED.to_string()))
        }
    }
}
