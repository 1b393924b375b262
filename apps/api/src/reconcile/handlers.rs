use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::reconcile::analyze_with_providers;
use crate::reconcile::models::AIAnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    pub text: String,
}

/// POST /api/v1/analysis/reconcile
///
/// Asks OpenAI and Gemini the same question and returns the merged answer.
pub async fn handle_reconcile(
    State(state): State<AppState>,
    Json(request): Json<ReconcileRequest>,
) -> Result<Json<AIAnalysisResult>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let result = analyze_with_providers(
        state.openai.as_ref(),
        state.gemini.as_ref(),
        &request.text,
    )
    .await?;

    Ok(Json(result))
}
