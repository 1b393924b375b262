use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::linkedin::analyze_profile;
use crate::linkedin::models::LinkedInAnalysis;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkedInRequest {
    pub profile_url: String,
}

/// POST /api/v1/linkedin/analyze
///
/// Returns 501 until a profile fetcher is configured.
pub async fn handle_analyze_linkedin(
    State(state): State<AppState>,
    Json(request): Json<LinkedInRequest>,
) -> Result<Json<LinkedInAnalysis>, AppError> {
    let analysis = analyze_profile(
        &request.profile_url,
        state.profile_fetcher.as_ref(),
        state.openai.as_ref(),
        state.references.as_ref(),
    )
    .await?;

    Ok(Json(analysis))
}
