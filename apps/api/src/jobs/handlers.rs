use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::fetch_job_postings;
use crate::jobs::models::{JobPosting, JobQuery};
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub keywords: Vec<String>,
    pub location: Option<String>,
    pub limit: Option<usize>,
}

/// POST /api/v1/jobs/search
///
/// Aggregates postings from every configured source.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let keywords: Vec<String> = request
        .keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(AppError::Validation("keywords cannot be empty".to_string()));
    }

    let query = JobQuery {
        keywords,
        location: request.location.filter(|l| !l.trim().is_empty()),
        limit: request.limit.unwrap_or(DEFAULT_LIMIT),
    };

    let postings = fetch_job_postings(&state.job_sources, query).await?;
    Ok(Json(postings))
}
