//! LinkedIn profile analysis: validate URL → fetch profile → AI categorization →
//! market insights for the technical and domain skills.

pub mod fetcher;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod prompts;
pub mod profile_url;

use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, ChatProvider, CompletionRequest};
use crate::reference::ReferenceStore;
use fetcher::ProfileFetcher;
use insights::summarize_market_insights;
use models::{LinkedInAnalysis, ProfileCategorization};
use prompts::PROFILE_PROMPT_TEMPLATE;

pub const INVALID_PROFILE_URL: &str = "Invalid LinkedIn profile URL";

pub async fn analyze_profile(
    url: &str,
    fetcher: &dyn ProfileFetcher,
    llm: &dyn ChatProvider,
    references: &dyn ReferenceStore,
) -> Result<LinkedInAnalysis, AppError> {
    let username = profile_url::extract_username(url)
        .ok_or_else(|| AppError::Validation(INVALID_PROFILE_URL.to_string()))?;

    let profile = fetcher.fetch(&username).await.map_err(|e| {
        error!("LinkedIn analysis error: {e}");
        AppError::from(e)
    })?;

    let profile_json = serde_json::to_string(&profile)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let prompt = PROFILE_PROMPT_TEMPLATE.replace("{profile_json}", &profile_json);
    let request = CompletionRequest::new(prompt, 1000).with_system(JSON_ONLY_SYSTEM);

    let categorization: ProfileCategorization = complete_json(llm, &request)
        .await
        .map_err(|e| AppError::Llm(format!("Profile categorization failed: {e}")))?;

    let lookup: Vec<String> = categorization
        .skills
        .technical
        .iter()
        .chain(&categorization.skills.domain)
        .cloned()
        .collect();
    let rows = references.market_insights_for(&lookup).await?;
    info!(
        "LinkedIn profile {username}: {} skills, {} market rows",
        lookup.len(),
        rows.len()
    );

    Ok(LinkedInAnalysis {
        skills: categorization.skills,
        experience: categorization.experience,
        education: categorization.education,
        recommendations: categorization.recommendations,
        market_insights: summarize_market_insights(&rows),
    })
}
