//! Follow-up calls that use the derived skills and market data as context:
//! the action plan and free-text insights.

use crate::analysis::models::{MarketFit, Recommendations, SkillsAnalysis};
use crate::analysis::prompts::{INSIGHTS_PROMPT_TEMPLATE, RECOMMENDATIONS_PROMPT_TEMPLATE};
use crate::analysis::sections::extract_list_section;
use crate::errors::AppError;
use crate::llm_client::prompts::SECTIONED_TEXT_SYSTEM;
use crate::llm_client::{ChatProvider, CompletionRequest};

pub async fn generate_recommendations(
    llm: &dyn ChatProvider,
    resume_text: &str,
    skills: &SkillsAnalysis,
    market: &MarketFit,
) -> Result<Recommendations, AppError> {
    let prompt = fill_context(RECOMMENDATIONS_PROMPT_TEMPLATE, resume_text, skills, market);
    let request = CompletionRequest::new(prompt, 1000).with_system(SECTIONED_TEXT_SYSTEM);
    let reply = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Recommendation generation failed: {e}")))?;

    Ok(Recommendations {
        immediate: extract_list_section(&reply, "Immediate"),
        short_term: extract_list_section(&reply, "Short-term"),
        long_term: extract_list_section(&reply, "Long-term"),
    })
}

pub async fn generate_insights(
    llm: &dyn ChatProvider,
    resume_text: &str,
    skills: &SkillsAnalysis,
    market: &MarketFit,
) -> Result<Vec<String>, AppError> {
    let prompt = fill_context(INSIGHTS_PROMPT_TEMPLATE, resume_text, skills, market);
    let request = CompletionRequest::new(prompt, 750).with_system(SECTIONED_TEXT_SYSTEM);
    let reply = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Insight generation failed: {e}")))?;

    Ok(extract_list_section(&reply, "Insights"))
}

fn fill_context(
    template: &str,
    resume_text: &str,
    skills: &SkillsAnalysis,
    market: &MarketFit,
) -> String {
    let missing: Vec<&str> = skills.missing.iter().map(|s| s.name.as_str()).collect();
    let roles: Vec<&str> = market.roles.iter().map(|r| r.title.as_str()).collect();

    // resume text last so placeholders inside it are left alone
    template
        .replace("{detected_skills}", &or_none(&skills.detected.join(", ")))
        .replace("{missing_skills}", &or_none(&missing.join(", ")))
        .replace("{roles}", &or_none(&roles.join(", ")))
        .replace("{resume_text}", resume_text)
}

fn or_none(list: &str) -> String {
    if list.is_empty() {
        "none identified".to_string()
    } else {
        list.to_string()
    }
}
