//! Skills extraction: detected skills, missing skills (joined against demand data)
//! and per-category ratings.

use crate::analysis::models::{MissingSkill, SkillCategory, SkillsAnalysis};
use crate::analysis::prompts::SKILLS_PROMPT_TEMPLATE;
use crate::analysis::sections::{extract_list_section, parse_leading_int, strip_list_marker};
use crate::errors::AppError;
use crate::llm_client::prompts::SECTIONED_TEXT_SYSTEM;
use crate::llm_client::{ChatProvider, CompletionRequest};
use crate::models::reference::SkillDemandRow;
use crate::reference::ReferenceStore;

const DETECTED_HEADER: &str = "Technical and soft skills";
const MISSING_HEADER: &str = "Missing critical skills";
const CATEGORIES_HEADER: &str = "Skill categories";

/// Importance given to a missing skill with no demand data.
const DEFAULT_IMPORTANCE: u32 = 5;
/// Category score used when the model's line has no readable number.
const DEFAULT_CATEGORY_SCORE: u32 = 5;

pub async fn analyze_skills(
    llm: &dyn ChatProvider,
    references: &dyn ReferenceStore,
    resume_text: &str,
    demand_limit: i64,
) -> Result<SkillsAnalysis, AppError> {
    let prompt = SKILLS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let request = CompletionRequest::new(prompt, 1000).with_system(SECTIONED_TEXT_SYSTEM);

    let (analysis, market_skills) = tokio::try_join!(
        async {
            llm.complete(&request)
                .await
                .map_err(|e| AppError::Llm(format!("Skills analysis failed: {e}")))
        },
        references.top_skills_by_demand(demand_limit),
    )?;

    Ok(SkillsAnalysis {
        detected: extract_list_section(&analysis, DETECTED_HEADER),
        missing: identify_missing_skills(&analysis, &market_skills),
        analysis: categorize_skills(&analysis),
    })
}

/// Reads the missing-skills section and attaches demand data by case-insensitive name.
pub fn identify_missing_skills(
    analysis: &str,
    market_skills: &[SkillDemandRow],
) -> Vec<MissingSkill> {
    extract_list_section(analysis, MISSING_HEADER)
        .into_iter()
        .map(|name| {
            let key = strip_list_marker(&name).to_lowercase();
            let market = market_skills
                .iter()
                .find(|row| row.skill.to_lowercase() == key);

            let importance = market
                .map(|row| row.demand_score.max(0) as u32)
                .unwrap_or(DEFAULT_IMPORTANCE);
            let description = market
                .and_then(|row| row.description.clone())
                .unwrap_or_else(|| generic_description(&name));

            MissingSkill {
                name,
                importance,
                description,
            }
        })
        .collect()
}

pub fn generic_description(skill: &str) -> String {
    format!("{skill} is increasingly important in today's job market")
}

/// Parses `Category: score: rec, rec` lines.
pub fn categorize_skills(analysis: &str) -> Vec<SkillCategory> {
    extract_list_section(analysis, CATEGORIES_HEADER)
        .into_iter()
        .filter_map(|line| {
            let mut parts = line.split(':');
            let category = parts.next().unwrap_or_default().trim().to_string();
            if category.is_empty() {
                return None;
            }
            let score = parts
                .next()
                .and_then(parse_leading_int)
                .unwrap_or(DEFAULT_CATEGORY_SCORE);
            let recommendations = parts
                .collect::<Vec<_>>()
                .join(":")
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect();

            Some(SkillCategory {
                category,
                score,
                recommendations,
            })
        })
        .collect()
}
