use serde::{Deserialize, Serialize};

use crate::analysis::models::SalaryRange;

/// Full LinkedIn profile analysis returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInAnalysis {
    pub skills: ProfileSkills,
    pub experience: Experience,
    pub education: Education,
    pub recommendations: ProfileRecommendations,
    pub market_insights: ProfileMarketInsights,
}

/// The part of the analysis the model produces. Market insights come from the
/// reference store instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCategorization {
    pub skills: ProfileSkills,
    pub experience: Experience,
    pub education: Education,
    pub recommendations: ProfileRecommendations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub domain: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub level: String,
    pub years: u32,
    pub companies: Vec<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institutions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecommendations {
    pub career: Vec<String>,
    pub skills: Vec<String>,
    pub networking: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMarketInsights {
    pub relevant_roles: Vec<String>,
    pub industry_trends: Vec<String>,
    pub salary_range: SalaryRange,
}
