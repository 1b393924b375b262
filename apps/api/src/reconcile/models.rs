use serde::{Deserialize, Serialize};

use crate::analysis::models::SalaryRange;

/// Career analysis produced by one provider, or the merge of two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AIAnalysisResult {
    pub skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub market_insights: MarketInsights,
    pub career_path: CareerPath,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    pub trends: Vec<String>,
    pub in_demand_skills: Vec<String>,
    pub salary_range: SalaryRange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub current: String,
    pub next: Vec<String>,
    pub long_term: Vec<String>,
}
