use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full result of one resume analysis. Replaced, never merged, on re-analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub overall_score: u32, // 0 – 100
    pub scores: SubScores,
    pub skills: SkillsAnalysis,
    pub content: ContentAnalysis,
    pub ats: AtsAnalysis,
    pub market_fit: MarketFit,
    pub recommendations: Recommendations,
    pub ai_insights: Vec<String>,
}

/// Per-dimension scores, each 0 – 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub content: u32,
    pub skills: u32,
    pub format: u32,
    pub ats: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub detected: Vec<String>,
    pub missing: Vec<MissingSkill>,
    pub analysis: Vec<SkillCategory>,
}

/// A skill the model flagged as missing, joined against the skills-demand table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub name: String,
    pub importance: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub score: u32, // model's 1 – 10 rating
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub achievements: Vec<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub compatibility: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketFit {
    pub roles: Vec<MarketRole>,
    pub industries: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRole {
    pub title: String,
    pub match_score: u32, // 0 – 100
    pub salary: SalaryRange,
    pub requirements: RoleRequirements,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirements {
    pub met: Vec<String>,
    pub missing: Vec<String>,
}

/// Action plan split by horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}
