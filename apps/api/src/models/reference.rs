use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `skills_demand`: how sought-after a skill currently is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillDemandRow {
    pub skill: String,
    pub demand_score: i32,
    pub description: Option<String>,
}

/// Row of `job_roles`: salary band and required skills for a role title.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRoleRow {
    pub title: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_avg: Option<f64>,
    pub required_skills: Vec<String>,
}

/// Row of `market_insights`: a role/trend/salary observation keyed by skill.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MarketInsightRow {
    pub skill: String,
    pub role: Option<String>,
    pub trend: Option<String>,
    pub salary: Option<f64>,
}
