//! In-memory `ReferenceStore` for tests.

use async_trait::async_trait;

use super::ReferenceStore;
use crate::errors::AppError;
use crate::models::reference::{JobRoleRow, MarketInsightRow, SkillDemandRow};

#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceStore {
    pub skills: Vec<SkillDemandRow>,
    pub roles: Vec<JobRoleRow>,
    pub insights: Vec<MarketInsightRow>,
}

#[async_trait]
impl ReferenceStore for InMemoryReferenceStore {
    async fn top_skills_by_demand(&self, limit: i64) -> Result<Vec<SkillDemandRow>, AppError> {
        let mut skills = self.skills.clone();
        skills.sort_by(|a, b| b.demand_score.cmp(&a.demand_score));
        skills.truncate(limit.max(0) as usize);
        Ok(skills)
    }

    async fn job_roles(&self, limit: i64) -> Result<Vec<JobRoleRow>, AppError> {
        Ok(self
            .roles
            .iter()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn market_insights_for(
        &self,
        skills: &[String],
    ) -> Result<Vec<MarketInsightRow>, AppError> {
        Ok(self
            .insights
            .iter()
            .filter(|row| skills.contains(&row.skill))
            .cloned()
            .collect())
    }
}
