use async_trait::async_trait;
use sqlx::PgPool;

use super::ReferenceStore;
use crate::errors::AppError;
use crate::models::reference::{JobRoleRow, MarketInsightRow, SkillDemandRow};

/// `ReferenceStore` backed by the PostgreSQL reference tables.
#[derive(Clone)]
pub struct PgReferenceStore {
    pool: PgPool,
}

impl PgReferenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceStore for PgReferenceStore {
    async fn top_skills_by_demand(&self, limit: i64) -> Result<Vec<SkillDemandRow>, AppError> {
        let rows = sqlx::query_as::<_, SkillDemandRow>(
            "SELECT skill, demand_score, description FROM skills_demand ORDER BY demand_score DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn job_roles(&self, limit: i64) -> Result<Vec<JobRoleRow>, AppError> {
        let rows = sqlx::query_as::<_, JobRoleRow>(
            r#"
            SELECT title, salary_min, salary_max, salary_avg, required_skills
            FROM job_roles
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn market_insights_for(
        &self,
        skills: &[String],
    ) -> Result<Vec<MarketInsightRow>, AppError> {
        if skills.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, MarketInsightRow>(
            "SELECT skill, role, trend, salary FROM market_insights WHERE skill = ANY($1)",
        )
        .bind(skills)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
