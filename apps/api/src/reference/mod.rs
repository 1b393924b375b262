//! Read-only reference data (skills demand, job roles, market insights).
//!
//! Consumed best-effort by the analysis modules. No caching, no transactions.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::reference::{JobRoleRow, MarketInsightRow, SkillDemandRow};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgReferenceStore;

#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Top `limit` skills ordered by demand score, highest first.
    async fn top_skills_by_demand(&self, limit: i64) -> Result<Vec<SkillDemandRow>, AppError>;

    /// Up to `limit` job roles.
    async fn job_roles(&self, limit: i64) -> Result<Vec<JobRoleRow>, AppError>;

    /// Market insight rows whose skill is one of `skills` (exact match).
    async fn market_insights_for(
        &self,
        skills: &[String],
    ) -> Result<Vec<MarketInsightRow>, AppError>;
}
