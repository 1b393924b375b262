//! Pure merge rules for two provider results. The first argument always wins ties.

use std::collections::HashSet;

use crate::analysis::models::SalaryRange;
use crate::reconcile::models::{AIAnalysisResult, CareerPath, MarketInsights};

/// Union of `first` then `second`, keeping the first occurrence of each string.
/// Comparison is exact, so `"React"` and `"react"` are both kept.
pub fn union_preserving_order(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    first
        .iter()
        .chain(second)
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

pub fn merge_salary(a: &SalaryRange, b: &SalaryRange) -> SalaryRange {
    SalaryRange {
        min: a.min.min(b.min),
        max: a.max.max(b.max),
        average: (a.average + b.average) / 2.0,
    }
}

pub fn merge_market_insights(a: &MarketInsights, b: &MarketInsights) -> MarketInsights {
    MarketInsights {
        trends: union_preserving_order(&a.trends, &b.trends),
        in_demand_skills: union_preserving_order(&a.in_demand_skills, &b.in_demand_skills),
        salary_range: merge_salary(&a.salary_range, &b.salary_range),
    }
}

pub fn reconcile_career_paths(a: &CareerPath, b: &CareerPath) -> CareerPath {
    let current = if a.current.is_empty() {
        b.current.clone()
    } else {
        a.current.clone()
    };

    CareerPath {
        current,
        next: union_preserving_order(&a.next, &b.next),
        long_term: union_preserving_order(&a.long_term, &b.long_term),
    }
}

pub fn merge_results(a: &AIAnalysisResult, b: &AIAnalysisResult) -> AIAnalysisResult {
    AIAnalysisResult {
        skills: union_preserving_order(&a.skills, &b.skills),
        recommendations: union_preserving_order(&a.recommendations, &b.recommendations),
        market_insights: merge_market_insights(&a.market_insights, &b.market_insights),
        career_path: reconcile_career_paths(&a.career_path, &b.career_path),
    }
}
