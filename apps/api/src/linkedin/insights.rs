//! Market insight summary over `market_insights` rows.

use std::collections::HashSet;

use crate::analysis::models::SalaryRange;
use crate::linkedin::models::ProfileMarketInsights;
use crate::models::reference::MarketInsightRow;

const MAX_ENTRIES: usize = 5;

pub fn summarize_market_insights(rows: &[MarketInsightRow]) -> ProfileMarketInsights {
    ProfileMarketInsights {
        relevant_roles: first_unique(rows.iter().filter_map(|r| r.role.as_deref())),
        industry_trends: first_unique(rows.iter().filter_map(|r| r.trend.as_deref())),
        salary_range: salary_range(rows),
    }
}

fn first_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .take(MAX_ENTRIES)
        .map(String::from)
        .collect()
}

/// Min, max and mean over the non-zero salaries. All zeros when there are none.
fn salary_range(rows: &[MarketInsightRow]) -> SalaryRange {
    let salaries: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.salary)
        .filter(|s| *s != 0.0 && s.is_finite())
        .collect();

    if salaries.is_empty() {
        return SalaryRange::default();
    }

    SalaryRange {
        min: salaries.iter().copied().fold(f64::INFINITY, f64::min),
        max: salaries.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        average: salaries.iter().sum::<f64>() / salaries.len() as f64,
    }
}
