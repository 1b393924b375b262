//! Score aggregation. The four sub-scores and the overall score are all 0 – 100.
//!
//! overall = Σ(weight × sub_score) / Σ(weight), rounded.
//! Defaults: content 0.30, skills 0.30, format 0.15, ats 0.25.

use serde::{Deserialize, Serialize};

use crate::analysis::models::{ContentAnalysis, SkillsAnalysis, SubScores};

/// Sub-score used when a dimension produced no signal at all.
const NEUTRAL_SCORE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub content: f64,
    pub skills: f64,
    pub format: f64,
    pub ats: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            content: 0.30,
            skills: 0.30,
            format: 0.15,
            ats: 0.25,
        }
    }
}

/// Share of positive findings (strengths + achievements) among all findings.
pub fn content_score(content: &ContentAnalysis) -> u32 {
    let positive = content.strengths.len() + content.achievements.len();
    let total = positive + content.improvements.len();
    if total == 0 {
        return NEUTRAL_SCORE;
    }
    ratio_score(positive, total)
}

/// Mean category rating (1 – 10) scaled to 100; without categories, the share of
/// detected skills among detected + missing.
pub fn skills_score(skills: &SkillsAnalysis) -> u32 {
    if !skills.analysis.is_empty() {
        let sum: u32 = skills.analysis.iter().map(|c| c.score.min(10)).sum();
        let mean = sum as f64 / skills.analysis.len() as f64;
        return (mean * 10.0).round().clamp(0.0, 100.0) as u32;
    }

    let detected = skills.detected.len();
    let total = detected + skills.missing.len();
    if total == 0 {
        return NEUTRAL_SCORE;
    }
    ratio_score(detected, total)
}

fn ratio_score(part: usize, total: usize) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Weighted mean of the sub-scores. Zero when every weight is zero.
pub fn overall_score(scores: &SubScores, weights: &ScoreWeights) -> u32 {
    let total_weight = weights.content + weights.skills + weights.format + weights.ats;
    if total_weight <= 0.0 {
        return 0;
    }
    let weighted = weights.content * scores.content as f64
        + weights.skills * scores.skills as f64
        + weights.format * scores.format as f64
        + weights.ats * scores.ats as f64;
    (weighted / total_weight).round().clamp(0.0, 100.0) as u32
}

pub fn calculate_scores(
    skills: &SkillsAnalysis,
    content: &ContentAnalysis,
    ats_compatibility: u32,
    format_score: u32,
    weights: &ScoreWeights,
) -> (u32, SubScores) {
    let scores = SubScores {
        content: content_score(content),
        skills: skills_score(skills),
        format: format_score.min(100),
        ats: ats_compatibility.min(100),
    };
    (overall_score(&scores, weights), scores)
}
