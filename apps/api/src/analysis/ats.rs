use crate::analysis::models::AtsAnalysis;
use crate::analysis::prompts::ATS_PROMPT_TEMPLATE;
use crate::analysis::sections::{extract_list_section, extract_score};
use crate::errors::AppError;
use crate::llm_client::prompts::SECTIONED_TEXT_SYSTEM;
use crate::llm_client::{ChatProvider, CompletionRequest};

const COMPATIBILITY_LABEL: &str = "Compatibility Score";
const FORMAT_LABEL: &str = "Format Score";

/// ATS findings plus the format score, which only feeds score aggregation.
#[derive(Debug, Clone)]
pub struct AtsReport {
    pub ats: AtsAnalysis,
    pub format_score: u32,
}

pub async fn analyze_ats(
    llm: &dyn ChatProvider,
    resume_text: &str,
    fallback_score: u32,
) -> Result<AtsReport, AppError> {
    let prompt = ATS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let request = CompletionRequest::new(prompt, 750).with_system(SECTIONED_TEXT_SYSTEM);
    let analysis = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("ATS analysis failed: {e}")))?;

    Ok(parse_ats(&analysis, fallback_score))
}

pub fn parse_ats(analysis: &str, fallback_score: u32) -> AtsReport {
    let compatibility = extract_ats_score(analysis, fallback_score);
    let format_score = extract_score(analysis, FORMAT_LABEL)
        .map(|s| s.min(100))
        .unwrap_or(compatibility);

    AtsReport {
        ats: AtsAnalysis {
            compatibility,
            issues: extract_list_section(analysis, "Issues"),
            recommendations: extract_list_section(analysis, "Recommendations"),
        },
        format_score,
    }
}

/// `Compatibility Score: N`, clamped to 100, or `fallback` when the line is absent.
pub fn extract_ats_score(analysis: &str, fallback: u32) -> u32 {
    extract_score(analysis, COMPATIBILITY_LABEL)
        .unwrap_or(fallback)
        .min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;

    #[test]
    fn test_compatibility_score_is_extracted() {
        assert_eq!(extract_ats_score("Compatibility Score: 82", 70), 82);
    }

    #[test]
    fn test_missing_score_uses_documented_fallback() {
        let fallback = AnalysisConfig::default().ats_fallback_score;
        assert_eq!(extract_ats_score("No score given.", fallback), 70);
    }

    #[test]
    fn test_fallback_is_configurable() {
        assert_eq!(extract_ats_score("No score given.", 55), 55);
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        assert_eq!(extract_ats_score("Compatibility Score: 140", 70), 100);
    }

    #[test]
    fn test_format_score_defaults_to_compatibility() {
        let report = parse_ats("Compatibility Score: 64\n\nIssues:\n- Tables in header\n", 70);
        assert_eq!(report.ats.compatibility, 64);
        assert_eq!(report.format_score, 64);
        assert_eq!(report.ats.issues, vec!["- Tables in header"]);
        assert!(report.ats.recommendations.is_empty());
    }

    #[test]
    fn test_format_score_read_when_present() {
        let report = parse_ats("Compatibility Score: 64\nFormat Score: 90\n", 70);
        assert_eq!(report.format_score, 90);
    }
}
