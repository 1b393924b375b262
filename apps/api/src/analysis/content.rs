use crate::analysis::models::ContentAnalysis;
use crate::analysis::prompts::CONTENT_PROMPT_TEMPLATE;
use crate::analysis::sections::extract_list_section;
use crate::errors::AppError;
use crate::llm_client::prompts::SECTIONED_TEXT_SYSTEM;
use crate::llm_client::{ChatProvider, CompletionRequest};

pub async fn analyze_content(
    llm: &dyn ChatProvider,
    resume_text: &str,
) -> Result<ContentAnalysis, AppError> {
    let prompt = CONTENT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let request = CompletionRequest::new(prompt, 1000).with_system(SECTIONED_TEXT_SYSTEM);
    let analysis = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Content analysis failed: {e}")))?;

    Ok(parse_content(&analysis))
}

pub fn parse_content(analysis: &str) -> ContentAnalysis {
    ContentAnalysis {
        strengths: extract_list_section(analysis, "Strengths"),
        improvements: extract_list_section(analysis, "Improvements"),
        achievements: extract_list_section(analysis, "Achievements"),
        keywords: extract_list_section(analysis, "Keywords"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_sections_are_read() {
        let reply = "Strengths:\n- Clear impact\n\nImprovements:\n- Add summary\n\n\
                     Achievements:\n- Cut p99 latency 40%\n\nKeywords:\nRust\nTokio";
        let content = parse_content(reply);
        assert_eq!(content.strengths, vec!["- Clear impact"]);
        assert_eq!(content.improvements, vec!["- Add summary"]);
        assert_eq!(content.achievements, vec!["- Cut p99 latency 40%"]);
        assert_eq!(content.keywords, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn test_prose_reply_degrades_to_empty_lists() {
        let content = parse_content("The resume is solid but could use more numbers.");
        assert!(content.strengths.is_empty());
        assert!(content.improvements.is_empty());
        assert!(content.achievements.is_empty());
        assert!(content.keywords.is_empty());
    }
}
