//! Resume analysis pipeline. Orchestrates the full upload → score flow.
//!
//! Flow: extract text → LLM clean → {skills, content, ATS, market fit} concurrently →
//!       aggregate scores → {recommendations, insights} concurrently.
//!
//! Any stage failure aborts the whole run. The cause is logged and the caller only
//! sees `AnalysisFailed`. Unsupported uploads are rejected before any network call.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::analysis::advice::{generate_insights, generate_recommendations};
use crate::analysis::ats::analyze_ats;
use crate::analysis::content::analyze_content;
use crate::analysis::market_fit::analyze_market_fit;
use crate::analysis::models::ResumeAnalysis;
use crate::analysis::prompts::CLEAN_PROMPT_TEMPLATE;
use crate::analysis::scoring::calculate_scores;
use crate::analysis::skills::analyze_skills;
use crate::config::AnalysisConfig;
use crate::errors::AppError;
use crate::extraction::{DocumentParser, FileKind};
use crate::llm_client::{ChatProvider, CompletionRequest};
use crate::reference::ReferenceStore;

pub const ANALYSIS_FAILED: &str = "Failed to analyze resume";

#[derive(Clone)]
pub struct ResumeAnalyzer {
    llm: Arc<dyn ChatProvider>,
    references: Arc<dyn ReferenceStore>,
    parser: DocumentParser,
    config: AnalysisConfig,
}

impl ResumeAnalyzer {
    pub fn new(
        llm: Arc<dyn ChatProvider>,
        references: Arc<dyn ReferenceStore>,
        parser: DocumentParser,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            llm,
            references,
            parser,
            config,
        }
    }

    /// Analyzes an uploaded file.
    pub async fn analyze_upload(
        &self,
        bytes: Bytes,
        mime: &str,
    ) -> Result<ResumeAnalysis, AppError> {
        FileKind::from_mime(mime)?;

        let document = self.parser.parse(bytes, mime).await.map_err(|e| {
            error!("Error analyzing resume: text extraction failed: {e}");
            AppError::AnalysisFailed(ANALYSIS_FAILED.to_string())
        })?;

        self.analyze_text(&document.text).await
    }

    /// Analyzes already-extracted resume text.
    pub async fn analyze_text(&self, raw_text: &str) -> Result<ResumeAnalysis, AppError> {
        self.run(raw_text).await.map_err(|e| {
            error!("Error analyzing resume: {e}");
            AppError::AnalysisFailed(ANALYSIS_FAILED.to_string())
        })
    }

    async fn run(&self, raw_text: &str) -> Result<ResumeAnalysis, AppError> {
        let llm = self.llm.as_ref();
        let references = self.references.as_ref();

        // Step 1: the cleaned text is canonical for every later stage
        let text = self.clean_text(raw_text).await?;
        info!(
            "Resume text cleaned ({} → {} chars) via {}",
            raw_text.len(),
            text.len(),
            llm.name()
        );

        // Step 2: independent analyses
        let (skills, content, ats_report, market_fit) = tokio::try_join!(
            analyze_skills(llm, references, &text, self.config.skills_demand_limit),
            analyze_content(llm, &text),
            analyze_ats(llm, &text, self.config.ats_fallback_score),
            analyze_market_fit(llm, references, &text, self.config.job_roles_limit),
        )?;

        // Step 3: aggregate
        let (overall_score, scores) = calculate_scores(
            &skills,
            &content,
            ats_report.ats.compatibility,
            ats_report.format_score,
            &self.config.weights,
        );
        info!("Resume scored {overall_score}/100 ({scores:?})");

        // Step 4: follow-ups with derived context
        let (recommendations, ai_insights) = tokio::try_join!(
            generate_recommendations(llm, &text, &skills, &market_fit),
            generate_insights(llm, &text, &skills, &market_fit),
        )?;

        Ok(ResumeAnalysis {
            id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            overall_score,
            scores,
            skills,
            content,
            ats: ats_report.ats,
            market_fit,
            recommendations,
            ai_insights,
        })
    }

    async fn clean_text(&self, raw_text: &str) -> Result<String, AppError> {
        let prompt = CLEAN_PROMPT_TEMPLATE.replace("{resume_text}", raw_text);
        self.llm
            .complete(&CompletionRequest::new(prompt, 1500))
            .await
            .map_err(|e| AppError::Llm(format!("Text cleaning failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use async_trait::async_trait;

    use super::*;
    use crate::extraction::ocr::{OcrEngine, OcrError};
    use crate::extraction::MIME_DOCX;
    use crate::llm_client::testing::ScriptedProvider;
    use crate::llm_client::LlmError;
    use crate::reference::memory::InMemoryReferenceStore;

    struct UnusedOcr;

    #[async_trait]
    impl OcrEngine for UnusedOcr {
        fn language(&self) -> &str {
            "eng"
        }

        async fn recognize(&self, _image: &Path) -> Result<String, OcrError> {
            Err(OcrError::Recognition("not used in these tests".to_string()))
        }
    }

    /// Canonical text the "clean" call returns. The analysis calls echo it back, so
    /// every section the pipeline reports must come from here.
    const CANONICAL: &str = "Jane Doe\nBackend Engineer\n\n\
        Technical and soft skills:\nRust\nPostgreSQL\n\n\
        Strengths:\n- Ships reliable services\n- Clear ownership\n\n\
        Improvements:\n- Add a summary\n\n\
        Missing critical skills:\n- Kubernetes\n- Terraform\n\n\
        Compatibility Score: 82\n\n\
        Roles:\n- Backend Engineer - 85%\n";

    fn scripted_llm() -> Arc<ScriptedProvider> {
        Arc::new(ScriptedProvider::new("test", |request| {
            let prompt = request.prompt.as_str();
            if prompt.starts_with("Create a career action plan") {
                Ok("Immediate:\n- Quantify impact\n\nShort-term:\n- Learn Kubernetes".to_string())
            } else if prompt.starts_with("Share career insights") {
                Ok("Insights:\n- Strong backend depth".to_string())
            } else {
                Ok(CANONICAL.to_string())
            }
        }))
    }

    fn analyzer(llm: Arc<dyn ChatProvider>, store: InMemoryReferenceStore) -> ResumeAnalyzer {
        ResumeAnalyzer::new(
            llm,
            Arc::new(store),
            DocumentParser::new(Arc::new(UnusedOcr)),
            AnalysisConfig::default(),
        )
    }

    fn resume_docx() -> Bytes {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
            zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(
                b"<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
                  <w:body><w:p><w:r><w:t>Jane Doe   Backend Engineer</w:t></w:r></w:p></w:body></w:document>",
            )
            .unwrap();
            zip.finish().unwrap();
        }
        Bytes::from(buf)
    }

    #[tokio::test]
    async fn test_upload_end_to_end_reflects_canonical_sections() {
        let llm = scripted_llm();
        let analyzer = analyzer(llm.clone(), InMemoryReferenceStore::default());

        let analysis = analyzer
            .analyze_upload(resume_docx(), MIME_DOCX)
            .await
            .unwrap();

        assert_eq!(
            analysis.content.strengths,
            vec!["- Ships reliable services", "- Clear ownership"]
        );
        let missing: Vec<&str> = analysis.skills.missing.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(missing, vec!["- Kubernetes", "- Terraform"]);
        for skill in &analysis.skills.missing {
            assert_eq!(skill.importance, 5);
            assert_eq!(
                skill.description,
                format!("{} is increasingly important in today's job market", skill.name)
            );
        }
        assert_eq!(analysis.ats.compatibility, 82);
        assert_eq!(analysis.market_fit.roles[0].title, "Backend Engineer");
        assert_eq!(analysis.recommendations.immediate, vec!["- Quantify impact"]);
        assert_eq!(analysis.ai_insights, vec!["- Strong backend depth"]);
        assert!(analysis.overall_score <= 100);

        // clean + 4 analyses + 2 follow-ups
        assert_eq!(llm.call_count(), 7);
        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("Jane Doe   Backend Engineer"));
    }

    #[tokio::test]
    async fn test_unsupported_upload_fails_before_any_llm_call() {
        let llm = scripted_llm();
        let analyzer = analyzer(llm.clone(), InMemoryReferenceStore::default());

        let result = analyzer
            .analyze_upload(Bytes::from_static(b"plain"), "text/plain")
            .await;

        assert!(matches!(result, Err(AppError::UnsupportedFileType(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_any_failing_stage_aborts_with_generic_error() {
        let llm = Arc::new(ScriptedProvider::new("test", |request| {
            if request.prompt.starts_with("Analyze this resume for ATS compatibility") {
                Err(LlmError::EmptyContent)
            } else {
                Ok(CANONICAL.to_string())
            }
        }));
        let analyzer = analyzer(llm, InMemoryReferenceStore::default());

        let result = analyzer.analyze_text("raw resume").await;
        match result {
            Err(AppError::AnalysisFailed(msg)) => assert_eq!(msg, ANALYSIS_FAILED),
            other => panic!("expected AnalysisFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreadable_document_is_generic_failure() {
        let analyzer = analyzer(scripted_llm(), InMemoryReferenceStore::default());
        let result = analyzer
            .analyze_upload(Bytes::from_static(b"not a zip"), MIME_DOCX)
            .await;
        assert!(matches!(result, Err(AppError::AnalysisFailed(_))));
    }
}
