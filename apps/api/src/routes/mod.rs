pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::export::handlers as export;
use crate::jobs::handlers as jobs;
use crate::linkedin::handlers as linkedin;
use crate::reconcile::handlers as reconcile;
use crate::state::AppState;

/// Uploads above this size are rejected before extraction.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Documents & resume analysis
        .route(
            "/api/v1/documents/parse",
            post(analysis::handle_parse_document),
        )
        .route(
            "/api/v1/resume/analyze",
            post(analysis::handle_analyze_resume),
        )
        // Multi-provider analysis
        .route(
            "/api/v1/analysis/reconcile",
            post(reconcile::handle_reconcile),
        )
        .route(
            "/api/v1/linkedin/analyze",
            post(linkedin::handle_analyze_linkedin),
        )
        .route("/api/v1/jobs/search", post(jobs::handle_search_jobs))
        // Export
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        .route("/api/v1/export/xlsx", post(export::handle_export_xlsx))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::ResumeAnalyzer;
    use crate::config::AnalysisConfig;
    use crate::extraction::ocr::TesseractOcr;
    use crate::extraction::DocumentParser;
    use crate::linkedin::fetcher::UnavailableProfileFetcher;
    use crate::llm_client::testing::ScriptedProvider;
    use crate::llm_client::ChatProvider;
    use crate::reference::memory::InMemoryReferenceStore;
    use crate::reference::ReferenceStore;

    fn test_state() -> AppState {
        let openai: Arc<dyn ChatProvider> = Arc::new(ScriptedProvider::failing("openai"));
        let gemini: Arc<dyn ChatProvider> = Arc::new(ScriptedProvider::failing("gemini"));
        let references: Arc<dyn ReferenceStore> = Arc::new(InMemoryReferenceStore::default());
        let parser = DocumentParser::new(Arc::new(TesseractOcr::new("tesseract", "eng")));

        AppState {
            analyzer: ResumeAnalyzer::new(
                openai.clone(),
                references.clone(),
                parser.clone(),
                AnalysisConfig::default(),
            ),
            parser,
            openai,
            gemini,
            references,
            profile_fetcher: Arc::new(UnavailableProfileFetcher),
            job_sources: Arc::new(Vec::new()),
        }
    }

    async fn send(request: Request<Body>) -> Response {
        build_router(test_state()).oneshot(request).await.unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart_upload(uri: &str, content_type: &str, content: &str) -> Request<Body> {
        let boundary = "careerscope-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"resume\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {content}\r\n\
             --{boundary}--\r\n"
        );
        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["service"], "careerscope-api");
    }

    #[tokio::test]
    async fn test_unsupported_upload_is_bad_request() {
        let response = send(multipart_upload(
            "/api/v1/resume/analyze",
            "text/plain",
            "just text",
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "UNSUPPORTED_FILE_TYPE"
        );
    }

    #[tokio::test]
    async fn test_missing_file_field_is_validation_error() {
        let response = send(multipart_upload("/api/v1/documents/parse", "text/plain", "x")
            .map(|_| Body::from("--careerscope-test-boundary--\r\n")))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_unprocessable() {
        let response = send(multipart_upload(
            "/api/v1/documents/parse",
            crate::extraction::MIME_DOCX,
            "not a zip archive",
        ))
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "UNREADABLE_DOCUMENT"
        );
    }

    #[tokio::test]
    async fn test_reconcile_provider_failure_is_bad_gateway() {
        let response = send(post_json(
            "/api/v1/analysis/reconcile",
            json!({"text": "Rust engineer"}),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "Failed to analyze with AI services"
        );
    }

    #[tokio::test]
    async fn test_linkedin_without_fetcher_is_not_implemented() {
        let response = send(post_json(
            "/api/v1/linkedin/analyze",
            json!({"profile_url": "https://www.linkedin.com/in/jane-doe/"}),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn test_linkedin_invalid_url_is_bad_request() {
        let response = send(post_json(
            "/api/v1/linkedin/analyze",
            json!({"profile_url": "https://example.com/jane"}),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_job_search_without_sources_is_empty() {
        let response = send(post_json(
            "/api/v1/jobs/search",
            json!({"keywords": ["rust"]}),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_export_xlsx_is_attachment() {
        let response = send(post_json(
            "/api/v1/export/xlsx",
            json!({"title": "Skill Report", "data": [{"skill": "Rust"}]}),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"skill-report.xlsx\""
        );
    }

    #[tokio::test]
    async fn test_export_pdf_is_pdf() {
        let response = send(post_json(
            "/api/v1/export/pdf",
            json!({"title": "Resume Analysis", "data": {"overall_score": 82}}),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
