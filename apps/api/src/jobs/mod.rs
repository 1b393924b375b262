//! Job postings aggregator over pluggable sources.
//!
//! No source ships with the service. Sources are queried concurrently, each batch is
//! capped at the query limit, then batches are concatenated in source order and
//! de-duplicated by company/title/location.

pub mod handlers;
pub mod models;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::errors::AppError;
use models::{JobPosting, JobQuery};

pub const FETCH_FAILED: &str = "Failed to fetch job postings";

#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, query: &JobQuery) -> anyhow::Result<Vec<JobPosting>>;
}

pub async fn fetch_job_postings(
    sources: &[Arc<dyn JobSource>],
    query: JobQuery,
) -> Result<Vec<JobPosting>, AppError> {
    info!(
        "Searching {} job sources for {:?} (location: {}, limit: {})",
        sources.len(),
        query.keywords,
        query.location.as_deref().unwrap_or("any"),
        query.limit
    );

    let limit = query.limit;
    let query = Arc::new(query);
    let mut set = JoinSet::new();
    for (index, source) in sources.iter().enumerate() {
        let source = Arc::clone(source);
        let query = Arc::clone(&query);
        set.spawn(async move {
            let result = source.fetch(&query).await;
            (index, source.name().to_string(), result)
        });
    }

    let mut batches: Vec<(usize, Vec<JobPosting>)> = Vec::with_capacity(sources.len());
    while let Some(joined) = set.join_next().await {
        let (index, name, result) = joined.map_err(|e| {
            error!("Error fetching job postings: source task failed: {e}");
            AppError::AnalysisFailed(FETCH_FAILED.to_string())
        })?;
        let mut postings = result.map_err(|e| {
            error!("Error fetching job postings from {name}: {e:#}");
            AppError::AnalysisFailed(FETCH_FAILED.to_string())
        })?;
        postings.truncate(limit);
        batches.push((index, postings));
    }

    batches.sort_by_key(|(index, _)| *index);
    let all: Vec<JobPosting> = batches.into_iter().flat_map(|(_, p)| p).collect();
    let total = all.len();
    let postings = deduplicate_jobs(all);
    info!(
        "Fetched {total} postings from {} sources, {} after dedup",
        sources.len(),
        postings.len()
    );

    Ok(postings)
}

/// Keeps the first posting per `company-title-location`.
pub fn deduplicate_jobs(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert(job.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn posting(id: &str, company: &str, title: &str, location: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            description: String::new(),
            requirements: vec![],
            salary: None,
            url: format!("https://jobs.example/{id}"),
            posted_date: "2024-01-01".to_string(),
        }
    }

    struct StaticSource {
        name: &'static str,
        delay_ms: u64,
        postings: Vec<JobPosting>,
    }

    #[async_trait]
    impl JobSource for StaticSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch(&self, _query: &JobQuery) -> anyhow::Result<Vec<JobPosting>> {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            Ok(self.postings.clone())
        }
    }

    /// Serves only postings whose title mentions a keyword and whose location matches.
    struct SearchableSource {
        postings: Vec<JobPosting>,
    }

    #[async_trait]
    impl JobSource for SearchableSource {
        fn name(&self) -> &str {
            "searchable"
        }

        async fn fetch(&self, query: &JobQuery) -> anyhow::Result<Vec<JobPosting>> {
            Ok(self
                .postings
                .iter()
                .filter(|p| {
                    let title = p.title.to_lowercase();
                    query.keywords.iter().any(|k| title.contains(&k.to_lowercase()))
                })
                .filter(|p| query.location.as_ref().map_or(true, |l| &p.location == l))
                .cloned()
                .collect())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl JobSource for BrokenSource {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch(&self, _query: &JobQuery) -> anyhow::Result<Vec<JobPosting>> {
            anyhow::bail!("upstream returned 500")
        }
    }

    fn query() -> JobQuery {
        JobQuery {
            keywords: vec!["rust".to_string()],
            location: None,
            limit: 10,
        }
    }

    #[test]
    fn test_dedup_keeps_first_posting() {
        let jobs = vec![
            posting("a", "Acme", "Engineer", "Berlin"),
            posting("b", "Acme", "Engineer", "Berlin"),
            posting("c", "Acme", "Engineer", "Paris"),
        ];
        let ids: Vec<String> = deduplicate_jobs(jobs).into_iter().map(|j| j.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_results_follow_source_order_not_completion_order() {
        let sources: Vec<Arc<dyn JobSource>> = vec![
            Arc::new(StaticSource {
                name: "slow",
                delay_ms: 30,
                postings: vec![posting("slow-1", "Acme", "Engineer", "Berlin")],
            }),
            Arc::new(StaticSource {
                name: "fast",
                delay_ms: 0,
                postings: vec![
                    posting("fast-1", "Acme", "Engineer", "Berlin"),
                    posting("fast-2", "Initech", "SRE", "Remote"),
                ],
            }),
        ];

        let ids: Vec<String> = fetch_job_postings(&sources, query())
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec!["slow-1", "fast-2"]);
    }

    #[tokio::test]
    async fn test_each_source_is_capped_at_limit() {
        let sources: Vec<Arc<dyn JobSource>> = vec![
            Arc::new(StaticSource {
                name: "chatty",
                delay_ms: 0,
                postings: (0..5)
                    .map(|i| posting(&format!("a{i}"), "Acme", &format!("Role {i}"), "Berlin"))
                    .collect(),
            }),
            Arc::new(StaticSource {
                name: "quiet",
                delay_ms: 0,
                postings: vec![posting("b0", "Initech", "SRE", "Remote")],
            }),
        ];
        let query = JobQuery {
            limit: 2,
            ..query()
        };

        let ids: Vec<String> = fetch_job_postings(&sources, query)
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec!["a0", "a1", "b0"]);
    }

    #[tokio::test]
    async fn test_sources_receive_keywords_and_location() {
        let sources: Vec<Arc<dyn JobSource>> = vec![Arc::new(SearchableSource {
            postings: vec![
                posting("rust-berlin", "Acme", "Rust Engineer", "Berlin"),
                posting("rust-paris", "Acme", "Rust Engineer", "Paris"),
                posting("go-berlin", "Initech", "Go Engineer", "Berlin"),
            ],
        })];
        let query = JobQuery {
            location: Some("Berlin".to_string()),
            ..query()
        };

        let ids: Vec<String> = fetch_job_postings(&sources, query)
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec!["rust-berlin"]);
    }

    #[tokio::test]
    async fn test_no_sources_yields_empty_list() {
        let postings = fetch_job_postings(&[], query()).await.unwrap();
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_failing_source_aborts() {
        let sources: Vec<Arc<dyn JobSource>> = vec![
            Arc::new(StaticSource {
                name: "ok",
                delay_ms: 0,
                postings: vec![posting("a", "Acme", "Engineer", "Berlin")],
            }),
            Arc::new(BrokenSource),
        ];

        match fetch_job_postings(&sources, query()).await {
            Err(AppError::AnalysisFailed(msg)) => assert_eq!(msg, FETCH_FAILED),
            other => panic!("expected AnalysisFailed, got {other:?}"),
        }
    }
}
