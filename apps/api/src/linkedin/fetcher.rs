//! Profile fetching capability. No scraping backend ships with the service; deployments
//! that have licensed profile access plug in their own `ProfileFetcher`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("LinkedIn profile fetching is not available")]
    NotAvailable,
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::NotAvailable(err.to_string())
    }
}

#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Returns the raw profile document for `username`.
    async fn fetch(&self, username: &str) -> Result<Value, FetchError>;
}

/// Default fetcher: always `NotAvailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProfileFetcher;

#[async_trait]
impl ProfileFetcher for UnavailableProfileFetcher {
    async fn fetch(&self, _username: &str) -> Result<Value, FetchError> {
        Err(FetchError::NotAvailable)
    }
}
