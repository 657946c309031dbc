//! Page fetching seam between the HTTP client and the pagination engine

use super::client::{Client, RequestConfig};
use crate::error::Result;
use crate::types::StringMap;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Fetches one page of a collection.
///
/// Issues a GET against `path` with `query` and decodes the response body
/// into `P`. Transport failures and non-2xx responses are returned as errors.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page<P>(&self, path: &str, query: &StringMap) -> Result<P>
    where
        P: DeserializeOwned + Send;
}

#[async_trait]
impl PageFetcher for Client {
    async fn fetch_page<P>(&self, path: &str, query: &StringMap) -> Result<P>
    where
        P: DeserializeOwned + Send,
    {
        let config = RequestConfig::new().queries(query.clone());
        self.execute(Method::GET, path, config).await
    }
}
