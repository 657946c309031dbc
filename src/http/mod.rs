//! HTTP client module
//!
//! Provides the REST client that issues requests against a base URL,
//! decodes successful JSON bodies, and turns non-2xx responses into
//! structured [`RestError`](crate::error::RestError)s.
//!
//! # Features
//!
//! - **Base URL joining**: request paths are resolved against the configured base
//! - **Error decoding**: single and multiple application errors
//! - **Page fetching**: the [`PageFetcher`] seam used by the pagination engine

mod client;
mod fetcher;

pub use client::{Client, RequestConfig};
pub use fetcher::PageFetcher;
pub use reqwest::Method;
