//! # Paged REST Client
//!
//! A REST client for JSON APIs with structured error decoding and a generic
//! pagination engine that walks every page of a collection endpoint.
//!
//! ## Features
//!
//! - **Structured errors**: single and multiple application errors decoded
//!   from error bodies, with the HTTP status attached
//! - **Page-number pagination**: `?size=N&page=K` style collections
//! - **Offset pagination**: `?limit=N&offset=K` style collections
//! - **Field-name or typed pages**: describe response shape by field names,
//!   or implement [`Paginated`](pagination::Paginated) on your own type
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paged_rest_client::{Client, PagingConfig, Result};
//!
//! #[derive(serde::Deserialize)]
//! struct Port { uuid: String, name: String }
//!
//! async fn list_ports() -> Result<Vec<Port>> {
//!     let mut client = Client::new("https://api.example.com/fabric/v4")?;
//!     client.set_page_size(50);
//!
//!     let config = PagingConfig::default()
//!         .total_count_field("totalCount")
//!         .content_field("content")
//!         .additional_param("state", "ACTIVE");
//!     client.get_paginated("/ports", &config).await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Client                            │
//! │  get_paginated()  get_offset_paginated()  execute()      │
//! └──────────────────────────────────────────────────────────┘
//!               │                                  │
//! ┌─────────────┴─────────────┐        ┌───────────┴──────────┐
//! │       Pagination          │        │        Decode        │
//! ├───────────────────────────┤        ├──────────────────────┤
//! │ Engine → PageFetcher      │        │ Single error object  │
//! │ Readers → Field extractor │        │ Error object list    │
//! │ PagingConfig / Offset     │        │ Unstructured body    │
//! └───────────────────────────┘        └──────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Error body decoding
pub mod decode;

/// HTTP client and page fetching
pub mod http;

/// Pagination engine and configuration
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{ApplicationError, Error, RestError, Result};
pub use http::{Client, RequestConfig};
pub use pagination::{OffsetPagingConfig, Paginated, PagingConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
