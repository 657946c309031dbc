//! Pagination module
//!
//! Supports: Page Number, Offset/Limit
//!
//! # Overview
//!
//! The pagination module fetches every page of a collection endpoint and
//! returns the elements as one ordered list. Responses are described by
//! field names ([`PagingConfig`], [`OffsetPagingConfig`]) or by implementing
//! [`Paginated`] on a typed page.

mod engine;
mod extract;
mod strategies;
mod types;

pub use engine::{fetch_offset_paged, fetch_page_numbered};
pub use extract::{
    extract_field, extract_integer, extract_object, extract_path, extract_sequence, FieldKind,
};
pub use strategies::{FieldReader, PageReader, TypedReader};
pub use types::{OffsetPagingConfig, Paginated, PagingConfig};
