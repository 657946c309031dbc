//! Page readers
//!
//! A reader pulls the total count and the content out of one decoded page.
//! Two strategies are provided:
//! - [`FieldReader`] decodes pages as JSON and looks fields up by name
//! - [`TypedReader`] decodes pages into a [`Paginated`] type

use super::extract::{extract_path, extract_sequence, FieldKind};
use super::types::{OffsetPagingConfig, Paginated, PagingConfig};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::marker::PhantomData;

/// Reads total count and content from a decoded page
pub trait PageReader {
    /// Container each response body is decoded into
    type Page: DeserializeOwned + Send + 'static;
    /// Element type of the collection
    type Item;

    /// Total number of elements reported by the page
    fn total_count(&self, page: &Self::Page) -> Result<i64>;

    /// Elements of the page, in server order
    fn content(&self, page: Self::Page) -> Result<Vec<Self::Item>>;
}

// ============================================================================
// Field Reader
// ============================================================================

/// Field-name based reader over JSON pages
#[derive(Debug, Clone)]
pub struct FieldReader<T> {
    /// Path to the total count, one entry per nesting level
    total_path: Vec<String>,
    /// Field holding the page elements
    content_field: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> FieldReader<T> {
    /// Create a reader from a total count path and a content field
    pub fn new(total_path: Vec<String>, content_field: impl Into<String>) -> Self {
        Self {
            total_path,
            content_field: content_field.into(),
            _item: PhantomData,
        }
    }

    /// Reader for page-number responses: top-level total and content
    pub fn page_number(config: &PagingConfig) -> Self {
        Self::new(
            vec![config.total_count_field.clone()],
            config.content_field.clone(),
        )
    }

    /// Reader for offset responses: total nested in the pagination object
    pub fn offset(config: &OffsetPagingConfig) -> Self {
        Self::new(
            vec![config.pagination_field.clone(), config.total_field.clone()],
            config.data_field.clone(),
        )
    }
}

impl<T: DeserializeOwned> PageReader for FieldReader<T> {
    type Page = JsonValue;
    type Item = T;

    fn total_count(&self, page: &JsonValue) -> Result<i64> {
        let path: Vec<&str> = self.total_path.iter().map(String::as_str).collect();
        let total = extract_path(page, &path, FieldKind::Integer)?;
        Ok(total.as_i64().unwrap_or_default())
    }

    fn content(&self, page: JsonValue) -> Result<Vec<T>> {
        extract_sequence(&page, &self.content_field)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::deserialize(item).map_err(|source| Error::ContentItem {
                    field: self.content_field.clone(),
                    index,
                    source,
                })
            })
            .collect()
    }
}

// ============================================================================
// Typed Reader
// ============================================================================

/// Reader for pages implementing [`Paginated`]
#[derive(Debug, Clone, Copy)]
pub struct TypedReader<P> {
    _page: PhantomData<fn() -> P>,
}

impl<P> TypedReader<P> {
    /// Create a typed reader
    pub fn new() -> Self {
        Self { _page: PhantomData }
    }
}

impl<P> Default for TypedReader<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Paginated> PageReader for TypedReader<P> {
    type Page = P;
    type Item = P::Item;

    fn total_count(&self, page: &P) -> Result<i64> {
        Ok(page.total_count())
    }

    fn content(&self, page: P) -> Result<Vec<P::Item>> {
        Ok(page.into_content())
    }
}
