//! Pagination traversal
//!
//! Fetches every page of a collection one after another and flattens the
//! content into a single ordered list. The total count is read from the
//! first page only; traversal stops once the number of requested elements
//! reaches it. Any failure aborts the traversal and no partial result is
//! returned.

use super::strategies::{FieldReader, PageReader, TypedReader};
use super::types::{OffsetPagingConfig, Paginated, PagingConfig};
use crate::error::{Error, Result};
use crate::http::{Client, PageFetcher};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Convert the page size for comparison with the total
fn page_step(page_size: usize) -> Result<i64> {
    i64::try_from(page_size)
        .map_err(|_| Error::invalid_argument(format!("page size {page_size} is too large")))
}

/// A page size of 0 never advances past the first page
fn ensure_progress(step: i64, total: i64) -> Result<()> {
    if step == 0 && total > 0 {
        return Err(Error::invalid_argument(format!(
            "page size must be greater than 0 to traverse {total} elements"
        )));
    }
    Ok(())
}

/// Traverse a page-number paginated collection.
///
/// The first request carries only the size parameter so the server picks
/// its own first page; later requests count up from
/// `config.first_page_number + 1`.
///
/// A page size of 0 is accepted only when the first page reports no
/// elements; otherwise the traversal fails with
/// [`Error::InvalidArgument`] after that first request.
pub async fn fetch_page_numbered<F, R>(
    fetcher: &F,
    path: &str,
    page_size: usize,
    config: &PagingConfig,
    reader: &R,
) -> Result<Vec<R::Item>>
where
    F: PageFetcher,
    R: PageReader,
{
    let step = page_step(page_size)?;

    let mut query = config.additional_params.clone();
    query.insert(config.size_param.clone(), page_size.to_string());

    let page: R::Page = fetcher.fetch_page(path, &query).await?;
    let total = reader.total_count(&page)?;
    let mut items = reader.content(page)?;
    let mut fetched = step;
    debug!(
        "Fetched first page of {}: {} items, total {}",
        path,
        items.len(),
        total
    );

    ensure_progress(step, total)?;

    let mut page_number = config.first_page_number;
    while fetched < total {
        page_number = page_number.checked_add(1).ok_or_else(|| {
            Error::invalid_argument(format!("page number after {page_number} is out of range"))
        })?;
        query.insert(config.page_param.clone(), page_number.to_string());

        let page: R::Page = fetcher.fetch_page(path, &query).await?;
        let content = reader.content(page)?;
        debug!(
            "Fetched page {} of {}: {} items",
            page_number,
            path,
            content.len()
        );

        items.extend(content);
        fetched = fetched.saturating_add(step);
    }

    Ok(items)
}

/// Traverse an offset/limit paginated collection.
///
/// The first request carries only the limit parameter; later requests move
/// the offset forward by the page size. A page size of 0 is handled as in
/// [`fetch_page_numbered`].
pub async fn fetch_offset_paged<F, R>(
    fetcher: &F,
    path: &str,
    page_size: usize,
    config: &OffsetPagingConfig,
    reader: &R,
) -> Result<Vec<R::Item>>
where
    F: PageFetcher,
    R: PageReader,
{
    let step = page_step(page_size)?;

    let mut query = config.additional_params.clone();
    query.insert(config.limit_param.clone(), page_size.to_string());

    let page: R::Page = fetcher.fetch_page(path, &query).await?;
    let total = reader.total_count(&page)?;
    let mut items = reader.content(page)?;
    let mut offset = step;
    debug!(
        "Fetched first page of {}: {} items, total {}",
        path,
        items.len(),
        total
    );

    ensure_progress(step, total)?;

    while offset < total {
        query.insert(config.offset_param.clone(), offset.to_string());

        let page: R::Page = fetcher.fetch_page(path, &query).await?;
        let content = reader.content(page)?;
        debug!(
            "Fetched offset {} of {}: {} items",
            offset,
            path,
            content.len()
        );

        items.extend(content);
        // Past i64::MAX every element has been requested
        offset = offset.saturating_add(step);
    }

    Ok(items)
}

impl Client {
    /// Retrieve all elements of a page-number paginated collection.
    ///
    /// Pages are decoded as JSON; total count and content are looked up by
    /// the field names in `config`. Each element is decoded into `T`.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        config: &PagingConfig,
    ) -> Result<Vec<T>> {
        let reader = FieldReader::page_number(config);
        fetch_page_numbered(self, path, self.page_size(), config, &reader).await
    }

    /// Retrieve all elements of an offset/limit paginated collection.
    pub async fn get_offset_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        config: &OffsetPagingConfig,
    ) -> Result<Vec<T>> {
        let reader = FieldReader::offset(config);
        fetch_offset_paged(self, path, self.page_size(), config, &reader).await
    }

    /// Like [`Client::get_paginated`], reading pages through [`Paginated`].
    ///
    /// Only the parameter names of `config` are used.
    pub async fn get_paginated_as<P: Paginated>(
        &self,
        path: &str,
        config: &PagingConfig,
    ) -> Result<Vec<P::Item>> {
        let reader = TypedReader::<P>::new();
        fetch_page_numbered(self, path, self.page_size(), config, &reader).await
    }

    /// Like [`Client::get_offset_paginated`], reading pages through [`Paginated`].
    pub async fn get_offset_paginated_as<P: Paginated>(
        &self,
        path: &str,
        config: &OffsetPagingConfig,
    ) -> Result<Vec<P::Item>> {
        let reader = TypedReader::<P>::new();
        fetch_offset_paged(self, path, self.page_size(), config, &reader).await
    }
}
