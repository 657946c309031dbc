//! Pagination configuration types and traits

use crate::types::StringMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Page-number pagination settings.
///
/// Field names refer to keys of the decoded response; parameter names are
/// query parameters sent with every page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Response field holding the total number of elements
    pub total_count_field: String,
    /// Response field holding the elements of the page
    pub content_field: String,
    /// Query parameter carrying the page size
    pub size_param: String,
    /// Query parameter carrying the page number
    pub page_param: String,
    /// Number of the first page as counted by the server (usually 0 or 1)
    pub first_page_number: i64,
    /// Extra query parameters sent with every page request
    pub additional_params: StringMap,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            total_count_field: "TotalCount".to_string(),
            content_field: "Content".to_string(),
            size_param: "size".to_string(),
            page_param: "page".to_string(),
            first_page_number: 1,
            additional_params: StringMap::new(),
        }
    }
}

impl PagingConfig {
    /// Set the total count field name
    #[must_use]
    pub fn total_count_field(mut self, name: impl Into<String>) -> Self {
        self.total_count_field = name.into();
        self
    }

    /// Set the content field name
    #[must_use]
    pub fn content_field(mut self, name: impl Into<String>) -> Self {
        self.content_field = name.into();
        self
    }

    /// Set the page size query parameter name
    #[must_use]
    pub fn size_param(mut self, name: impl Into<String>) -> Self {
        self.size_param = name.into();
        self
    }

    /// Set the page number query parameter name
    #[must_use]
    pub fn page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    /// Set the number of the first page
    #[must_use]
    pub fn first_page_number(mut self, number: i64) -> Self {
        self.first_page_number = number;
        self
    }

    /// Replace the additional query parameters
    #[must_use]
    pub fn additional_params(mut self, params: StringMap) -> Self {
        self.additional_params = params;
        self
    }

    /// Add one additional query parameter
    #[must_use]
    pub fn additional_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_params.insert(key.into(), value.into());
        self
    }
}

/// Offset/limit pagination settings.
///
/// The total count lives in a nested metadata object:
/// `{"data": [...], "pagination": {"total": 6, ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetPagingConfig {
    /// Response field holding the elements of the page
    pub data_field: String,
    /// Response field holding the pagination metadata object
    pub pagination_field: String,
    /// Field of the metadata object holding the total number of elements
    pub total_field: String,
    /// Query parameter carrying the page size
    pub limit_param: String,
    /// Query parameter carrying the offset of the first element
    pub offset_param: String,
    /// Extra query parameters sent with every page request
    pub additional_params: StringMap,
}

impl Default for OffsetPagingConfig {
    fn default() -> Self {
        Self {
            data_field: "data".to_string(),
            pagination_field: "pagination".to_string(),
            total_field: "total".to_string(),
            limit_param: "limit".to_string(),
            offset_param: "offset".to_string(),
            additional_params: StringMap::new(),
        }
    }
}

impl OffsetPagingConfig {
    /// Set the data field name
    #[must_use]
    pub fn data_field(mut self, name: impl Into<String>) -> Self {
        self.data_field = name.into();
        self
    }

    /// Set the pagination metadata field name
    #[must_use]
    pub fn pagination_field(mut self, name: impl Into<String>) -> Self {
        self.pagination_field = name.into();
        self
    }

    /// Set the total field name within the metadata object
    #[must_use]
    pub fn total_field(mut self, name: impl Into<String>) -> Self {
        self.total_field = name.into();
        self
    }

    /// Set the limit query parameter name
    #[must_use]
    pub fn limit_param(mut self, name: impl Into<String>) -> Self {
        self.limit_param = name.into();
        self
    }

    /// Set the offset query parameter name
    #[must_use]
    pub fn offset_param(mut self, name: impl Into<String>) -> Self {
        self.offset_param = name.into();
        self
    }

    /// Replace the additional query parameters
    #[must_use]
    pub fn additional_params(mut self, params: StringMap) -> Self {
        self.additional_params = params;
        self
    }

    /// Add one additional query parameter
    #[must_use]
    pub fn additional_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_params.insert(key.into(), value.into());
        self
    }
}

/// A response type that knows its own total count and content.
///
/// Implementing this for a typed page lets the traversal read pages without
/// any field-name lookup.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct DevicePage {
///     #[serde(rename = "totalCount")]
///     total_count: i64,
///     content: Vec<Device>,
/// }
///
/// impl Paginated for DevicePage {
///     type Item = Device;
///     fn total_count(&self) -> i64 { self.total_count }
///     fn into_content(self) -> Vec<Device> { self.content }
/// }
/// ```
pub trait Paginated: DeserializeOwned + Send + 'static {
    /// Element type of the collection
    type Item;

    /// Total number of elements in the collection as reported by the server
    fn total_count(&self) -> i64;

    /// Elements carried by this page, in server order
    fn into_content(self) -> Vec<Self::Item>;
}
