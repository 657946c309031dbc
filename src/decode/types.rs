//! Wire types for API error bodies

use serde::{Deserialize, Serialize};

/// A single error object as sent by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Short error identifier
    #[serde(default)]
    pub error_code: String,
    /// Property the error refers to
    #[serde(default)]
    pub property: String,
    /// Human-readable description
    #[serde(default)]
    pub error_message: String,
    /// Optional extra details
    #[serde(default)]
    pub more_info: String,
}

/// A list of error objects
pub type ErrorResponses = Vec<ErrorResponse>;
