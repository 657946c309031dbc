//! Error types for the paged REST client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Errors reported by the server itself are carried as a [`RestError`],
//! which keeps the HTTP status and every application sub-error.

use crate::pagination::FieldKind;
use std::fmt;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// The request never produced a usable response
    #[error("operation failed: {source}")]
    Transport {
        status: Option<u16>,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error(transparent)]
    Api(#[from] RestError),

    #[error("Failed to decode response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Extraction Errors
    // ============================================================================
    #[error("Page container must be a JSON object, found {found}")]
    Shape { found: &'static str },

    #[error("Field '{field}' not found in page")]
    FieldNotFound { field: String },

    #[error("Field '{field}' is {found}, expected {expected}")]
    KindMismatch {
        field: String,
        expected: FieldKind,
        found: &'static str,
    },

    #[error("Failed to decode element {index} of field '{field}': {source}")]
    ContentItem {
        field: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    /// HTTP status associated with this error, if any response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            Error::Api(err) => Some(err.http_code),
            Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-reported error, if this is one
    pub fn rest_error(&self) -> Option<&RestError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether this error was raised locally, without the server at fault.
    ///
    /// Misconfigured paging configs and caller bugs land here.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::InvalidArgument { .. }
                | Error::InvalidUrl(_)
                | Error::YamlParse(_)
                | Error::Io(_)
                | Error::Shape { .. }
                | Error::FieldNotFound { .. }
                | Error::KindMismatch { .. }
        )
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Wire-level errors
// ============================================================================

/// Error reported by the REST API
///
/// `Display` is written by hand since it lists every application error.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
pub struct RestError {
    /// HTTP status code of the response
    pub http_code: u16,
    /// General description of the failure
    pub message: String,
    /// One entry per application sub-error reported by the server
    pub application_errors: Vec<ApplicationError>,
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message: \"{}\", HTTPCode: {}, ApplicationErrors: ",
            self.message, self.http_code
        )?;
        for app_err in &self.application_errors {
            write!(f, "[{app_err}] ")?;
        }
        Ok(())
    }
}

/// Standardized application error
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error(
    "Code: \"{code}\", Property: \"{property}\", Message: \"{message}\", AdditionalInfo: \"{additional_info}\""
)]
pub struct ApplicationError {
    /// Short error identifier
    pub code: String,
    /// Name of the offending property, empty when not reported
    pub property: String,
    /// Textual description of the error
    pub message: String,
    /// Extra details such as a documentation link
    pub additional_info: String,
}
