//! Error body decoder module
//!
//! Supports: single error object, list of error objects, unstructured bodies
//!
//! # Overview
//!
//! The API reports failures either as one JSON error object or as a JSON
//! array of them. The decoder turns whichever shape arrives into a
//! [`RestError`](crate::error::RestError). Decoding never fails: a body that
//! matches neither shape is kept verbatim as the error message.

mod decoders;
mod types;

pub use decoders::decode_error_body;
pub use types::{ErrorResponse, ErrorResponses};

#[cfg(test)]
mod tests;
