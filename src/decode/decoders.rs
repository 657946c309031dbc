//! Error body decoding

use super::types::{ErrorResponse, ErrorResponses};
use crate::error::{ApplicationError, RestError};
use crate::types::JsonValue;
use std::fmt::Write;

/// Decode an error response body into a [`RestError`].
///
/// Any JSON object (or `null`) is read as a single error object, every
/// field being optional. A JSON array is read as a list of error objects.
/// Anything else, including objects with mistyped fields, is kept as the raw
/// body text.
///
/// The returned error has `http_code` set to 0; the caller knows the
/// response status and fills it in.
pub fn decode_error_body(body: &[u8]) -> RestError {
    let decoded = match serde_json::from_slice::<JsonValue>(body) {
        Ok(value @ (JsonValue::Object(_) | JsonValue::Null)) => {
            serde_json::from_value::<ErrorResponse>(value)
                .ok()
                .map(from_single)
        }
        Ok(value @ JsonValue::Array(_)) => serde_json::from_value::<ErrorResponses>(value)
            .ok()
            .map(from_list),
        _ => None,
    };

    decoded.unwrap_or_else(|| RestError {
        message: String::from_utf8_lossy(body).into_owned(),
        ..Default::default()
    })
}

fn from_single(resp: ErrorResponse) -> RestError {
    let detail = format!(
        "[Error: Property: {}, {}]",
        resp.property, resp.error_message
    );
    RestError {
        http_code: 0,
        message: resp.error_message,
        application_errors: vec![ApplicationError {
            code: resp.error_code,
            property: resp.property,
            message: detail,
            additional_info: resp.more_info,
        }],
    }
}

fn from_list(list: ErrorResponses) -> RestError {
    let mut message = String::from("Multiple errors occurred:");
    for (i, resp) in list.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(
            message,
            " [Error {}: Property: {}, {}]",
            i + 1,
            resp.property,
            resp.error_message
        );
    }

    let application_errors = list
        .into_iter()
        .map(|resp| ApplicationError {
            code: resp.error_code,
            property: resp.property,
            message: resp.error_message,
            additional_info: resp.more_info,
        })
        .collect();

    RestError {
        http_code: 0,
        message,
        application_errors,
    }
}
