//! Tests for error body decoding

use super::*;
use pretty_assertions::assert_eq;

// ============================================================================
// Single Error Tests
// ============================================================================

#[test]
fn test_decode_single_error() {
    let body = br#"{"errorCode":"E1","property":"p","errorMessage":"bad"}"#;
    let err = decode_error_body(body);

    assert_eq!(err.http_code, 0);
    assert_eq!(err.message, "bad");
    assert_eq!(err.application_errors.len(), 1);

    let app_err = &err.application_errors[0];
    assert_eq!(app_err.code, "E1");
    assert_eq!(app_err.property, "p");
    assert_eq!(app_err.message, "[Error: Property: p, bad]");
    assert_eq!(app_err.additional_info, "");
}

#[test]
fn test_decode_single_error_with_more_info() {
    let body = br#"{
        "errorCode": "IC-LAYER2-4021",
        "property": "vlan",
        "errorMessage": "VLAN already in use",
        "moreInfo": "https://docs.example.com/errors/4021"
    }"#;
    let err = decode_error_body(body);

    let app_err = &err.application_errors[0];
    assert_eq!(app_err.code, "IC-LAYER2-4021");
    assert_eq!(app_err.additional_info, "https://docs.example.com/errors/4021");
}

#[test]
fn test_decode_single_error_missing_optional_fields() {
    let err = decode_error_body(br#"{"errorCode":"E9"}"#);
    assert_eq!(err.application_errors.len(), 1);
    assert_eq!(err.application_errors[0].code, "E9");
    assert_eq!(err.application_errors[0].message, "[Error: Property: , ]");
}

#[test]
fn test_decode_single_error_without_code() {
    let err = decode_error_body(br#"{"property":"p","errorMessage":"bad"}"#);

    assert_eq!(err.message, "bad");
    assert_eq!(err.application_errors.len(), 1);
    assert_eq!(err.application_errors[0].code, "");
    assert_eq!(err.application_errors[0].property, "p");
    assert_eq!(err.application_errors[0].message, "[Error: Property: p, bad]");
}

#[test]
fn test_decode_null_body_as_empty_error_object() {
    let err = decode_error_body(b"null");
    assert_eq!(err.message, "");
    assert_eq!(err.application_errors.len(), 1);
    assert_eq!(err.application_errors[0].message, "[Error: Property: , ]");
}

// ============================================================================
// Multiple Error Tests
// ============================================================================

#[test]
fn test_decode_error_list() {
    let body = br#"[
        {"errorCode":"E1","property":"name","errorMessage":"is required"},
        {"errorCode":"E2","property":"size","errorMessage":"must be positive"},
        {"errorCode":"E3","property":"type","errorMessage":"unknown"}
    ]"#;
    let err = decode_error_body(body);

    assert_eq!(err.application_errors.len(), 3);
    assert_eq!(
        err.message,
        "Multiple errors occurred: [Error 1: Property: name, is required] \
         [Error 2: Property: size, must be positive] [Error 3: Property: type, unknown]"
    );

    let codes: Vec<&str> = err
        .application_errors
        .iter()
        .map(|e| e.code.as_str())
        .collect();
    assert_eq!(codes, vec!["E1", "E2", "E3"]);

    // Per-entry messages are not decorated
    assert_eq!(err.application_errors[1].message, "must be positive");
    assert_eq!(err.application_errors[1].property, "size");
}

#[test]
fn test_decode_error_list_segments_match_count() {
    let body = br#"[
        {"errorCode":"A","property":"x","errorMessage":"one"},
        {"errorCode":"B","property":"y","errorMessage":"two"}
    ]"#;
    let err = decode_error_body(body);

    for k in 1..=2 {
        assert!(err.message.contains(&format!("[Error {k}: ")));
    }
    assert!(!err.message.contains("[Error 3: "));
}

#[test]
fn test_decode_empty_error_list() {
    let err = decode_error_body(b"[]");
    assert!(err.application_errors.is_empty());
    assert_eq!(err.message, "Multiple errors occurred:");
}

// ============================================================================
// Unstructured Error Tests
// ============================================================================

#[test]
fn test_decode_non_json_body() {
    let err = decode_error_body(b"Internal Server Error");
    assert!(err.application_errors.is_empty());
    assert_eq!(err.message, "Internal Server Error");
}

#[test]
fn test_decode_unrelated_json_object() {
    let body = br#"{"message":"gateway timeout"}"#;
    let err = decode_error_body(body);

    // Unknown keys are ignored, so this is an error object with empty fields
    assert_eq!(err.message, "");
    assert_eq!(err.application_errors.len(), 1);
    assert_eq!(err.application_errors[0].code, "");
    assert_eq!(err.application_errors[0].message, "[Error: Property: , ]");
}

#[test]
fn test_decode_object_with_mistyped_field() {
    let body = br#"{"errorCode":5,"errorMessage":"bad"}"#;
    let err = decode_error_body(body);
    assert!(err.application_errors.is_empty());
    assert_eq!(err.message, r#"{"errorCode":5,"errorMessage":"bad"}"#);
}

#[test]
fn test_decode_array_of_strings() {
    let err = decode_error_body(br#"["E1","p"]"#);
    assert!(err.application_errors.is_empty());
    assert_eq!(err.message, r#"["E1","p"]"#);
}

#[test]
fn test_decode_scalar_json_body() {
    let err = decode_error_body(b"42");
    assert!(err.application_errors.is_empty());
    assert_eq!(err.message, "42");
}

#[test]
fn test_decode_empty_body() {
    let err = decode_error_body(b"");
    assert!(err.application_errors.is_empty());
    assert_eq!(err.message, "");
}

#[test]
fn test_decode_invalid_utf8_body() {
    let err = decode_error_body(&[0x66, 0x6f, 0xff, 0x6f]);
    assert!(err.application_errors.is_empty());
    assert_eq!(err.message, "fo\u{fffd}o");
}
