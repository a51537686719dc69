//! Tests for `NormalizedOutcome` and `FullResponse`.

use serde_json::json;

use crate::transport::HttpResponse;

use super::{FullResponse, NormalizedOutcome};

fn response(status: u16, body: &str) -> HttpResponse {
    let mut headers = http::HeaderMap::new();
    headers.insert("x-request-id", http::HeaderValue::from_static("abc"));
    headers.append("set-cookie", http::HeaderValue::from_static("a=1"));
    headers.append("set-cookie", http::HeaderValue::from_static("b=2"));
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        headers,
        body.as_bytes().to_vec(),
    )
}

#[test]
fn full_response_parses_body_and_keeps_raw_text() {
    let full = FullResponse::from(response(201, r#"{"id": 9}"#));

    assert_eq!(full.status_code, 201);
    assert_eq!(full.data, json!({"id": 9}));
    assert_eq!(full.body, r#"{"id": 9}"#);
    assert_eq!(full.header("x-request-id"), Some("abc"));
}

#[test]
fn full_response_serializes_with_camel_case_and_joined_headers() {
    let full = FullResponse::from(response(500, "oops"));

    assert_eq!(
        serde_json::to_value(&full).unwrap(),
        json!({
            "statusCode": 500,
            "data": "oops",
            "body": "oops",
            "headers": {"set-cookie": "a=1, b=2", "x-request-id": "abc"}
        })
    );
}

#[test]
fn body_outcome_serializes_as_bare_data() {
    let outcome = NormalizedOutcome::Body(json!({"foo": "bar"}));

    assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({"foo": "bar"}));
    assert_eq!(outcome.status_code(), None);
}

#[test]
fn data_accessors_work_in_both_shapes() {
    let body = NormalizedOutcome::Body(json!(1));
    let full = NormalizedOutcome::Full(FullResponse::from(response(200, "2")));

    assert_eq!(body.data(), &json!(1));
    assert_eq!(full.data(), &json!(2));
    assert_eq!(full.status_code(), Some(200));
    assert_eq!(full.into_data(), json!(2));
}
