//! Tests for error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::not_found("missing").try_with_trace_id(" ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields(expected_trace_id: String) {
    let bare = serde_json::to_value(Error::not_found("user not found")).expect("serialises");
    assert_eq!(bare, json!({ "code": "not_found", "message": "user not found" }));

    let full = Error::invalid_request("invalid user ID")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "id" }));
    let value = serde_json::to_value(full).expect("serialises");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "invalid user ID",
            "traceId": expected_trace_id,
            "details": { "field": "id" },
        })
    );
}

#[rstest]
#[tokio::test]
async fn deserialisation_ignores_ambient_trace_id(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid UUID");
    let error: Error = TraceId::scope(trace_id, async {
        serde_json::from_value(json!({ "code": "not_found", "message": "gone" }))
            .expect("valid payload")
    })
    .await;
    assert!(error.trace_id().is_none());
}

#[rstest]
fn deserialisation_rejects_blank_message() {
    let result: Result<Error, _> =
        serde_json::from_value(json!({ "code": "not_found", "message": "" }));
    assert!(result.is_err());
}
