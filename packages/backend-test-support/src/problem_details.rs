//! Assertions for RFC 7807 error bodies.
//!
//! The backend renders every failure as `application/problem+json` with a
//! machine code and a `trace_id` that mirrors the `x-trace-id` header.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's wire shape, kept separate on purpose so the
/// tests notice when the contract drifts.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert the response is a problem document with the given status and code.
///
/// Returns the parsed body so callers can make further assertions.
pub async fn assert_problem<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike {
    assert_eq!(resp.status(), expected_status, "unexpected HTTP status");

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/problem+json");

    let header_trace = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8")
        .to_string();

    let body = actix_web::test::read_body(resp).await;
    let problem: ProblemDetailsLike =
        serde_json::from_slice(&body).expect("body should be valid ProblemDetails JSON");

    assert_eq!(problem.trace_id, header_trace, "trace_id must match x-trace-id");
    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(!problem.title.is_empty());
    problem
}

/// Like [`assert_problem`] and additionally checks the human-readable detail.
pub async fn assert_problem_detail<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
    detail_contains: &str,
) -> ProblemDetailsLike {
    let problem = assert_problem(resp, expected_status, expected_code).await;
    assert!(
        problem.detail.contains(detail_contains),
        "expected detail to contain '{}', got '{}'",
        detail_contains,
        problem.detail
    );
    problem
}
