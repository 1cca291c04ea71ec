#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Check a problem-details error response and the retry header rules:
/// 503 carries `Retry-After`, nothing else does.
pub fn assert_problem(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
) {
    let problem = backend_test_support::problem_details::assert_problem_details_from_parts(
        status,
        headers,
        body,
        expected_code,
        expected_status,
        None,
    );
    assert!(
        problem.type_.starts_with("https://kingscore.app/errors/"),
        "type should follow the expected URL format"
    );

    let retry_after = headers.get("Retry-After");
    if expected_status == StatusCode::SERVICE_UNAVAILABLE {
        assert!(retry_after.is_some(), "503 responses must have Retry-After");
    } else {
        assert!(
            retry_after.is_none(),
            "{expected_status} responses must not have Retry-After"
        );
    }
}
