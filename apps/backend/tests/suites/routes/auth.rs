use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::common::assert_problem;
use crate::support::factory::bearer;
use crate::support::test_state::{state_without_db, test_security};
use crate::support::{create_test_app, sqlite_state};

#[actix_web::test]
async fn missing_bearer_is_401() {
    let app = create_test_app(sqlite_state().await).build().await;

    let req = test::TestRequest::get().uri("/api/games").to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    assert_problem(
        status,
        &headers,
        &body,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
    );
}

#[actix_web::test]
async fn token_signed_with_another_secret_is_401() {
    let app = create_test_app(sqlite_state().await).build().await;
    let foreign = kingscore::state::security_config::SecurityConfig::new("some-other-secret");

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(("Authorization", bearer(&foreign, "sub-x", None)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    assert_problem(
        status,
        &headers,
        &body,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_INVALID_JWT",
    );
}

#[actix_web::test]
async fn me_creates_profile_on_first_call() {
    let app = create_test_app(sqlite_state().await).build().await;
    let auth = bearer(&test_security(), "sub-ada", Some("Ada"));

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(("Authorization", auth.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["sub"], "sub-ada");
        assert_eq!(body["displayName"], "Ada");
        ids.push(body["id"].as_i64().expect("id should be numeric"));
    }
    assert_eq!(ids[0], ids[1]);
}

#[actix_web::test]
async fn authenticated_request_without_db_is_503() {
    let app = create_test_app(state_without_db().await).build().await;

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(("Authorization", bearer(&test_security(), "sub-1", None)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    assert_problem(
        status,
        &headers,
        &body,
        StatusCode::SERVICE_UNAVAILABLE,
        "DB_UNAVAILABLE",
    );
}
