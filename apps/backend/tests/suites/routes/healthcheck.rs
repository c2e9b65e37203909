use actix_web::http::StatusCode;
use actix_web::test;
use backend::test_support::create_test_app_builder;

use crate::common::read_json;
use crate::support::{memory_state, sqlite_state};

#[actix_web::test]
async fn root_banner() {
    let app = create_test_app_builder(memory_state(30).await).build().await;
    let req = test::TestRequest::get().uri("/").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["status"], "ok");
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn health_without_database() {
    let app = create_test_app_builder(memory_state(31).await).build().await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "memory");
    assert_eq!(body["migrations"], "n/a");
    assert!(body.get("db_error").is_none());
    assert!(body["app_version"].is_string());
}

#[actix_web::test]
async fn health_with_sqlite_reports_migrations() {
    let app = create_test_app_builder(sqlite_state(32).await).build().await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250901_000001_game_sessions");
}
