//! Every error leaves the stack as problem+json with a matching trace id.

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::test_support::create_test_app_builder;
use backend::{AppError, ErrorCode};
use backend_test_support::problem_details::assert_problem_details_from_service_response;

use crate::support::memory_state;

async fn fail_with(error: AppError) -> Result<HttpResponse, AppError> {
    Err(error)
}

#[actix_web::test]
async fn variants_render_as_problem_details() {
    let app = create_test_app_builder(memory_state(20).await)
        .with_routes(|cfg| {
            cfg.route(
                "/conflict",
                web::get().to(|| {
                    fail_with(AppError::conflict(ErrorCode::OptimisticLock, "stale version"))
                }),
            )
            .route(
                "/unavailable",
                web::get().to(|| fail_with(AppError::db_unavailable())),
            )
            .route(
                "/timeout",
                web::get().to(|| fail_with(AppError::timeout("query timed out"))),
            )
            .route(
                "/internal",
                web::get().to(|| fail_with(AppError::internal("boom"))),
            );
        })
        .build()
        .await;

    let cases = [
        ("/conflict", "OPTIMISTIC_LOCK", StatusCode::CONFLICT),
        ("/unavailable", "DB_UNAVAILABLE", StatusCode::SERVICE_UNAVAILABLE),
        ("/timeout", "DB_TIMEOUT", StatusCode::GATEWAY_TIMEOUT),
        ("/internal", "INTERNAL_ERROR", StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (path, code, status) in cases {
        let req = test::TestRequest::get().uri(path).to_request();
        let problem = assert_problem_details_from_service_response(
            test::call_service(&app, req).await,
            code,
            status,
            None,
        )
        .await;
        assert_eq!(problem.type_, format!("https://wordle.local/errors/{code}"));
        assert!(problem.invalid_guess_word.is_none());
    }
}

#[actix_web::test]
async fn inbound_trace_id_is_echoed() {
    let app = create_test_app_builder(memory_state(21).await).build().await;

    let req = test::TestRequest::get()
        .uri("/gamestates/77")
        .insert_header(("x-trace-id", "client-trace-123"))
        .to_request();
    let problem = assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    assert_eq!(problem.trace_id, "client-trace-123");
    assert_eq!(problem.title, "Game Not Found");
}

#[actix_web::test]
async fn successful_responses_carry_a_trace_header() {
    let app = create_test_app_builder(memory_state(22).await).build().await;

    let req = test::TestRequest::get().uri("/gamestates").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!trace.is_empty());
}
