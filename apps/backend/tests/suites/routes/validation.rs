//! Request validation: bad ids, bad bodies, out-of-range configuration.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::test_support::create_test_app_builder;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::json;

use crate::support::memory_state;

#[actix_web::test]
async fn create_rejects_out_of_range_configuration() {
    let app = create_test_app_builder(memory_state(10).await).build().await;

    let cases = [
        (json!({ "maxTries": 4 }), "INVALID_MAX_TRIES"),
        (json!({ "maxTries": 8 }), "INVALID_MAX_TRIES"),
        (json!({ "maxTries": -3 }), "INVALID_MAX_TRIES"),
        (json!({ "wordSize": 3 }), "INVALID_WORD_SIZE"),
        (json!({ "wordSize": 7 }), "INVALID_WORD_SIZE"),
        (json!({ "mode": "classic", "maxTries": 7 }), "INVALID_MAX_TRIES"),
        (json!({ "mode": "classic", "wordSize": 4 }), "INVALID_WORD_SIZE"),
    ];

    for (body, code) in cases {
        let req = test::TestRequest::post()
            .uri("/gamestates")
            .set_json(&body)
            .to_request();
        assert_problem_details_from_service_response(
            test::call_service(&app, req).await,
            code,
            StatusCode::BAD_REQUEST,
            None,
        )
        .await;
    }
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = create_test_app_builder(memory_state(11).await).build().await;

    let req = test::TestRequest::post()
        .uri("/gamestates")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"maxTries": "#)
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/gamestates")
        .set_json(json!({ "mode": "marathon" }))
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn bad_game_ids() {
    let app = create_test_app_builder(memory_state(12).await).build().await;

    for uri in ["/gamestates/abc", "/gamestates/0", "/gamestates/-5"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        assert_problem_details_from_service_response(
            test::call_service(&app, req).await,
            "INVALID_GAME_ID",
            StatusCode::BAD_REQUEST,
            None,
        )
        .await;
    }

    let req = test::TestRequest::get().uri("/gamestates/999").to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("999"),
    )
    .await;
}

#[actix_web::test]
async fn guess_requires_id_and_word() {
    let app = create_test_app_builder(memory_state(13).await).build().await;

    let req = test::TestRequest::put()
        .uri("/gamestates")
        .set_json(json!({ "guessWord": "CRANE" }))
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "INVALID_GAME_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/gamestates")
        .set_json(json!({ "id": 1, "guessWord": "  " }))
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("guessWord"),
    )
    .await;

    // Existence is checked before the word.
    let req = test::TestRequest::put()
        .uri("/gamestates")
        .set_json(json!({ "id": 42, "guessWord": "QZXWV" }))
        .to_request();
    assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
}
