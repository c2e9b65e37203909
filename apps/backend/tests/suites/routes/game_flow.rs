//! End-to-end game flows over HTTP.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::test_support::create_test_app_builder;
use serde_json::{json, Value};

use crate::common::read_json;
use crate::support::{load, memory_state, sqlite_state, wrong_guess};

fn create(body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/gamestates")
        .set_json(body)
        .to_request()
}

fn guess(id: i64, word: &str) -> actix_http::Request {
    test::TestRequest::put()
        .uri("/gamestates")
        .set_json(json!({ "id": id, "guessWord": word }))
        .to_request()
}

#[actix_web::test]
async fn create_with_empty_body_uses_defaults() {
    let state = memory_state(1).await;
    let app = create_test_app_builder(state).build().await;

    let req = test::TestRequest::post().uri("/gamestates").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;

    assert_eq!(body["message"], "Game state created successfully");
    assert_eq!(body["id"], 1);
    assert_eq!(body["gameStatus"], "playing");
    assert_eq!(body["mode"], "speed");
    assert_eq!(body["maxTries"], 6);
    assert_eq!(body["wordSize"], 5);
    assert_eq!(body["tries"], json!([]));
    assert!(body.get("targetWord").is_none(), "target must stay hidden");
    assert!(body["createdAt"].is_string());
}

#[actix_web::test]
async fn ids_increase_per_game() {
    let state = memory_state(2).await;
    let app = create_test_app_builder(state).build().await;

    for expected in 1..=3 {
        let resp = test::call_service(&app, create(json!({}))).await;
        let body = read_json(resp, StatusCode::CREATED).await;
        assert_eq!(body["id"], expected);
    }

    let req = test::TestRequest::get().uri("/gamestates").to_request();
    let list = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[actix_web::test]
async fn correct_guess_wins_and_reveals_target() {
    let state = memory_state(3).await;
    let app = create_test_app_builder(state.clone()).build().await;

    let resp = test::call_service(&app, create(json!({ "wordSize": 4, "maxTries": 5 }))).await;
    let created = read_json(resp, StatusCode::CREATED).await;
    let id = created["id"].as_i64().unwrap();
    let target = load(&state, id).await.target_word;
    assert_eq!(target.len(), 4);

    let resp = test::call_service(&app, guess(id, &target.to_lowercase())).await;
    let body = read_json(resp, StatusCode::OK).await;

    assert_eq!(body["message"], "Game state updated successfully");
    assert_eq!(body["gameStatus"], "won");
    assert_eq!(body["targetWord"], target.as_str());
    let tries = body["tries"].as_array().unwrap();
    assert_eq!(tries.len(), 1);
    assert_eq!(tries[0]["guessWord"], target.as_str());
    assert_eq!(tries[0]["isCorrect"], true);
    for letter in tries[0]["letterResultArray"].as_array().unwrap() {
        assert_eq!(letter["status"], "correct");
    }

    // Terminal: further guesses are refused.
    let resp = test::call_service(&app, guess(id, &target)).await;
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_PLAYABLE",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}

#[actix_web::test]
async fn running_out_of_guesses_loses() {
    let state = memory_state(4).await;
    let app = create_test_app_builder(state.clone()).build().await;

    let resp = test::call_service(&app, create(json!({ "maxTries": 5 }))).await;
    let id = read_json(resp, StatusCode::CREATED).await["id"].as_i64().unwrap();
    let target = load(&state, id).await.target_word;
    let miss = wrong_guess(&target);

    for n in 1..=5 {
        let resp = test::call_service(&app, guess(id, miss)).await;
        let body = read_json(resp, StatusCode::OK).await;
        assert_eq!(body["tries"].as_array().unwrap().len(), n);
        if n < 5 {
            assert_eq!(body["gameStatus"], "playing");
            assert!(body.get("targetWord").is_none());
        } else {
            assert_eq!(body["gameStatus"], "lost");
            assert_eq!(body["targetWord"], target.as_str());
        }
    }
}

#[actix_web::test]
async fn invalid_word_is_rejected_with_the_guess() {
    let state = memory_state(5).await;
    let app = create_test_app_builder(state.clone()).build().await;

    let resp = test::call_service(&app, create(json!({}))).await;
    let id = read_json(resp, StatusCode::CREATED).await["id"].as_i64().unwrap();

    let resp = test::call_service(&app, guess(id, "qzxwv")).await;
    let problem =
        backend_test_support::problem_details::assert_problem_details_from_service_response(
            resp,
            "INVALID_WORD",
            StatusCode::BAD_REQUEST,
            Some("QZXWV"),
        )
        .await;
    assert_eq!(problem.invalid_guess_word.as_deref(), Some("QZXWV"));

    // Wrong length counts as an invalid word too, and nothing was recorded.
    let resp = test::call_service(&app, guess(id, "TREE")).await;
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        "INVALID_WORD",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    assert!(load(&state, id).await.tries.is_empty());
}

#[actix_web::test]
async fn forfeit_is_idempotent() {
    let state = memory_state(6).await;
    let app = create_test_app_builder(state).build().await;

    let resp = test::call_service(&app, create(json!({}))).await;
    let id = read_json(resp, StatusCode::CREATED).await["id"].as_i64().unwrap();

    for _ in 0..2 {
        let req = test::TestRequest::put()
            .uri(&format!("/gamestates/{id}"))
            .to_request();
        let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
        assert_eq!(body["message"], "Game state status set to lost successfully");
        assert_eq!(body["gameStatus"], "lost");
        assert!(body["targetWord"].is_string());
    }
}

#[actix_web::test]
async fn timeout_speed_game_and_reject_classic() {
    let state = memory_state(7).await;
    let app = create_test_app_builder(state).build().await;

    let resp = test::call_service(&app, create(json!({ "mode": "speed" }))).await;
    let speed = read_json(resp, StatusCode::CREATED).await["id"].as_i64().unwrap();
    let resp = test::call_service(&app, create(json!({ "mode": "classic" }))).await;
    let classic = read_json(resp, StatusCode::CREATED).await["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/gamestates/{speed}/timeout"))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["message"], "Game state status set to timeout successfully");
    assert_eq!(body["gameStatus"], "timeout");

    // A timed-out game can no longer be forfeited.
    let req = test::TestRequest::put()
        .uri(&format!("/gamestates/{speed}"))
        .to_request();
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "GAME_NOT_PLAYABLE",
        StatusCode::CONFLICT,
        None,
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/gamestates/{classic}/timeout"))
        .to_request();
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        test::call_service(&app, req).await,
        "MODE_RULE_VIOLATION",
        StatusCode::BAD_REQUEST,
        Some("classic"),
    )
    .await;
}

#[actix_web::test]
async fn full_flow_on_sqlite() {
    let state = sqlite_state(8).await;
    let app = create_test_app_builder(state.clone()).build().await;

    let resp = test::call_service(&app, create(json!({ "wordSize": 6, "maxTries": 7 }))).await;
    let id = read_json(resp, StatusCode::CREATED).await["id"].as_i64().unwrap();
    let target = load(&state, id).await.target_word;

    let resp = test::call_service(&app, guess(id, wrong_guess(&target))).await;
    let body = read_json(resp, StatusCode::OK).await;
    assert_eq!(body["gameStatus"], "playing");
    assert_eq!(body["wordSize"], 6);
    assert_eq!(body["maxTries"], 7);

    let req = test::TestRequest::get()
        .uri(&format!("/gamestates/{id}"))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["tries"].as_array().unwrap().len(), 1);
    assert!(body.get("message").is_none());

    let stored = load(&state, id).await;
    assert_eq!(stored.version, 2);
}
