//! Router tests against the in-memory store.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use trivia_core::{Category, NewQuestion};
use trivia_http::{AppState, create_router};
use trivia_storage::{MemoryStorage, QuestionStore, StorageBackend};

/// Categories 1..=3; `questions` alternate across them, every third one
/// mentions "title".
async fn app_with(categories: bool, questions: usize) -> Router {
    let memory = MemoryStorage::new();
    if categories {
        for (id, kind) in [(1, "Science"), (2, "Art"), (3, "History")] {
            memory.add_category(Category::new(id, kind)).await;
        }
    }
    let storage = Arc::new(StorageBackend::new_memory(memory));
    for n in 1..=questions {
        let category = i64::try_from(n % 3).unwrap() + 1;
        let text = if n % 3 == 0 {
            format!("What is the Title of book {n}?")
        } else {
            format!("Question {n}?")
        };
        let input = NewQuestion::new(&text, "Answer", 2, category).unwrap();
        storage.insert_question(&input).await.unwrap();
    }
    create_router(Arc::new(AppState::new(storage)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn assert_envelope(body: &Value, status: StatusCode) {
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(status.as_u16()));
    assert!(body["message"].is_string());
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"].as_array().unwrap().iter().map(|q| q["id"].as_i64().unwrap()).collect()
}

#[tokio::test]
async fn categories_listed_as_id_map() {
    let app = app_with(true, 0).await;
    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_categories"], json!(3));
    assert_eq!(body["categories"]["2"], json!("Art"));
}

#[tokio::test]
async fn no_categories_is_not_found_envelope() {
    let app = app_with(false, 0).await;
    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("resource not found"));
}

#[tokio::test]
async fn second_page_holds_remaining_questions() {
    let app = app_with(true, 15).await;
    let (status, body) = send(&app, Method::GET, "/questions?page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![11, 12, 13, 14, 15]);
    assert_eq!(body["total_questions"], json!(15));
    assert_eq!(body["current_category"], Value::Null);
    assert_eq!(body["categories"]["1"], json!("Science"));
}

#[tokio::test]
async fn default_page_is_first() {
    let app = app_with(true, 12).await;
    let (_, body) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn page_past_end_of_listing_is_not_found() {
    let app = app_with(true, 5).await;
    let (status, body) = send(&app, Method::GET, "/questions?page=3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn huge_page_is_past_the_end() {
    let app = app_with(true, 5).await;
    let (status, body) = send(&app, Method::GET, "/questions?page=99999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, StatusCode::NOT_FOUND);

    let (status, body) =
        send(&app, Method::GET, "/categories/1/questions?page=99999999999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], json!(1));
}

#[tokio::test]
async fn malformed_page_is_bad_request() {
    let app = app_with(true, 5).await;
    for uri in ["/questions?page=0", "/questions?page=abc", "/categories/1/questions?page=-2"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_envelope(&body, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn search_through_questions_post() {
    let app = app_with(true, 9).await;
    let (status, body) =
        send(&app, Method::POST, "/questions", Some(json!({"searchTerm": "title"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3, 6, 9]);
    assert_eq!(body["total_questions"], json!(3));
    assert!(body.get("created").is_none());
}

#[tokio::test]
async fn dedicated_search_route_rejects_blank_term() {
    let app = app_with(true, 3).await;
    let (status, body) =
        send(&app, Method::POST, "/questions/search", Some(json!({"searchTerm": "TITLE"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3]);

    let (status, body) =
        send(&app, Method::POST, "/questions/search", Some(json!({"searchTerm": " "}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_envelope(&body, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_then_delete_question() {
    let app = app_with(true, 2).await;
    let new_question = json!({
        "question": "Largest planet?",
        "answer": "Jupiter",
        "difficulty": 1,
        "category": "1",
    });
    let (status, body) = send(&app, Method::POST, "/questions", Some(new_question)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], json!(3));
    assert_eq!(body["total_questions"], json!(3));

    let (status, body) = send(&app, Method::DELETE, "/questions/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], json!(3));
    assert_eq!(body["total_questions"], json!(2));

    let (status, body) = send(&app, Method::DELETE, "/questions/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_incomplete_or_invalid_questions() {
    let app = app_with(true, 0).await;
    for body in [
        json!({"question": "No answer?"}),
        json!({"question": "  ", "answer": "A", "difficulty": 1, "category": 1}),
        json!({"question": "Orphan?", "answer": "A", "difficulty": 1, "category": 42}),
    ] {
        let (status, response) = send(&app, Method::POST, "/questions", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_envelope(&response, StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn non_integer_question_id_is_not_found() {
    let app = app_with(true, 1).await;
    let (status, body) = send(&app, Method::DELETE, "/questions/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_questions_are_scoped() {
    let app = app_with(true, 9).await;
    let (status, body) = send(&app, Method::GET, "/categories/1/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3, 6, 9]);
    assert_eq!(body["current_category"], json!({"id": 1, "type": "Science"}));

    let (status, body) = send(&app, Method::GET, "/categories/99/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_draws_unseen_question_from_category() {
    let app = app_with(true, 9).await;
    let request = json!({"previous_questions": [1, 7], "quiz_category": {"id": 2, "type": "Art"}});
    let (status, body) = send(&app, Method::POST, "/quizzes", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"]["id"], json!(4));
    assert_eq!(body["question"]["category"], json!(2));
}

#[tokio::test]
async fn quiz_exhausted_omits_question() {
    let app = app_with(true, 9).await;
    let request = json!({"previous_questions": [3, 6, 9], "quiz_category": {"id": "1"}});
    let (status, body) = send(&app, Method::POST, "/quizzes", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn quiz_all_categories_uses_every_question() {
    let app = app_with(true, 3).await;
    let request = json!({"previous_questions": [1, 2], "quiz_category": {"id": 0}});
    let (_, body) = send(&app, Method::POST, "/quizzes", Some(request)).await;
    assert_eq!(body["question"]["id"], json!(3));
}

#[tokio::test]
async fn quiz_accepts_string_ids_in_previous_questions() {
    let app = app_with(true, 3).await;
    let request = json!({"previous_questions": ["1", "3"], "quiz_category": {"id": 0}});
    let (status, body) = send(&app, Method::POST, "/quizzes", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], json!(2));
}

#[tokio::test]
async fn quiz_missing_fields_is_unprocessable() {
    let app = app_with(true, 3).await;
    for request in [json!({"previous_questions": []}), json!({"quiz_category": {"id": 0}})] {
        let (status, body) = send(&app, Method::POST, "/quizzes", Some(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_envelope(&body, StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn unknown_route_is_not_found_envelope() {
    let app = app_with(true, 0).await;
    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_method_is_envelope() {
    let app = app_with(true, 1).await;
    for (method, uri) in [(Method::PUT, "/questions"), (Method::PATCH, "/questions/1")] {
        let (status, body) = send(&app, method, uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_envelope(&body, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], json!("method not allowed"));
    }
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app_with(true, 0).await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
