//! Question generation API tests: prepare/commit protocol and ordering.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use common::fixtures;
use common::TestContext;

#[tokio::test]
async fn test_prepare_unknown_document_is_not_found() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/questions/prepare")
        .json(&fixtures::generate_questions_request("missing", 5, &["mcq"]))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_prepare_without_text_is_bad_request() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_without_text("doc.pdf");

    let response = server
        .post("/questions/prepare")
        .json(&fixtures::generate_questions_request(&document.id, 5, &["mcq"]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_prepare_rejects_count_out_of_bounds() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "text");

    for count in [0, 51] {
        let response = server
            .post("/questions/prepare")
            .json(&fixtures::generate_questions_request(&document.id, count, &["mcq"]))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_prepare_rejects_empty_types() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "text");

    let response = server
        .post("/questions/prepare")
        .json(&fixtures::generate_questions_request(&document.id, 5, &[]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_prepare_returns_text_request_and_prompt() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "Photosynthesis basics");

    let response = server
        .post("/questions/prepare")
        .json(&fixtures::generate_questions_request(
            &document.id,
            5,
            &["mcq", "true_false"],
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["textContent"], "Photosynthesis basics");
    assert_eq!(body["request"]["count"], 5);
    assert_eq!(body["request"]["difficulty"], "easy");
    assert!(body["prompt"]
        .as_str()
        .unwrap()
        .contains("Photosynthesis basics"));
}

#[tokio::test]
async fn test_prepare_clears_previous_questions() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "text");

    server
        .post("/questions/commit")
        .json(&fixtures::commit_questions_request(
            &document.id,
            vec![fixtures::mcq_payload("old question")],
        ))
        .await
        .assert_status_ok();

    server
        .post("/questions/prepare")
        .json(&fixtures::generate_questions_request(&document.id, 5, &["mcq"]))
        .await
        .assert_status_ok();

    // After prepare alone (no commit), the list is empty.
    let questions: Value = server
        .get(&format!("/questions/{}", document.id))
        .await
        .json();
    assert!(questions.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_prepare_mutates_nothing() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "text");

    server
        .post("/questions/commit")
        .json(&fixtures::commit_questions_request(
            &document.id,
            vec![fixtures::mcq_payload("existing")],
        ))
        .await
        .assert_status_ok();

    // Out-of-bounds count fails validation before any clearing happens.
    server
        .post("/questions/prepare")
        .json(&fixtures::generate_questions_request(&document.id, 0, &["mcq"]))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let questions: Value = server
        .get(&format!("/questions/{}", document.id))
        .await
        .json();
    assert_eq!(questions.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_commit_persists_questions_with_fresh_identity() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "text");

    let response = server
        .post("/questions/commit")
        .json(&fixtures::commit_questions_request(
            &document.id,
            vec![fixtures::mcq_payload("Q1")],
        ))
        .await;

    response.assert_status_ok();
    let committed: Value = response.json();
    assert_eq!(committed.as_array().unwrap().len(), 1);

    let questions: Value = server
        .get(&format!("/questions/{}", document.id))
        .await
        .json();
    let list = questions.as_array().unwrap();
    assert_eq!(list.len(), 1);

    let question = &list[0];
    assert!(!question["id"].as_str().unwrap().is_empty());
    assert!(!question["createdAt"].as_str().unwrap().is_empty());
    assert_eq!(question["type"], "mcq");
    assert_eq!(question["difficulty"], "easy");
    assert_eq!(question["question"], "Q1");
    assert_eq!(question["options"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(question["correctAnswer"], "A");
}

#[tokio::test]
async fn test_commit_unknown_document_is_not_found() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/questions/commit")
        .json(&fixtures::commit_questions_request(
            "missing",
            vec![fixtures::mcq_payload("Q1")],
        ))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_commit_rejects_blank_question_text() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "text");

    let response = server
        .post("/questions/commit")
        .json(&fixtures::commit_questions_request(
            &document.id,
            vec![fixtures::mcq_payload("valid"), fixtures::mcq_payload("  ")],
        ))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // The whole batch is rejected, including the valid payload.
    let questions: Value = server
        .get(&format!("/questions/{}", document.id))
        .await
        .json();
    assert!(questions.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_questions_listed_newest_first() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let document = ctx.seed_document_with_text("doc.pdf", "text");

    server
        .post("/questions/commit")
        .json(&fixtures::commit_questions_request(
            &document.id,
            vec![fixtures::mcq_payload("first")],
        ))
        .await
        .assert_status_ok();
    server
        .post("/questions/commit")
        .json(&fixtures::commit_questions_request(
            &document.id,
            vec![fixtures::mcq_payload("second")],
        ))
        .await
        .assert_status_ok();

    let questions: Value = server
        .get(&format!("/questions/{}", document.id))
        .await
        .json();
    let texts: Vec<&str> = questions
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["question"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["second", "first"]);
}
