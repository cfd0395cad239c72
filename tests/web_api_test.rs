use axum_test::TestServer;
use serde_json::{json, Value};

use gptlife::coach::LifeCoach;
use gptlife::completion::CompletionClient;
use gptlife::web_server::{build_router, AppState};

/// Server wired to an unreachable completion endpoint: canned replies and
/// fallbacks still work, nothing touches the network.
fn offline_server() -> TestServer {
    let client = CompletionClient::new(
        "http://127.0.0.1:9".to_string(),
        String::new(),
        "test-model".to_string(),
    );
    let state = AppState::new(LifeCoach::new(client));
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn test_add_and_list_habits() {
    let server = offline_server();

    let created = server
        .post("/api/habits")
        .json(&json!({"name": "Jog", "category": "health", "description": "30 minutes"}))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let habit: Value = created.json();
    assert_eq!(habit["id"], 1);
    assert_eq!(habit["completed"], false);
    assert_eq!(habit["streak"], 0);

    server
        .post("/api/habits")
        .json(&json!({"name": "Read", "category": "learning"}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let all: Vec<Value> = server.get("/api/habits").await.json();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["name"], "Jog");
    assert_eq!(all[1]["id"], 2);

    let health: Vec<Value> = server
        .get("/api/habits")
        .add_query_param("category", "health")
        .await
        .json();
    assert_eq!(health.len(), 1);
    assert_eq!(health[0]["name"], "Jog");

    let none: Vec<Value> = server
        .get("/api/habits")
        .add_query_param("category", "financial")
        .await
        .json();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_add_habit_rejects_blank_name() {
    let server = offline_server();
    let resp = server
        .post("/api/habits")
        .json(&json!({"name": "   ", "category": "health"}))
        .await;
    resp.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_suggestions_endpoint() {
    let server = offline_server();

    let body: Value = server.get("/api/suggestions/morning").await.json();
    assert_eq!(body["category"], "morning");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 7);

    let empty: Value = server.get("/api/suggestions/unknown").await.json();
    assert!(empty["suggestions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_endpoint_serves_canned_reply() {
    let server = offline_server();
    let body: Value = server
        .post("/api/chat")
        .json(&json!({"message": "hello there", "history": []}))
        .await
        .json();
    assert!(body["reply"]
        .as_str()
        .unwrap()
        .starts_with("Hello! I'm your AI life coach."));
}

#[tokio::test]
async fn test_chat_endpoint_falls_back_offline() {
    let server = offline_server();
    let body: Value = server
        .post("/api/chat")
        .json(&json!({
            "message": "design me a training block",
            "history": [{"user": "hi coach", "assistant": "welcome"}]
        }))
        .await
        .json();
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("Demo Mode"));
    assert!(reply.contains("design me a training block"));
}

#[tokio::test]
async fn test_chat_endpoint_rejects_empty_message() {
    let server = offline_server();
    let resp = server
        .post("/api/chat")
        .json(&json!({"message": "  "}))
        .await;
    resp.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_improve_endpoint_validates_and_falls_back() {
    let server = offline_server();

    let missing = server
        .post("/api/improve")
        .json(&json!({"habit": "", "current_method": "gym 3x a week"}))
        .await;
    missing.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = server
        .post("/api/improve")
        .json(&json!({"habit": "evening run", "current_method": "3 km after dinner"}))
        .await
        .json();
    assert!(body["suggestions"].as_str().unwrap().contains("evening run"));
}

#[tokio::test]
async fn test_plan_endpoint_falls_back_offline() {
    let server = offline_server();
    let body: Value = server
        .post("/api/plan")
        .json(&json!({"goals": ["Read more books", "Exercise regularly"]}))
        .await
        .json();
    assert!(body["plan"].as_str().unwrap().contains("Sample Daily Plan"));
}
