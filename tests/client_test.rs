//! Integration tests for client CRUD and per-owner isolation.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

use common::TestApp;

async fn user_id(app: &TestApp, token: &str) -> String {
    let me = app.request("GET", "/api/users/me", None, Some(token)).await;
    me.body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_client_lifecycle() {
    let app = TestApp::new();
    let token = app.register_and_login("studio@example.com").await;
    let my_id = user_id(&app, &token).await;

    let created = app
        .request(
            "POST",
            "/api/clients",
            Some(serde_json::json!({
                "name": "Blue Harbor Press",
                "email": "contact@blueharbor.example",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["name"], "Blue Harbor Press");
    // The caller becomes the owner regardless of input.
    assert_eq!(created.body["data"]["owner_id"], my_id.as_str());

    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let listed = app.request("GET", "/api/clients", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);

    let updated = app
        .request(
            "PUT",
            &format!("/api/clients/{}", id),
            Some(serde_json::json!({
                "name": "Blue Harbor Press Ltd",
                "email": "billing@blueharbor.example",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "Blue Harbor Press Ltd");

    let deleted = app
        .request("DELETE", &format!("/api/clients/{}", id), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/clients/{}", id), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_routes_require_auth() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/clients", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_create_client_rejects_blank_name() {
    let app = TestApp::new();
    let token = app.register_and_login("blank@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/clients",
            Some(serde_json::json!({ "name": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_foreign_client_reads_as_not_found() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice@example.com").await;
    let bob = app.register_and_login("bob@example.com").await;

    let created = app
        .request(
            "POST",
            "/api/clients",
            Some(serde_json::json!({ "name": "Alice's Client" })),
            Some(&alice),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let listed = app.request("GET", "/api/clients", None, Some(&bob)).await;
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 0);

    let got = app
        .request("GET", &format!("/api/clients/{}", id), None, Some(&bob))
        .await;
    assert_eq!(got.status, StatusCode::NOT_FOUND);

    let updated = app
        .request(
            "PUT",
            &format!("/api/clients/{}", id),
            Some(serde_json::json!({ "name": "Hijacked" })),
            Some(&bob),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NOT_FOUND);

    let deleted = app
        .request("DELETE", &format!("/api/clients/{}", id), None, Some(&bob))
        .await;
    assert_eq!(deleted.status, StatusCode::NOT_FOUND);

    // The row is untouched for its real owner.
    let still_there = app
        .request("GET", &format!("/api/clients/{}", id), None, Some(&alice))
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["data"]["name"], "Alice's Client");
}

#[tokio::test]
async fn test_owner_transfer_moves_client() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice@example.com").await;
    let bob = app.register_and_login("bob@example.com").await;
    let bob_id = user_id(&app, &bob).await;

    let created = app
        .request(
            "POST",
            "/api/clients",
            Some(serde_json::json!({ "name": "Handover" })),
            Some(&alice),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let transferred = app
        .request(
            "PUT",
            &format!("/api/clients/{}", id),
            Some(serde_json::json!({ "name": "Handover", "owner_id": bob_id })),
            Some(&alice),
        )
        .await;
    assert_eq!(transferred.status, StatusCode::OK);
    assert_eq!(transferred.body["data"]["owner_id"], bob_id.as_str());

    // Alice handed it away and can no longer see it.
    let gone_for_alice = app
        .request("GET", &format!("/api/clients/{}", id), None, Some(&alice))
        .await;
    assert_eq!(gone_for_alice.status, StatusCode::NOT_FOUND);

    let visible_to_bob = app
        .request("GET", &format!("/api/clients/{}", id), None, Some(&bob))
        .await;
    assert_eq!(visible_to_bob.status, StatusCode::OK);
}

#[tokio::test]
async fn test_owner_transfer_to_unknown_user() {
    let app = TestApp::new();
    let token = app.register_and_login("keeper@example.com").await;

    let created = app
        .request(
            "POST",
            "/api/clients",
            Some(serde_json::json!({ "name": "Staying Put" })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/clients/{}", id),
            Some(serde_json::json!({
                "name": "Staying Put",
                "owner_id": Uuid::new_v4(),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "REFERENCE_NOT_FOUND");

    // Ownership is unchanged.
    let still_mine = app
        .request("GET", &format!("/api/clients/{}", id), None, Some(&token))
        .await;
    assert_eq!(still_mine.status, StatusCode::OK);
}
