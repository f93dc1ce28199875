//! HTTP API tests
//!
//! Drive the full router (middleware included) against in-memory repositories.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use integration_tests::*;
use serde_json::json;

// ============================================================================
// Health & routing
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_status(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "ok", "message": "Prompt Gallery API is running"})
    );
}

#[tokio::test]
async fn test_readiness_without_database() {
    let app = TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_status(status, StatusCode::OK);
    assert_json(
        &body,
        &json!({
            "status": "ready",
            "checks": {"database": "healthy", "view_counter": "healthy"},
            "view_counter": {"dropped": 0}
        }),
    );
}

#[tokio::test]
async fn test_unknown_route_returns_envelope() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/nope").await;

    assert_status(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"status": "error", "message": "Route not found"}));
}

#[tokio::test]
async fn test_wrong_method_returns_route_not_found() {
    let app = TestApp::new();
    let not_found = json!({"status": "error", "message": "Route not found"});

    let (status, body) = app
        .send(Method::PUT, "/api/v1/prompts/1", Some(json!({})))
        .await;
    assert_status(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);

    let (status, body) = app.send(Method::POST, "/health", None).await;
    assert_status(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);
}

// ============================================================================
// Prompts
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_prompt() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/v1/prompts", prompt_body("Linked lists")).await;
    assert_status(status, StatusCode::CREATED);
    assert_json(
        &body,
        &json!({
            "status": "success",
            "message": "Prompt created successfully",
            "data": {
                "title": "Linked lists",
                "difficulty": "intermediate",
                "is_verified": false,
                "view_count": 0
            }
        }),
    );
    // Author email is never exposed
    assert!(body["data"].get("author_email").is_none());

    let id = body["data"]["id"].as_i64().unwrap();
    let (status, body) = app.get(&format!("/api/v1/prompts/{id}")).await;
    assert_status(status, StatusCode::OK);
    assert_eq!(body["message"], "Prompt fetched successfully");
    assert_eq!(body["data"]["id"], id);
}

#[tokio::test]
async fn test_create_prompt_missing_title() {
    let app = TestApp::new();
    let mut payload = prompt_body("");
    payload["title"] = json!("   ");

    let (status, body) = app.post("/api/v1/prompts", payload).await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_json(
        &body,
        &json!({"status": "error", "message": "title is required", "error": "VALIDATION_ERROR"}),
    );
    assert!(app.state.prompts.is_empty());
}

#[tokio::test]
async fn test_create_prompt_invalid_difficulty() {
    let app = TestApp::new();
    let mut payload = prompt_body("Heaps");
    payload["difficulty"] = json!("legendary");

    let (status, body) = app.post("/api/v1/prompts", payload).await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid difficulty level: legendary");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();
    let request = Request::post("/api/v1/prompts")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send_request(request).await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "INVALID_BODY");
}

#[tokio::test]
async fn test_invalid_prompt_id() {
    let app = TestApp::new();

    for path in ["/api/v1/prompts/abc", "/api/v1/prompts/0", "/api/v1/prompts/-4"] {
        let (status, body) = app.get(path).await;
        assert_status(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid prompt ID", "path {path}");
    }
}

#[tokio::test]
async fn test_missing_prompt_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/prompts/999").await;

    assert_status(status, StatusCode::NOT_FOUND);
    assert_json(
        &body,
        &json!({"status": "error", "message": "Prompt not found", "error": "NOT_FOUND"}),
    );
}

#[tokio::test]
async fn test_list_prompts_pagination() {
    let app = TestApp::new();
    for i in 0..12 {
        let mut payload = prompt_body(&format!("Prompt {i}"));
        payload["language"] = json!("python");
        app.create_prompt(payload).await;
        // Interleave rows the filter must skip
        if i % 4 == 0 {
            app.create_prompt(prompt_body(&format!("Rust {i}"))).await;
        }
    }

    let (status, body) = app
        .get("/api/v1/prompts?language=python&page=2&limit=5")
        .await;

    assert_status(status, StatusCode::OK);
    assert_json(
        &body,
        &json!({
            "message": "Prompts fetched successfully",
            "data": {"total": 12, "page": 2, "limit": 5, "total_pages": 3}
        }),
    );
    let titles: Vec<&str> = body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    // Newest first
    assert_eq!(
        titles,
        vec!["Prompt 6", "Prompt 5", "Prompt 4", "Prompt 3", "Prompt 2"]
    );
}

#[tokio::test]
async fn test_list_prompts_bad_paging_falls_back() {
    let app = TestApp::new();
    app.create_prompt(prompt_body("Only one")).await;

    let (status, body) = app.get("/api/v1/prompts?page=zero&limit=500").await;

    assert_status(status, StatusCode::OK);
    assert_json(&body, &json!({"data": {"page": 1, "limit": 10, "total": 1}}));
}

#[tokio::test]
async fn test_list_prompts_filters() {
    let app = TestApp::new();
    app.create_prompt(prompt_body("Borrow checker puzzles")).await;
    let mut go = prompt_body("Goroutine leaks");
    go["language"] = json!("go");
    app.create_prompt(go).await;

    let (_, body) = app.get("/api/v1/prompts?language=go").await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["data"][0]["title"], "Goroutine leaks");

    let (_, body) = app.get("/api/v1/prompts?search=BORROW").await;
    assert_eq!(body["data"]["total"], 1);

    let (_, body) = app.get("/api/v1/prompts?is_verified=false").await;
    assert_eq!(body["data"]["total"], 2);
}

#[tokio::test]
async fn test_list_prompts_filter_values_are_not_trimmed() {
    let app = TestApp::new();
    let mut go = prompt_body("Goroutine leaks");
    go["language"] = json!("go");
    app.create_prompt(go).await;

    let (status, body) = app.get("/api/v1/prompts?language=%20go").await;
    assert_status(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);

    let (_, body) = app.get("/api/v1/prompts?language=%20%20").await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn test_list_prompts_invalid_flag() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/prompts?is_verified=maybe").await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_list_prompts_invalid_difficulty_filter() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/prompts?difficulty=hard").await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid difficulty");
}

#[tokio::test]
async fn test_fetch_increments_view_count() {
    let app = TestApp::new();
    let id = app.create_prompt(prompt_body("Tries")).await;

    for _ in 0..3 {
        let (status, _) = app.get(&format!("/api/v1/prompts/{id}")).await;
        assert_status(status, StatusCode::OK);
    }

    assert!(eventually(|| app.state.prompts.view_count(id) == Some(3)).await);
}

#[tokio::test]
async fn test_fetch_succeeds_when_view_increment_fails() {
    let app = TestApp::new();
    let id = app.create_prompt(prompt_body("Graphs")).await;
    app.state.prompts.fail_view_increments(true);

    let (status, _) = app.get(&format!("/api/v1/prompts/{id}")).await;
    assert_status(status, StatusCode::OK);

    assert!(eventually(|| app.state.ctx.view_counter().stats().failed == 1).await);
}

#[tokio::test]
async fn test_popular_prompts_ordered_by_views() {
    let app = TestApp::new();
    let a = app.create_prompt(prompt_body("A")).await;
    let b = app.create_prompt(prompt_body("B")).await;
    let c = app.create_prompt(prompt_body("C")).await;
    app.state.prompts.set_view_count(a, 5);
    app.state.prompts.set_view_count(b, 50);
    app.state.prompts.set_view_count(c, 1);

    let (status, body) = app.get("/api/v1/prompts/popular?limit=2").await;

    assert_status(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![b, a]);
}

#[tokio::test]
async fn test_update_prompt() {
    let app = TestApp::new();
    let id = app.create_prompt(prompt_body("Old title")).await;

    let (status, body) = app
        .patch(
            &format!("/api/v1/prompts/{id}"),
            json!({"title": "New title", "difficulty": "expert"}),
        )
        .await;

    assert_status(status, StatusCode::OK);
    assert_json(
        &body,
        &json!({
            "message": "Prompt updated successfully",
            "data": {"title": "New title", "difficulty": "expert", "language": "rust"}
        }),
    );
}

#[tokio::test]
async fn test_delete_prompt_hides_it() {
    let app = TestApp::new();
    let id = app.create_prompt(prompt_body("Short lived")).await;

    let (status, body) = app.delete(&format!("/api/v1/prompts/{id}")).await;
    assert_status(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "success", "message": "Prompt deleted successfully"})
    );

    let (status, _) = app.get(&format!("/api/v1/prompts/{id}")).await;
    assert_status(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/v1/prompts/{id}")).await;
    assert_status(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_verify_prompt_requires_capability() {
    let app = TestApp::new();
    let prompt = app.create_prompt(prompt_body("Verify me")).await;
    let contributor = app.create_user(user_body("contributor")).await;
    let moderator = app.create_user(user_body("moderator")).await;
    let uri = format!("/api/v1/prompts/{prompt}/verify");

    let (status, body) = app.post(&uri, json!({"verifier_id": contributor})).await;
    assert_status(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");

    let (status, body) = app.post(&uri, json!({"verifier_id": moderator})).await;
    assert_status(status, StatusCode::OK);
    assert_json(
        &body,
        &json!({
            "message": "Prompt verified successfully",
            "data": {"is_verified": true, "verified_by": moderator}
        }),
    );

    let (_, body) = app.get(&format!("/api/v1/users/{moderator}")).await;
    assert_eq!(body["data"]["prompts_verified"], 1);
}

#[tokio::test]
async fn test_verify_prompt_unknown_verifier() {
    let app = TestApp::new();
    let prompt = app.create_prompt(prompt_body("Nobody checks")).await;

    let (status, body) = app
        .post(
            &format!("/api/v1/prompts/{prompt}/verify"),
            json!({"verifier_id": 77}),
        )
        .await;

    assert_status(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

// ============================================================================
// Prompt requests
// ============================================================================

#[tokio::test]
async fn test_submit_request_defaults() {
    let app = TestApp::new();
    let mut payload = request_body("Channels");
    payload["is_urgent"] = json!(true);
    payload["requested_difficulty"] = json!("wizard");

    let (status, body) = app.post("/api/v1/requests", payload).await;

    assert_status(status, StatusCode::CREATED);
    assert_json(
        &body,
        &json!({
            "message": "Request submitted successfully",
            "data": {
                "status": "pending",
                "priority": "high",
                "requested_difficulty": "beginner",
                "is_urgent": true,
                "is_rejected": false
            }
        }),
    );
}

#[tokio::test]
async fn test_submit_request_missing_email() {
    let app = TestApp::new();
    let mut payload = request_body("Channels");
    payload["requester_email"] = json!("");

    let (status, body) = app.post("/api/v1/requests", payload).await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "requester email is required");
}

#[tokio::test]
async fn test_request_triage_flow() {
    let app = TestApp::new();
    let (_, body) = app.post("/api/v1/requests", request_body("Mutexes")).await;
    let id = body["data"]["id"].as_i64().unwrap();
    let moderator = app.create_user(user_body("moderator")).await;
    let uri = format!("/api/v1/requests/{id}");

    let (status, body) = app
        .patch(
            &uri,
            json!({"status": "in_review", "assigned_to_id": moderator, "admin_notes": "looks good"}),
        )
        .await;
    assert_status(status, StatusCode::OK);
    assert_json(
        &body,
        &json!({
            "message": "Request updated successfully",
            "data": {"status": "in_review", "assigned_to_id": moderator, "admin_notes": "looks good"}
        }),
    );
    assert!(body["data"]["assigned_at"].is_string());

    let (status, body) = app.patch(&uri, json!({"status": "rejected"})).await;
    assert_status(status, StatusCode::OK);
    assert_eq!(body["data"]["is_rejected"], true);

    let (_, body) = app.get("/api/v1/requests?is_rejected=true").await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn test_request_completion_links_prompt() {
    let app = TestApp::new();
    let (_, body) = app.post("/api/v1/requests", request_body("Select")).await;
    let id = body["data"]["id"].as_i64().unwrap();
    let prompt = app.create_prompt(prompt_body("Select statements")).await;

    let (status, body) = app
        .patch(
            &format!("/api/v1/requests/{id}"),
            json!({"status": "completed", "completed_prompt_id": prompt}),
        )
        .await;

    assert_status(status, StatusCode::OK);
    assert_eq!(body["data"]["completed_prompt_id"], prompt);
    assert!(body["data"]["completed_at"].is_string());
}

#[tokio::test]
async fn test_request_update_rejects_unknown_status() {
    let app = TestApp::new();
    let (_, body) = app.post("/api/v1/requests", request_body("Atomics")).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .patch(&format!("/api/v1/requests/{id}"), json!({"status": "archived"}))
        .await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid status");
}

#[tokio::test]
async fn test_request_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/requests/42").await;

    assert_status(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Prompt request not found");
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_create_user_hides_password() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/v1/users", user_body("")).await;

    assert_status(status, StatusCode::CREATED);
    assert_json(
        &body,
        &json!({"data": {"role": "contributor", "is_active": true, "prompts_created": 0}}),
    );
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    let first = user_body("contributor");
    app.create_user(first.clone()).await;

    let mut second = user_body("contributor");
    second["email"] = first["email"].clone();
    let (status, body) = app.post("/api/v1/users", second).await;

    assert_status(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "email already in use");
}

#[tokio::test]
async fn test_short_password_rejected() {
    let app = TestApp::new();
    let mut payload = user_body("contributor");
    payload["password"] = json!("short");

    let (status, body) = app.post("/api/v1/users", payload).await;

    assert_status(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password must be at least 8 characters");
}

#[tokio::test]
async fn test_admin_update_user() {
    let app = TestApp::new();
    let id = app.create_user(user_body("contributor")).await;

    let (status, body) = app
        .patch(
            &format!("/api/v1/users/{id}/admin"),
            json!({"role": "admin", "is_active": false}),
        )
        .await;
    assert_status(status, StatusCode::OK);
    assert_json(&body, &json!({"data": {"role": "admin", "is_active": false}}));

    let (_, body) = app.get("/api/v1/users?role=admin&is_active=false").await;
    assert_eq!(body["data"]["total"], 1);

    let (status, _) = app
        .patch(&format!("/api/v1/users/{id}/admin"), json!({"role": "root"}))
        .await;
    assert_status(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new();
    let id = app.create_user(user_body("contributor")).await;

    let (status, body) = app.delete(&format!("/api/v1/users/{id}")).await;
    assert_status(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, _) = app.get(&format!("/api/v1/users/{id}")).await;
    assert_status(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Over a real socket
// ============================================================================

#[tokio::test]
async fn test_served_over_tcp() -> anyhow::Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/health").await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let response = server.post("/api/v1/prompts", &prompt_body("Over TCP")).await?;
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["data"]["title"], "Over TCP");
    assert_eq!(server.state.prompts.len(), 1);

    Ok(())
}
