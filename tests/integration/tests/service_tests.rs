//! Service layer tests against the in-memory repositories

use integration_tests::*;
use prompt_common::verify_password;
use prompt_core::{Difficulty, ErrorKind, Priority, RequestStatus, UserRole};
use prompt_service::{
    PromptListQuery, PromptRequestService, PromptService, TriagePromptRequest, UpdatePromptRequest,
    UpdateUserRequest, UserService, VerifyPromptRequest,
};

#[tokio::test]
async fn test_empty_difficulty_defaults_to_beginner() {
    let state = TestContext::new();
    let service = PromptService::new(&state.ctx);
    let mut request = create_prompt_request("Stacks");
    request.difficulty = String::new();

    let prompt = service.create_prompt(request).await.unwrap();

    assert_eq!(prompt.difficulty, Difficulty::Beginner);
    assert_eq!(prompt.tags, vec!["lists".to_string(), "pointers".to_string()]);
}

#[tokio::test]
async fn test_required_field_order() {
    let state = TestContext::new();
    let service = PromptService::new(&state.ctx);
    let mut request = create_prompt_request("");
    request.language = String::new();

    let err = service.create_prompt(request).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "title is required");
    assert!(state.prompts.is_empty());
}

#[tokio::test]
async fn test_overlong_title_rejected() {
    let state = TestContext::new();
    let service = PromptService::new(&state.ctx);

    let err = service
        .create_prompt(create_prompt_request(&"x".repeat(201)))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "title must be less than 200 characters");
}

#[tokio::test]
async fn test_update_keeps_absent_fields() {
    let state = TestContext::new();
    let service = PromptService::new(&state.ctx);
    let created = service
        .create_prompt(create_prompt_request("Queues"))
        .await
        .unwrap();

    let updated = service
        .update_prompt(
            created.id,
            UpdatePromptRequest {
                category: Some("data structures".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Queues");
    assert_eq!(updated.category, "data structures");
    assert_eq!(updated.difficulty, Difficulty::Intermediate);
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let state = TestContext::new();
    let service = PromptService::new(&state.ctx);
    let created = service
        .create_prompt(create_prompt_request("Queues"))
        .await
        .unwrap();

    let err = service
        .update_prompt(
            created.id,
            UpdatePromptRequest {
                title: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_verify_is_idempotent() {
    let state = TestContext::new();
    let prompts = PromptService::new(&state.ctx);
    let users = UserService::new(&state.ctx);
    let prompt = prompts
        .create_prompt(create_prompt_request("Sorting"))
        .await
        .unwrap();
    let admin = users
        .create_user(create_user_request("admin"))
        .await
        .unwrap();

    let first = prompts
        .verify_prompt(prompt.id, VerifyPromptRequest { verifier_id: admin.id })
        .await
        .unwrap();
    let second = prompts
        .verify_prompt(prompt.id, VerifyPromptRequest { verifier_id: admin.id })
        .await
        .unwrap();

    assert!(second.is_verified);
    assert_eq!(first.verified_at, second.verified_at);
    assert_eq!(users.get_user(admin.id).await.unwrap().prompts_verified, 1);
}

#[tokio::test]
async fn test_inactive_moderator_cannot_verify() {
    let state = TestContext::new();
    let prompts = PromptService::new(&state.ctx);
    let users = UserService::new(&state.ctx);
    let prompt = prompts
        .create_prompt(create_prompt_request("Hashing"))
        .await
        .unwrap();
    let moderator = users
        .create_user(create_user_request("moderator"))
        .await
        .unwrap();
    users
        .admin_update_user(
            moderator.id,
            prompt_service::AdminUpdateUserRequest {
                role: None,
                is_active: Some(false),
            },
        )
        .await
        .unwrap();

    let err = prompts
        .verify_prompt(prompt.id, VerifyPromptRequest { verifier_id: moderator.id })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_list_filters_by_verification() {
    let state = TestContext::new();
    let service = PromptService::new(&state.ctx);
    for title in ["One", "Two", "Three"] {
        service.create_prompt(create_prompt_request(title)).await.unwrap();
    }

    let page = service
        .list_prompts(PromptListQuery {
            is_verified: Some(true),
            page: 1,
            limit: 10,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 0);
    assert!(page.data.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_urgent_submission_promoted() {
    let state = TestContext::new();
    let service = PromptRequestService::new(&state.ctx);
    let mut request = submit_request("Deadlocks");
    request.is_urgent = true;

    let stored = service.submit_request(request).await.unwrap();

    assert_eq!(stored.priority, Priority::High);
    assert_eq!(stored.status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_urgent_submission_keeps_explicit_priority() {
    let state = TestContext::new();
    let service = PromptRequestService::new(&state.ctx);
    let mut request = submit_request("Deadlocks");
    request.is_urgent = true;
    request.priority = "low".to_string();

    let stored = service.submit_request(request).await.unwrap();

    assert_eq!(stored.priority, Priority::Low);
}

#[tokio::test]
async fn test_invalid_requester_email() {
    let state = TestContext::new();
    let service = PromptRequestService::new(&state.ctx);
    let mut request = submit_request("Deadlocks");
    request.requester_email = "not-an-email".to_string();

    let err = service.submit_request(request).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("invalid requester email"));
}

#[tokio::test]
async fn test_assign_unknown_user_is_not_found() {
    let state = TestContext::new();
    let service = PromptRequestService::new(&state.ctx);
    let stored = service.submit_request(submit_request("Pipes")).await.unwrap();

    let err = service
        .update_request(
            stored.id,
            TriagePromptRequest {
                assigned_to_id: Some(404),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_out_of_workflow_status_is_applied() {
    let state = TestContext::new();
    let service = PromptRequestService::new(&state.ctx);
    let stored = service.submit_request(submit_request("Sockets")).await.unwrap();

    let updated = service
        .update_request(
            stored.id,
            TriagePromptRequest {
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, RequestStatus::Completed);
    assert!(updated.completed_at.is_some());
}

#[tokio::test]
async fn test_password_is_hashed() {
    let state = TestContext::new();
    let service = UserService::new(&state.ctx);

    let user = service
        .create_user(create_user_request("moderator"))
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Moderator);
    let hash = state.users.password_hash(user.id).unwrap();
    assert_ne!(hash, TEST_PASSWORD);
    assert!(verify_password(TEST_PASSWORD, &hash).unwrap());
}

#[tokio::test]
async fn test_unknown_role_becomes_contributor() {
    let state = TestContext::new();
    let service = UserService::new(&state.ctx);

    let user = service.create_user(create_user_request("overlord")).await.unwrap();

    assert_eq!(user.role, UserRole::Contributor);
}

#[tokio::test]
async fn test_username_taken_on_update() {
    let state = TestContext::new();
    let service = UserService::new(&state.ctx);
    let first = service.create_user(create_user_request("")).await.unwrap();
    let second = service.create_user(create_user_request("")).await.unwrap();

    let err = service
        .update_user(
            second.id,
            UpdateUserRequest {
                username: Some(first.username.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_deleted_user_frees_email() {
    let state = TestContext::new();
    let service = UserService::new(&state.ctx);
    let request = create_user_request("");
    let user = service.create_user(request.clone()).await.unwrap();

    service.delete_user(user.id).await.unwrap();
    let again = service.create_user(request).await;

    assert!(again.is_ok());
}

#[tokio::test]
async fn test_shutdown_drains_pending_views() {
    let state = TestContext::with_queue_capacity(256);
    let service = PromptService::new(&state.ctx);
    let prompt = service
        .create_prompt(create_prompt_request("Drain"))
        .await
        .unwrap();

    for _ in 0..100 {
        service.get_prompt(prompt.id).await.unwrap();
    }
    state.ctx.shutdown().await;

    assert_eq!(state.prompts.view_count(prompt.id), Some(100));
    assert!(!state.ctx.view_counter().is_running());
}
