//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

use gemdrop_core::{Task, TaskRepository, VerificationType};
use gemdrop_db::{create_pool_from_env, PgTaskRepository};

/// Seed an active task straight into the database
async fn seed_task(reward: i64) -> Task {
    let pool = create_pool_from_env().await.expect("Failed to create pool");
    let repo = PgTaskRepository::new(pool);
    let generator = gemdrop_core::SnowflakeGenerator::new(31);
    let task = Task::new(
        generator.generate(),
        format!("Integration task {reward}"),
        "Visit the page".to_string(),
        reward,
        Some("https://example.com".to_string()),
        VerificationType::UrlVisit,
    );
    repo.create(&task).await.expect("Failed to seed task");
    task
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_telegram_auth_registers_new_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = AuthRequest::unique();

    let response = server.post("/api/v1/auth/telegram", &request).await.unwrap();
    let auth: AuthResponseBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.telegram_id, request.user.id);
    assert_eq!(auth.user.diamonds, 0);
    assert!(auth.user.referrals.is_empty());
}

#[tokio::test]
async fn test_telegram_auth_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = AuthRequest::unique();

    server.post("/api/v1/auth/telegram", &request).await.unwrap();
    let response = server.post("/api/v1/auth/telegram", &request).await.unwrap();
    let auth: AuthResponseBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.telegram_id, request.user.id);
}

#[tokio::test]
async fn test_telegram_auth_links_referral() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let referrer = AuthRequest::unique();
    server.post("/api/v1/auth/telegram", &referrer).await.unwrap();

    let referred = AuthRequest::referred_by(referrer.user.id);
    let response = server.post("/api/v1/auth/telegram", &referred).await.unwrap();
    let auth: AuthResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.referrer_id, Some(referrer.user.id));

    // Referrer's list now carries the new user
    let response = server
        .get(&format!("/api/v1/users/{}", referrer.user.id))
        .await
        .unwrap();
    let detail: UserDetailBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.user.referrals.contains(&referred.user.id));
}

#[tokio::test]
async fn test_telegram_auth_rejects_empty_first_name() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = AuthRequest::unique();
    request.user.first_name = String::new();

    let response = server.post("/api/v1/auth/telegram", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Task Tests
// ============================================================================

#[tokio::test]
async fn test_task_completion_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let task = seed_task(100).await;

    let user = AuthRequest::unique();
    server.post("/api/v1/auth/telegram", &user).await.unwrap();

    // Task shows up in the listing
    let response = server
        .get(&format!("/api/v1/tasks?user_id={}", user.user.id))
        .await
        .unwrap();
    let listing: TasksBody = assert_json(response, StatusCode::OK).await.unwrap();
    let task_id = task.id.into_inner().to_string();
    assert!(listing.tasks.iter().any(|t| t.id == task_id));

    // First completion pays the reward
    let complete = CompleteTaskBody {
        user_id: user.user.id,
        task_id: task_id.clone(),
    };
    let response = server.post("/api/v1/tasks/complete", &complete).await.unwrap();
    let completed: CompleteTaskResponseBody =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(completed.reward, 100);

    // Balance reflects the payout
    let response = server
        .get(&format!("/api/v1/users/{}", user.user.id))
        .await
        .unwrap();
    let detail: UserDetailBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.user.diamonds, 100);

    // Second completion is rejected
    let response = server.post("/api/v1/tasks/complete", &complete).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "TASK_ALREADY_COMPLETED");

    // Ledger carries exactly one reward entry
    let response = server
        .get(&format!("/api/v1/transactions?user_id={}", user.user.id))
        .await
        .unwrap();
    let ledger: TransactionsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ledger.transactions.len(), 1);
    assert_eq!(ledger.transactions[0].kind, "task_reward");
    assert_eq!(ledger.transactions[0].currency, "diamonds");
}

#[tokio::test]
async fn test_completing_as_unregistered_user_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let task = seed_task(100).await;

    let complete = CompleteTaskBody {
        user_id: unique_telegram_id(),
        task_id: task.id.into_inner().to_string(),
    };
    let response = server.post("/api/v1/tasks/complete", &complete).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_completing_unknown_task_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = AuthRequest::unique();
    server.post("/api/v1/auth/telegram", &user).await.unwrap();

    let complete = CompleteTaskBody {
        user_id: user.user.id,
        task_id: "1".to_string(),
    };
    let response = server.post("/api/v1/tasks/complete", &complete).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_TASK");
}

// ============================================================================
// Transaction Tests
// ============================================================================

#[tokio::test]
async fn test_transactions_require_user_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/transactions").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "MISSING_PARAMETER");
}

#[tokio::test]
async fn test_transactions_empty_for_fresh_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = AuthRequest::unique();
    server.post("/api/v1/auth/telegram", &user).await.unwrap();

    let response = server
        .get(&format!("/api/v1/transactions?user_id={}", user.user.id))
        .await
        .unwrap();
    let ledger: TransactionsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ledger.transactions.is_empty());
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/1").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_get_user_rejects_malformed_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_wallet_connect_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = AuthRequest::unique();
    server.post("/api/v1/auth/telegram", &user).await.unwrap();

    let request = ConnectWalletBody {
        telegram_id: Some(user.user.id),
        wallet_address: Some("EQIntegrationWallet".to_string()),
    };
    let response = server.post("/api/v1/users/wallet", &request).await.unwrap();
    let body: WalletConnectBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Wallet connected");

    let response = server
        .get(&format!("/api/v1/users/{}", user.user.id))
        .await
        .unwrap();
    let detail: UserDetailBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.user.wallet_address.as_deref(), Some("EQIntegrationWallet"));
}

#[tokio::test]
async fn test_wallet_connect_missing_address_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = AuthRequest::unique();
    server.post("/api/v1/auth/telegram", &user).await.unwrap();

    let request = ConnectWalletBody {
        telegram_id: Some(user.user.id),
        wallet_address: None,
    };
    let response = server.post("/api/v1/users/wallet", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "MISSING_PARAMETER");
}
