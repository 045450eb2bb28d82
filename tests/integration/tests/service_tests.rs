//! Service-level tests over in-memory repositories
//!
//! These run without any external services and cover the reward,
//! referral, and ledger rules end to end at the service layer.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use integration_tests::memory_context;

use gemdrop_core::{
    Task, TelegramId, TransactionKind, UserRepository, UserTaskRepository, VerificationType,
};
use gemdrop_service::dto::{TelegramAuthRequest, TelegramUserPayload};
use gemdrop_service::{AuthService, ServiceContext, TaskService, TransactionService, UserService};

fn auth_request(id: i64, start_param: Option<String>) -> TelegramAuthRequest {
    TelegramAuthRequest {
        user: TelegramUserPayload {
            id,
            username: Some(format!("user{id}")),
            first_name: "Test".to_string(),
            last_name: None,
        },
        start_param,
    }
}

fn make_task(ctx: &ServiceContext, reward: i64) -> Task {
    Task::new(
        ctx.generate_id(),
        format!("Task worth {reward}"),
        "Visit the page".to_string(),
        reward,
        Some("https://example.com".to_string()),
        VerificationType::UrlVisit,
    )
}

// ============================================================================
// Registration and Referrals
// ============================================================================

#[tokio::test]
async fn test_new_user_starts_with_zero_state() {
    let (ctx, _store) = memory_context();
    let auth = AuthService::new(&ctx);

    let response = auth.authenticate(auth_request(100, None)).await.unwrap();

    assert_eq!(response.user.telegram_id, 100);
    assert_eq!(response.user.diamonds, 0);
    assert!(response.user.referrals.is_empty());
    assert!(response.user.referrer_id.is_none());
    assert!(!response.user.is_banned);
}

#[tokio::test]
async fn test_returning_user_is_not_duplicated() {
    let (ctx, store) = memory_context();
    let auth = AuthService::new(&ctx);

    auth.authenticate(auth_request(100, None)).await.unwrap();
    store
        .increment_diamonds(TelegramId::new(100), 50)
        .await
        .unwrap();

    // Second authentication must return the stored state untouched
    let response = auth.authenticate(auth_request(100, None)).await.unwrap();
    assert_eq!(response.user.diamonds, 50);
}

#[tokio::test]
async fn test_referral_links_both_sides() {
    let (ctx, store) = memory_context();
    let auth = AuthService::new(&ctx);

    auth.authenticate(auth_request(100, None)).await.unwrap();
    let response = auth
        .authenticate(auth_request(200, Some("100".to_string())))
        .await
        .unwrap();

    assert_eq!(response.user.referrer_id, Some(100));
    let referrer = store.user(TelegramId::new(100)).unwrap();
    assert_eq!(referrer.referrals, vec![TelegramId::new(200)]);
}

#[tokio::test]
async fn test_self_referral_is_ignored() {
    let (ctx, store) = memory_context();
    let auth = AuthService::new(&ctx);

    let response = auth
        .authenticate(auth_request(100, Some("100".to_string())))
        .await
        .unwrap();

    assert!(response.user.referrer_id.is_none());
    assert!(store.user(TelegramId::new(100)).unwrap().referrals.is_empty());
}

#[tokio::test]
async fn test_unparseable_start_param_is_ignored() {
    let (ctx, _store) = memory_context();
    let auth = AuthService::new(&ctx);

    let response = auth
        .authenticate(auth_request(100, Some("not-a-number".to_string())))
        .await
        .unwrap();

    assert!(response.user.referrer_id.is_none());
}

#[tokio::test]
async fn test_dangling_referrer_does_not_fail_registration() {
    let (ctx, _store) = memory_context();
    let auth = AuthService::new(&ctx);

    // Referrer 999 has never registered
    let response = auth
        .authenticate(auth_request(100, Some("999".to_string())))
        .await
        .unwrap();

    assert_eq!(response.user.referrer_id, Some(999));
    assert_eq!(response.user.diamonds, 0);
}

// ============================================================================
// Task Completion and Rewards
// ============================================================================

#[tokio::test]
async fn test_completing_a_task_credits_the_reward() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let task = make_task(&ctx, 100);
    store.insert_task(task.clone());

    let response = TaskService::new(&ctx)
        .complete_task(TelegramId::new(100), task.id)
        .await
        .unwrap();

    assert_eq!(response.reward, 100);
    assert_eq!(store.user(TelegramId::new(100)).unwrap().diamonds, 100);

    let ledger = TransactionService::new(&ctx)
        .list_transactions(TelegramId::new(100), None)
        .await
        .unwrap();
    assert_eq!(ledger.transactions.len(), 1);
    assert_eq!(ledger.transactions[0].kind, TransactionKind::TaskReward);
    assert_eq!(ledger.transactions[0].amount, 100);
}

#[tokio::test]
async fn test_unregistered_user_cannot_complete_tasks() {
    let (ctx, store) = memory_context();

    let task = make_task(&ctx, 100);
    store.insert_task(task.clone());

    let err = TaskService::new(&ctx)
        .complete_task(TelegramId::new(999), task.id)
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "UNKNOWN_USER");
    assert_eq!(err.status_code(), 404);
    assert_eq!(store.ledger_len(TelegramId::new(999)), 0);
    let records = store.list_by_user(TelegramId::new(999)).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_second_completion_is_rejected_without_side_effects() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let task = make_task(&ctx, 100);
    store.insert_task(task.clone());

    let tasks = TaskService::new(&ctx);
    tasks
        .complete_task(TelegramId::new(100), task.id)
        .await
        .unwrap();
    let err = tasks
        .complete_task(TelegramId::new(100), task.id)
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "TASK_ALREADY_COMPLETED");
    assert_eq!(err.status_code(), 400);
    assert_eq!(store.user(TelegramId::new(100)).unwrap().diamonds, 100);
    assert_eq!(store.ledger_len(TelegramId::new(100)), 1);
}

#[tokio::test]
async fn test_unknown_task_is_not_found() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let err = TaskService::new(&ctx)
        .complete_task(TelegramId::new(100), ctx.generate_id())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "UNKNOWN_TASK");
    assert_eq!(err.status_code(), 404);
    assert_eq!(store.user(TelegramId::new(100)).unwrap().diamonds, 0);
    assert_eq!(store.ledger_len(TelegramId::new(100)), 0);
}

#[tokio::test]
async fn test_inactive_task_is_hidden_and_not_completable() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let mut task = make_task(&ctx, 100);
    task.is_active = false;
    store.insert_task(task.clone());

    let tasks = TaskService::new(&ctx);
    let listing = tasks.list_tasks(None).await.unwrap();
    assert!(listing.tasks.is_empty());

    let err = tasks
        .complete_task(TelegramId::new(100), task.id)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_TASK");
}

#[tokio::test]
async fn test_listing_includes_caller_completions() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let task = make_task(&ctx, 10);
    store.insert_task(task.clone());

    let tasks = TaskService::new(&ctx);
    tasks
        .complete_task(TelegramId::new(100), task.id)
        .await
        .unwrap();

    let listing = tasks.list_tasks(Some(TelegramId::new(100))).await.unwrap();
    assert_eq!(listing.tasks.len(), 1);
    assert_eq!(listing.user_tasks.len(), 1);
    assert_eq!(listing.user_tasks[0].user_id, 100);

    // Another caller sees the task but no completion records
    let listing = tasks.list_tasks(Some(TelegramId::new(777))).await.unwrap();
    assert_eq!(listing.tasks.len(), 1);
    assert!(listing.user_tasks.is_empty());
}

// ============================================================================
// Referral Bonuses
// ============================================================================

#[tokio::test]
async fn test_referrer_earns_ten_percent_bonus() {
    let (ctx, store) = memory_context();
    let auth = AuthService::new(&ctx);
    auth.authenticate(auth_request(100, None)).await.unwrap();
    auth.authenticate(auth_request(200, Some("100".to_string())))
        .await
        .unwrap();

    let task = make_task(&ctx, 100);
    store.insert_task(task.clone());

    TaskService::new(&ctx)
        .complete_task(TelegramId::new(200), task.id)
        .await
        .unwrap();

    assert_eq!(store.user(TelegramId::new(200)).unwrap().diamonds, 100);
    assert_eq!(store.user(TelegramId::new(100)).unwrap().diamonds, 10);

    let ledger = TransactionService::new(&ctx)
        .list_transactions(TelegramId::new(100), None)
        .await
        .unwrap();
    assert_eq!(ledger.transactions.len(), 1);
    assert_eq!(ledger.transactions[0].kind, TransactionKind::ReferralBonus);
    assert_eq!(ledger.transactions[0].amount, 10);
}

#[tokio::test]
async fn test_small_reward_pays_no_bonus() {
    let (ctx, store) = memory_context();
    let auth = AuthService::new(&ctx);
    auth.authenticate(auth_request(100, None)).await.unwrap();
    auth.authenticate(auth_request(200, Some("100".to_string())))
        .await
        .unwrap();

    // 10% of 5 floors to zero; no credit and no ledger entry
    let task = make_task(&ctx, 5);
    store.insert_task(task.clone());

    TaskService::new(&ctx)
        .complete_task(TelegramId::new(200), task.id)
        .await
        .unwrap();

    assert_eq!(store.user(TelegramId::new(100)).unwrap().diamonds, 0);
    assert_eq!(store.ledger_len(TelegramId::new(100)), 0);
}

#[tokio::test]
async fn test_no_referrer_means_no_bonus_entry() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let task = make_task(&ctx, 100);
    store.insert_task(task.clone());

    TaskService::new(&ctx)
        .complete_task(TelegramId::new(100), task.id)
        .await
        .unwrap();

    assert_eq!(store.ledger_len(TelegramId::new(100)), 1);
}

// ============================================================================
// Transaction Listing
// ============================================================================

#[tokio::test]
async fn test_transactions_are_newest_first_and_limited() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let tasks = TaskService::new(&ctx);
    for reward in 1..=5 {
        let task = make_task(&ctx, reward);
        store.insert_task(task.clone());
        tasks
            .complete_task(TelegramId::new(100), task.id)
            .await
            .unwrap();
    }

    let ledger = TransactionService::new(&ctx)
        .list_transactions(TelegramId::new(100), Some(2))
        .await
        .unwrap();
    assert_eq!(ledger.transactions.len(), 2);
    assert_eq!(ledger.transactions[0].amount, 5);
    assert_eq!(ledger.transactions[1].amount, 4);
}

#[tokio::test]
async fn test_transaction_limit_is_clamped() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let tasks = TaskService::new(&ctx);
    for reward in 1..=3 {
        let task = make_task(&ctx, reward);
        store.insert_task(task.clone());
        tasks
            .complete_task(TelegramId::new(100), task.id)
            .await
            .unwrap();
    }

    let service = TransactionService::new(&ctx);

    // A zero limit is raised to one
    let ledger = service
        .list_transactions(TelegramId::new(100), Some(0))
        .await
        .unwrap();
    assert_eq!(ledger.transactions.len(), 1);

    // An oversized limit is capped, not rejected
    let ledger = service
        .list_transactions(TelegramId::new(100), Some(10_000))
        .await
        .unwrap();
    assert_eq!(ledger.transactions.len(), 3);
}

// ============================================================================
// Wallet Connect
// ============================================================================

#[tokio::test]
async fn test_wallet_connect_stores_the_address() {
    let (ctx, store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let request = gemdrop_service::dto::ConnectWalletRequest {
        telegram_id: Some(100),
        wallet_address: Some("EQTestWalletAddress".to_string()),
    };
    let response = UserService::new(&ctx).connect_wallet(request).await.unwrap();

    assert_eq!(response.message, "Wallet connected");
    assert_eq!(
        store.user(TelegramId::new(100)).unwrap().wallet_address.as_deref(),
        Some("EQTestWalletAddress")
    );
}

#[tokio::test]
async fn test_wallet_connect_requires_both_fields() {
    let (ctx, _store) = memory_context();

    let request = gemdrop_service::dto::ConnectWalletRequest {
        telegram_id: Some(100),
        wallet_address: None,
    };
    let err = UserService::new(&ctx).connect_wallet(request).await.unwrap_err();
    assert_eq!(err.error_code(), "MISSING_PARAMETER");
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_wallet_connect_unknown_user_is_not_found() {
    let (ctx, _store) = memory_context();

    let request = gemdrop_service::dto::ConnectWalletRequest {
        telegram_id: Some(424_242),
        wallet_address: Some("EQTestWalletAddress".to_string()),
    };
    let err = UserService::new(&ctx).connect_wallet(request).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_USER");
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_get_user_returns_stored_profile() {
    let (ctx, _store) = memory_context();
    AuthService::new(&ctx)
        .authenticate(auth_request(100, None))
        .await
        .unwrap();

    let response = UserService::new(&ctx)
        .get_user(TelegramId::new(100))
        .await
        .unwrap();
    assert_eq!(response.user.telegram_id, 100);

    let err = UserService::new(&ctx)
        .get_user(TelegramId::new(404))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_USER");
}
