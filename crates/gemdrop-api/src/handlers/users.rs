//! User handlers
//!
//! Endpoints for profile lookup and wallet linking.

use axum::{
    extract::{Path, State},
    Json,
};
use gemdrop_core::TelegramId;
use gemdrop_service::{
    dto::{ConnectWalletRequest, UserDetailResponse, WalletConnectResponse},
    UserService,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get user by Telegram id
///
/// GET /users/{telegram_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
) -> ApiResult<Json<UserDetailResponse>> {
    let telegram_id = TelegramId::parse(&telegram_id)
        .map_err(|_| ApiError::invalid_path("Invalid telegram_id format"))?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(telegram_id).await?;
    Ok(Json(response))
}

/// Link a TON wallet address to a user
///
/// POST /users/wallet
pub async fn connect_wallet(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConnectWalletRequest>,
) -> ApiResult<Json<WalletConnectResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.connect_wallet(request).await?;
    Ok(Json(response))
}
