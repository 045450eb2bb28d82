//! Authentication handlers
//!
//! Endpoint for resolving the Telegram WebApp identity into an account.

use axum::{extract::State, Json};
use gemdrop_service::{
    dto::{AuthResponse, TelegramAuthRequest},
    AuthService,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Authenticate a Telegram user, creating the account on first contact
///
/// POST /auth/telegram
pub async fn telegram_auth(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TelegramAuthRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.authenticate(request).await?;
    Ok(Json(response))
}
