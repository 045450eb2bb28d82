//! Task handlers
//!
//! Endpoints for listing tasks and completing them for a reward.

use axum::{extract::State, Json};
use gemdrop_core::TelegramId;
use gemdrop_service::{
    dto::{CompleteTaskRequest, CompleteTaskResponse, TasksResponse},
    TaskService,
};

use crate::extractors::{TaskListQuery, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List active tasks with the caller's completion records
///
/// GET /tasks?user_id={id}
pub async fn list_tasks(
    State(state): State<AppState>,
    query: TaskListQuery,
) -> ApiResult<Json<TasksResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service.list_tasks(query.user_id).await?;
    Ok(Json(response))
}

/// Complete a task and credit its reward
///
/// POST /tasks/complete
pub async fn complete_task(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CompleteTaskRequest>,
) -> ApiResult<Json<CompleteTaskResponse>> {
    let service = TaskService::new(state.service_context());
    let response = service
        .complete_task(TelegramId::new(request.user_id), request.task_id)
        .await?;
    Ok(Json(response))
}
