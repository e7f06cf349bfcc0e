use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::NewTask;
use crate::services::DatabaseService;

/// Every task row, as JSON. There is no per-account filtering.
pub async fn list_tasks(
    State((database, _)): State<(DatabaseService, Config)>,
) -> AppResult<Response> {
    let tasks = database.get_tasks().await?;
    tracing::debug!("Listing {} tasks", tasks.len());
    Ok(Json(tasks).into_response())
}

pub async fn create_task(
    State((database, _)): State<(DatabaseService, Config)>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> AppResult<Response> {
    let Json(new_task) = payload.map_err(|e| AppError::Input(e.to_string()))?;

    database.save_task(&new_task).await?;
    tracing::info!("Created task: {}", new_task.text);
    Ok((StatusCode::CREATED, "Task created").into_response())
}

pub async fn delete_all_tasks(
    State((database, _)): State<(DatabaseService, Config)>,
) -> AppResult<Response> {
    database.delete_all_tasks().await?;
    tracing::info!("Deleted all tasks");
    Ok("All tasks deleted".into_response())
}

/// Removing an id that no longer exists still succeeds.
pub async fn delete_task(
    State((database, _)): State<(DatabaseService, Config)>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    database.delete_task(id).await?;
    tracing::info!("Deleted task {}", id);
    Ok("Task deleted".into_response())
}
