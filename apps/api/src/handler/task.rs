//! # タスク API ハンドラ
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/projects/{id}/tasks` | プロジェクトのタスク一覧 |
//! | POST | `/projects/{id}/tasks` | タスク作成 |
//! | PUT | `/tasks/{id}` | 完了状態の更新 |

use std::sync::Arc;

use axum::{
   Json,
   extract::{
      Path,
      State,
      rejection::{JsonRejection, PathRejection},
   },
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use taskboard_domain::{
   DomainError,
   project::ProjectId,
   task::{CompletionUpdate, NewTask, Task, TaskId},
};
use taskboard_infra::repository::TaskRepository;

use crate::error::ApiError;

/// タスクハンドラーの State
pub struct TaskState<R> {
   pub repository: R,
}

/// タスク作成リクエスト
///
/// `completed` が含まれていても受け取らない。作成時は常に未完了。
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
   pub title: Option<String>,
}

/// 完了状態の更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
   pub completed: Option<bool>,
}

/// タスク一覧の要素 DTO
#[derive(Debug, Serialize)]
pub struct TaskDto {
   pub id:        i32,
   pub title:     String,
   pub completed: bool,
}

impl From<&Task> for TaskDto {
   fn from(task: &Task) -> Self {
      Self {
         id:        task.id().as_i32(),
         title:     task.title().to_string(),
         completed: task.is_completed(),
      }
   }
}

/// タスク作成レスポンス DTO
#[derive(Debug, Serialize)]
pub struct CreatedTaskDto {
   pub id:         i32,
   pub project_id: i32,
   pub title:      String,
   pub completed:  bool,
   pub message:    &'static str,
}

/// 完了状態の更新レスポンス DTO
#[derive(Debug, Serialize)]
pub struct UpdatedTaskDto {
   #[serde(flatten)]
   pub task:    TaskDto,
   pub message: &'static str,
}

/// プロジェクトのタスク一覧を取得する
///
/// ## エンドポイント
/// GET /projects/{id}/tasks
///
/// プロジェクトの存在確認は行わず、該当が無ければ空配列を返す。
pub async fn list_tasks<R>(
   State(state): State<Arc<TaskState<R>>>,
   path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
   R: TaskRepository,
{
   let Path(project_id) = path?;
   let tasks = state
      .repository
      .find_by_project(ProjectId::from_i32(project_id))
      .await?;

   Ok(Json(tasks.iter().map(TaskDto::from).collect()))
}

/// タスクを作成する
///
/// ## エンドポイント
/// POST /projects/{id}/tasks
pub async fn create_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   path: Result<Path<i32>, PathRejection>,
   payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Response, ApiError>
where
   R: TaskRepository,
{
   let Path(project_id) = path?;
   let Json(request) = payload?;
   let new_task = NewTask::new(ProjectId::from_i32(project_id), request.title)?;

   let task = state.repository.insert(new_task).await?;
   tracing::info!(
      task_id = %task.id(),
      %project_id,
      created_at = %task.created_at(),
      "タスクを作成しました"
   );

   let response = CreatedTaskDto {
      id:         task.id().as_i32(),
      project_id: task.project_id().as_i32(),
      title:      task.title().to_string(),
      completed:  task.is_completed(),
      message:    "Task created",
   };

   Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// タスクの完了状態を更新する
///
/// ## エンドポイント
/// PUT /tasks/{id}
///
/// 該当するタスクが無い場合は 404 を返し、何も変更しない。
pub async fn update_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   path: Result<Path<i32>, PathRejection>,
   payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<UpdatedTaskDto>, ApiError>
where
   R: TaskRepository,
{
   let Path(task_id) = path?;
   let Json(request) = payload?;
   let task_id = TaskId::from_i32(task_id);
   let update = CompletionUpdate::new(task_id, request.completed)?;

   let change = state
      .repository
      .update_completed(update)
      .await?
      .ok_or_else(|| DomainError::NotFound {
         entity_type: "Task",
         id:          task_id.to_string(),
      })?;
   tracing::info!(%task_id, completed = change.completed, "タスクの完了状態を更新しました");

   Ok(Json(UpdatedTaskDto {
      task:    TaskDto {
         id:        change.id.as_i32(),
         title:     change.title.into_string(),
         completed: change.completed,
      },
      message: "Task updated",
   }))
}
