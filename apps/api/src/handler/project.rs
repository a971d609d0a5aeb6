//! # プロジェクト API ハンドラ
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/projects` | プロジェクト一覧 |
//! | POST | `/projects` | プロジェクト作成 |

use std::sync::Arc;

use axum::{
   Json,
   extract::{State, rejection::JsonRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use taskboard_domain::project::{NewProject, Project};
use taskboard_infra::repository::ProjectRepository;

use crate::error::ApiError;

/// プロジェクトハンドラーの State
pub struct ProjectState<R> {
   pub repository: R,
}

/// プロジェクト作成リクエスト
///
/// 必須チェックはドメイン層で行うため、すべて `Option` で受け取る。
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
   pub name:        Option<String>,
   pub description: Option<String>,
}

/// プロジェクト一覧の要素 DTO
#[derive(Debug, Serialize)]
pub struct ProjectDto {
   pub id:          i32,
   pub name:        String,
   pub description: String,
}

impl From<&Project> for ProjectDto {
   fn from(project: &Project) -> Self {
      Self {
         id:          project.id().as_i32(),
         name:        project.name().to_string(),
         description: project.description().to_string(),
      }
   }
}

/// プロジェクト作成レスポンス DTO
#[derive(Debug, Serialize)]
pub struct CreatedProjectDto {
   #[serde(flatten)]
   pub project: ProjectDto,
   pub message: &'static str,
}

/// プロジェクト一覧を取得する
///
/// ## エンドポイント
/// GET /projects
pub async fn list_projects<R>(
   State(state): State<Arc<ProjectState<R>>>,
) -> Result<Json<Vec<ProjectDto>>, ApiError>
where
   R: ProjectRepository,
{
   let projects = state.repository.find_all().await?;

   Ok(Json(projects.iter().map(ProjectDto::from).collect()))
}

/// プロジェクトを作成する
///
/// ## エンドポイント
/// POST /projects
///
/// `name` が無い場合はストアにアクセスせず 400 を返す。
pub async fn create_project<R>(
   State(state): State<Arc<ProjectState<R>>>,
   payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<Response, ApiError>
where
   R: ProjectRepository,
{
   let Json(request) = payload?;
   let new_project = NewProject::new(request.name, request.description)?;

   let project = state.repository.insert(new_project).await?;
   tracing::info!(
      project_id = %project.id(),
      created_at = %project.created_at(),
      "プロジェクトを作成しました"
   );

   let response = CreatedProjectDto {
      project: ProjectDto::from(&project),
      message: "Project created",
   };

   Ok((StatusCode::CREATED, Json(response)).into_response())
}
