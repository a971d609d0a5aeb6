//! # TaskBoard API サーバー
//!
//! プロジェクトとタスクの CRUD を提供する HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Client    │────▶│ TaskBoard   │────▶│ PostgreSQL  │
//! │             │     │ (port 5000) │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ハンドラはリクエストごとに接続を開き、1〜2 個の SQL 文を実行して接続を閉じる。
//! ハンドラとデータベースの間にサービス層は置かない。
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use taskboard_api::build_router;
//! use taskboard_infra::mock::MockStore;
//!
//! let store = MockStore::new();
//! let app = build_router(store.clone(), store.clone(), store);
//! ```

pub mod config;
pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, put},
};
use handler::{
   HealthState,
   ProjectState,
   TaskState,
   create_project,
   create_task,
   health_check,
   list_projects,
   list_tasks,
   update_task,
};
use taskboard_infra::{
   DatabaseProbe,
   repository::{ProjectRepository, TaskRepository},
};
use tower_http::trace::TraceLayer;

/// ルーターを構築する
///
/// ストアクライアントは起動時に一度だけ構築し、ここで各ハンドラの State に渡す。
/// テストではインメモリ実装を渡す。
///
/// | メソッド | パス |
/// |---------|------|
/// | GET | `/health` |
/// | GET, POST | `/projects` |
/// | GET, POST | `/projects/{id}/tasks` |
/// | PUT | `/tasks/{id}` |
pub fn build_router<P, T, D>(projects: P, tasks: T, probe: D) -> Router
where
   P: ProjectRepository + 'static,
   T: TaskRepository + 'static,
   D: DatabaseProbe + 'static,
{
   let health_state = Arc::new(HealthState { probe });
   let project_state = Arc::new(ProjectState {
      repository: projects,
   });
   let task_state = Arc::new(TaskState { repository: tasks });

   Router::new()
      .route("/health", get(health_check::<D>))
      .with_state(health_state)
      .route(
         "/projects",
         get(list_projects::<P>).post(create_project::<P>),
      )
      .with_state(project_state)
      .route(
         "/projects/{id}/tasks",
         get(list_tasks::<T>).post(create_task::<T>),
      )
      .route("/tasks/{id}", put(update_task::<T>))
      .with_state(task_state)
      // TraceLayer により、すべての HTTP リクエストがトレーシングされる
      .layer(TraceLayer::new_for_http())
}
