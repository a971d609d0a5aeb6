//! # TaskRepository
//!
//! タスクの一覧取得、作成、完了状態の更新を担当するリポジトリ。
//!
//! ## 完了状態の更新
//!
//! `UPDATE ... RETURNING` により、更新とタイトルの取得を 1 往復で行う。
//! 該当行が無い場合は `None` を返し、何も変更されない。
//! 同じタスクへの同時更新はストア側で後勝ちとなる。

use async_trait::async_trait;
use chrono::NaiveDateTime;
use taskboard_domain::{
   project::ProjectId,
   task::{CompletionChange, CompletionUpdate, NewTask, Task, TaskId, TaskTitle},
};

use crate::{db::PgConnector, error::InfraError};

/// タスクリポジトリトレイト
#[async_trait]
pub trait TaskRepository: Send + Sync {
   /// プロジェクトに属するタスクを ID 順に取得する
   ///
   /// プロジェクトが存在しない場合は空の一覧を返す。
   async fn find_by_project(&self, project_id: ProjectId) -> Result<Vec<Task>, InfraError>;

   /// 未完了のタスクを作成し、採番された ID を含めて返す
   async fn insert(&self, task: NewTask) -> Result<Task, InfraError>;

   /// 完了状態を更新する
   ///
   /// 該当するタスクが存在しない場合は `None` を返す。
   async fn update_completed(
      &self,
      update: CompletionUpdate,
   ) -> Result<Option<CompletionChange>, InfraError>;
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
   connector: PgConnector,
}

impl PostgresTaskRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(connector: PgConnector) -> Self {
      Self { connector }
   }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
   id:         i32,
   project_id: i32,
   title:      String,
   completed:  bool,
   created_at: NaiveDateTime,
}

impl From<TaskRow> for Task {
   fn from(row: TaskRow) -> Self {
      Task::from_db(
         TaskId::from_i32(row.id),
         ProjectId::from_i32(row.project_id),
         TaskTitle::from_db(row.title),
         row.completed,
         row.created_at,
      )
   }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(%project_id))]
   async fn find_by_project(&self, project_id: ProjectId) -> Result<Vec<Task>, InfraError> {
      let mut conn = self.connector.acquire().await?;

      let result = sqlx::query_as::<_, TaskRow>(
         r#"
            SELECT id, project_id, title, completed, created_at
            FROM tasks
            WHERE project_id = $1
            ORDER BY id
            "#,
      )
      .bind(project_id.as_i32())
      .fetch_all(&mut *conn)
      .await;
      conn.release().await;

      Ok(result?.into_iter().map(Task::from).collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(project_id = %task.project_id()))]
   async fn insert(&self, task: NewTask) -> Result<Task, InfraError> {
      let mut conn = self.connector.acquire().await?;

      let result = sqlx::query_as::<_, (i32, NaiveDateTime)>(
         r#"
            INSERT INTO tasks (project_id, title, completed)
            VALUES ($1, $2, FALSE)
            RETURNING id, created_at
            "#,
      )
      .bind(task.project_id().as_i32())
      .bind(task.title().as_str())
      .fetch_one(&mut *conn)
      .await;
      conn.release().await;

      let (id, created_at) = result?;
      Ok(Task::created(task, TaskId::from_i32(id), created_at))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(task_id = %update.task_id()))]
   async fn update_completed(
      &self,
      update: CompletionUpdate,
   ) -> Result<Option<CompletionChange>, InfraError> {
      let mut conn = self.connector.acquire().await?;

      let result = sqlx::query_as::<_, (i32, String, bool)>(
         r#"
            UPDATE tasks
            SET completed = $1
            WHERE id = $2
            RETURNING id, title, completed
            "#,
      )
      .bind(update.completed())
      .bind(update.task_id().as_i32())
      .fetch_optional(&mut *conn)
      .await;
      conn.release().await;

      let Some((id, title, completed)) = result? else {
         return Ok(None);
      };

      Ok(Some(CompletionChange {
         id: TaskId::from_i32(id),
         title: TaskTitle::from_db(title),
         completed,
      }))
   }
}
