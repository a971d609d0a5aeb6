//! # ProjectRepository
//!
//! プロジェクトの一覧取得と作成を担当するリポジトリ。
//! 更新・削除は提供しない。

use async_trait::async_trait;
use chrono::NaiveDateTime;
use taskboard_domain::project::{NewProject, Project, ProjectId, ProjectName};

use crate::{db::PgConnector, error::InfraError};

/// プロジェクトリポジトリトレイト
#[async_trait]
pub trait ProjectRepository: Send + Sync {
   /// すべてのプロジェクトを ID 順に取得する
   async fn find_all(&self) -> Result<Vec<Project>, InfraError>;

   /// プロジェクトを作成し、採番された ID を含めて返す
   async fn insert(&self, project: NewProject) -> Result<Project, InfraError>;
}

/// PostgreSQL 実装の ProjectRepository
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
   connector: PgConnector,
}

impl PostgresProjectRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(connector: PgConnector) -> Self {
      Self { connector }
   }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
   id:          i32,
   name:        String,
   description: Option<String>,
   created_at:  NaiveDateTime,
}

impl From<ProjectRow> for Project {
   fn from(row: ProjectRow) -> Self {
      Project::from_db(
         ProjectId::from_i32(row.id),
         ProjectName::from_db(row.name),
         row.description.unwrap_or_default(),
         row.created_at,
      )
   }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Project>, InfraError> {
      let mut conn = self.connector.acquire().await?;

      let result = sqlx::query_as::<_, ProjectRow>(
         r#"
            SELECT id, name, description, created_at
            FROM projects
            ORDER BY id
            "#,
      )
      .fetch_all(&mut *conn)
      .await;
      conn.release().await;

      Ok(result?.into_iter().map(Project::from).collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(name = %project.name()))]
   async fn insert(&self, project: NewProject) -> Result<Project, InfraError> {
      let mut conn = self.connector.acquire().await?;

      let result = sqlx::query_as::<_, (i32, NaiveDateTime)>(
         r#"
            INSERT INTO projects (name, description)
            VALUES ($1, $2)
            RETURNING id, created_at
            "#,
      )
      .bind(project.name().as_str())
      .bind(project.description())
      .fetch_one(&mut *conn)
      .await;
      conn.release().await;

      let (id, created_at) = result?;
      Ok(Project::created(project, ProjectId::from_i32(id), created_at))
   }
}
