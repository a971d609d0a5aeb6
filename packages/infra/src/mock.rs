//! # テスト用モックストア
//!
//! ハンドラテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! taskboard-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 1 つの [`MockStore`] が [`ProjectRepository`]、[`TaskRepository`]、[`DatabaseProbe`]
//! をすべて実装し、`Clone` したインスタンス間で状態を共有する。
//! 外部キー制約も再現するため、存在しないプロジェクトへのタスク作成は失敗する。

use std::{
   io,
   sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use taskboard_domain::{
   project::{NewProject, Project, ProjectId},
   task::{CompletionChange, CompletionUpdate, NewTask, Task, TaskId},
};

use crate::{
   error::InfraError,
   probe::DatabaseProbe,
   repository::{ProjectRepository, TaskRepository},
};

/// モックストアの障害モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockFailure {
   /// 正常に動作する
   #[default]
   None,
   /// 接続確立に失敗する
   Connection,
   /// 接続はできるが文の実行に失敗する
   Query,
}

#[derive(Default)]
struct MockState {
   projects: Vec<Project>,
   tasks:    Vec<Task>,
   failure:  MockFailure,
   /// ストアにアクセスした回数（接続の取得回数に相当）
   accesses: usize,
}

impl MockState {
   /// 障害モードに応じて接続取得と文の実行をシミュレートする
   fn access(&mut self) -> Result<(), InfraError> {
      self.accesses += 1;
      match self.failure {
         MockFailure::None => Ok(()),
         MockFailure::Connection => Err(InfraError::Connection(sqlx::Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
         )))),
         MockFailure::Query => Err(InfraError::Database(sqlx::Error::Protocol(
            "relation does not exist".to_string(),
         ))),
      }
   }
}

#[derive(Clone, Default)]
pub struct MockStore {
   state: Arc<Mutex<MockState>>,
}

impl MockStore {
   pub fn new() -> Self {
      Self::default()
   }

   /// 障害モードを切り替える
   pub fn set_failure(&self, failure: MockFailure) {
      self.state.lock().unwrap().failure = failure;
   }

   /// ストアにアクセスした回数
   pub fn access_count(&self) -> usize {
      self.state.lock().unwrap().accesses
   }

   /// 保存済みのプロジェクト
   pub fn projects(&self) -> Vec<Project> {
      self.state.lock().unwrap().projects.clone()
   }

   /// 保存済みのタスク
   pub fn tasks(&self) -> Vec<Task> {
      self.state.lock().unwrap().tasks.clone()
   }
}

fn now() -> NaiveDateTime {
   Utc::now().naive_utc()
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
   ids.max().unwrap_or(0) + 1
}

#[async_trait]
impl ProjectRepository for MockStore {
   async fn find_all(&self) -> Result<Vec<Project>, InfraError> {
      let mut state = self.state.lock().unwrap();
      state.access()?;
      Ok(state.projects.clone())
   }

   async fn insert(&self, project: NewProject) -> Result<Project, InfraError> {
      let mut state = self.state.lock().unwrap();
      state.access()?;
      let id = next_id(state.projects.iter().map(|p| p.id().as_i32()));
      let project = Project::created(project, ProjectId::from_i32(id), now());
      state.projects.push(project.clone());
      Ok(project)
   }
}

#[async_trait]
impl TaskRepository for MockStore {
   async fn find_by_project(&self, project_id: ProjectId) -> Result<Vec<Task>, InfraError> {
      let mut state = self.state.lock().unwrap();
      state.access()?;
      Ok(state
         .tasks
         .iter()
         .filter(|t| t.project_id() == project_id)
         .cloned()
         .collect())
   }

   async fn insert(&self, task: NewTask) -> Result<Task, InfraError> {
      let mut state = self.state.lock().unwrap();
      state.access()?;
      if !state.projects.iter().any(|p| p.id() == task.project_id()) {
         return Err(InfraError::Database(sqlx::Error::Protocol(format!(
            "insert or update on table \"tasks\" violates foreign key constraint: project_id={}",
            task.project_id()
         ))));
      }
      let id = next_id(state.tasks.iter().map(|t| t.id().as_i32()));
      let task = Task::created(task, TaskId::from_i32(id), now());
      state.tasks.push(task.clone());
      Ok(task)
   }

   async fn update_completed(
      &self,
      update: CompletionUpdate,
   ) -> Result<Option<CompletionChange>, InfraError> {
      let mut state = self.state.lock().unwrap();
      state.access()?;
      Ok(state
         .tasks
         .iter_mut()
         .find(|t| t.id() == update.task_id())
         .map(|t| t.set_completed(update.completed())))
   }
}

#[async_trait]
impl DatabaseProbe for MockStore {
   async fn ping(&self) -> Result<(), InfraError> {
      self.state.lock().unwrap().access()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn new_project(name: &str) -> NewProject {
      NewProject::new(Some(name.to_string()), None).unwrap()
   }

   #[tokio::test]
   async fn test_insertはidを1から採番する() {
      let sut = MockStore::new();

      let first = ProjectRepository::insert(&sut, new_project("A")).await.unwrap();
      let second = ProjectRepository::insert(&sut, new_project("B")).await.unwrap();

      assert_eq!(first.id(), ProjectId::from_i32(1));
      assert_eq!(second.id(), ProjectId::from_i32(2));
   }

   #[tokio::test]
   async fn test_存在しないプロジェクトへのタスク作成は外部キー違反になる() {
      let sut = MockStore::new();
      let task = NewTask::new(ProjectId::from_i32(99), Some("T".to_string())).unwrap();

      let result = TaskRepository::insert(&sut, task).await;

      assert!(matches!(result, Err(InfraError::Database(_))));
      assert!(sut.tasks().is_empty());
   }

   #[tokio::test]
   async fn test_障害モードconnectionではpingが接続エラーを返す() {
      let sut = MockStore::new();
      sut.set_failure(MockFailure::Connection);

      let result = sut.ping().await;

      assert!(matches!(result, Err(InfraError::Connection(_))));
   }

   #[tokio::test]
   async fn test_アクセス回数を記録する() {
      let sut = MockStore::new();

      sut.ping().await.unwrap();
      sut.find_all().await.unwrap();

      assert_eq!(sut.access_count(), 2);
   }
}
