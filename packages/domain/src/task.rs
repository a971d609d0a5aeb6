//! # タスク
//!
//! 1 つのプロジェクトに属する、タイトル付きの作業単位。
//!
//! ## 状態遷移
//!
//! タスクは「未完了」と「完了」の 2 状態のみを持つ。
//! 更新はどちらの状態からでもどちらの値にも設定でき、同じ値の再設定も許容する。
//!
//! ```text
//!  ┌────────────┐  completed = true   ┌────────────┐
//!  │ Incomplete │ ──────────────────▶ │  Complete  │
//!  │            │ ◀────────────────── │            │
//!  └────────────┘  completed = false  └────────────┘
//! ```
//!
//! 作成時は常に未完了となる。リクエストボディに `completed` が含まれていても無視する。

use chrono::NaiveDateTime;

use crate::{DomainError, project::ProjectId};

/// タスクタイトルの最大文字数（`VARCHAR(255)` に対応）
pub const TASK_TITLE_MAX_LENGTH: usize = 255;

define_serial_id! {
   /// タスクの一意識別子（`tasks.id`）
   pub struct TaskId;
}

define_validated_string! {
   /// タスクのタイトル（値オブジェクト）
   ///
   /// # バリデーション
   ///
   /// - 空文字列・空白のみではない（値は前後の空白も含めて受け取ったまま保持する）
   /// - 255 文字以内
   pub struct TaskTitle {
      label: "title",
      max_length: TASK_TITLE_MAX_LENGTH,
   }
}

/// 作成前のタスク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
   project_id: ProjectId,
   title:      TaskTitle,
}

impl NewTask {
   /// パスのプロジェクト ID とリクエストのタイトルから作成前のタスクを組み立てる
   ///
   /// プロジェクトの存在確認は行わない。参照整合性はストアの外部キー制約に委ねる。
   pub fn new(project_id: ProjectId, title: Option<String>) -> Result<Self, DomainError> {
      let title = TaskTitle::new(require_field!(title, "title")?)?;
      Ok(Self { project_id, title })
   }

   pub fn project_id(&self) -> ProjectId {
      self.project_id
   }

   pub fn title(&self) -> &TaskTitle {
      &self.title
   }
}

/// 永続化済みのタスク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
   id:         TaskId,
   project_id: ProjectId,
   title:      TaskTitle,
   completed:  bool,
   created_at: NaiveDateTime,
}

impl Task {
   /// データベースの行から復元する
   pub fn from_db(
      id: TaskId,
      project_id: ProjectId,
      title: TaskTitle,
      completed: bool,
      created_at: NaiveDateTime,
   ) -> Self {
      Self {
         id,
         project_id,
         title,
         completed,
         created_at,
      }
   }

   /// 採番された ID と作成日時を付与して永続化済みのタスクにする
   ///
   /// 作成直後のタスクは必ず未完了。
   pub fn created(new_task: NewTask, id: TaskId, created_at: NaiveDateTime) -> Self {
      Self {
         id,
         project_id: new_task.project_id,
         title: new_task.title,
         completed: false,
         created_at,
      }
   }

   /// 完了状態を設定する
   pub fn set_completed(&mut self, completed: bool) -> CompletionChange {
      self.completed = completed;
      CompletionChange {
         id: self.id,
         title: self.title.clone(),
         completed,
      }
   }

   pub fn id(&self) -> TaskId {
      self.id
   }

   pub fn project_id(&self) -> ProjectId {
      self.project_id
   }

   pub fn title(&self) -> &TaskTitle {
      &self.title
   }

   pub fn is_completed(&self) -> bool {
      self.completed
   }

   pub fn created_at(&self) -> NaiveDateTime {
      self.created_at
   }
}

/// 完了状態の更新要求
///
/// `completed` は必須の真偽値。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionUpdate {
   task_id:   TaskId,
   completed: bool,
}

impl CompletionUpdate {
   pub fn new(task_id: TaskId, completed: Option<bool>) -> Result<Self, DomainError> {
      Ok(Self {
         task_id,
         completed: require_field!(completed, "completed")?,
      })
   }

   pub fn task_id(&self) -> TaskId {
      self.task_id
   }

   pub fn completed(&self) -> bool {
      self.completed
   }
}

/// 完了状態を更新した結果
///
/// タイトルはレスポンスに含めるためだけに更新と同じ文で取得する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionChange {
   pub id:        TaskId,
   pub title:     TaskTitle,
   pub completed: bool,
}

#[cfg(test)]
mod tests {
   use chrono::DateTime;
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn test_now() -> NaiveDateTime {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap().naive_utc()
   }

   fn new_task(title: &str) -> NewTask {
      NewTask::new(ProjectId::from_i32(1), Some(title.to_string())).unwrap()
   }

   #[test]
   fn test_作成直後のタスクは未完了() {
      let sut = Task::created(new_task("T"), TaskId::from_i32(1), test_now());

      assert!(!sut.is_completed());
      assert_eq!(sut.title().as_str(), "T");
      assert_eq!(sut.project_id(), ProjectId::from_i32(1));
   }

   #[rstest]
   #[case::欠落(None)]
   #[case::空文字列(Some(""))]
   #[case::空白のみ(Some("\t "))]
   fn test_titleが無い場合はバリデーションエラー(#[case] title: Option<&str>) {
      let result = NewTask::new(ProjectId::from_i32(1), title.map(str::to_string));

      match result {
         Err(DomainError::Validation(msg)) => assert_eq!(msg, "title is required"),
         other => panic!("Validation エラーを期待したが {other:?} だった"),
      }
   }

   #[test]
   fn test_titleが255文字を超えるとバリデーションエラー() {
      let result = TaskTitle::new("x".repeat(TASK_TITLE_MAX_LENGTH + 1));

      match result {
         Err(DomainError::Validation(msg)) => {
            assert_eq!(msg, "title must be at most 255 characters")
         }
         other => panic!("Validation エラーを期待したが {other:?} だった"),
      }
   }

   #[test]
   fn test_titleは前後の空白を含めて受け取ったまま保持する() {
      let sut = new_task("  T ");

      assert_eq!(sut.title().as_str(), "  T ");
   }

   #[test]
   fn test_保存済みの空のtitleから完了状態を更新できる() {
      let mut sut = Task::from_db(
         TaskId::from_i32(2),
         ProjectId::from_i32(1),
         TaskTitle::from_db(String::new()),
         false,
         test_now(),
      );

      let change = sut.set_completed(true);

      assert_eq!(change.title.as_str(), "");
      assert!(change.completed);
   }

   #[test]
   fn test_完了状態は往復できる() {
      let mut sut = Task::created(new_task("T"), TaskId::from_i32(5), test_now());

      let change = sut.set_completed(true);
      assert!(sut.is_completed());
      assert_eq!(
         change,
         CompletionChange {
            id:        TaskId::from_i32(5),
            title:     TaskTitle::new("T").unwrap(),
            completed: true,
         }
      );

      sut.set_completed(false);
      assert!(!sut.is_completed());
   }

   #[test]
   fn test_同じ値の再設定も許容する() {
      let mut sut = Task::created(new_task("T"), TaskId::from_i32(5), test_now());

      let change = sut.set_completed(false);

      assert!(!change.completed);
      assert!(!sut.is_completed());
   }

   #[test]
   fn test_completedが欠落している更新要求はバリデーションエラー() {
      let result = CompletionUpdate::new(TaskId::from_i32(1), None);

      match result {
         Err(DomainError::Validation(msg)) => assert_eq!(msg, "completed is required"),
         other => panic!("Validation エラーを期待したが {other:?} だった"),
      }
   }

   #[rstest]
   #[case(true)]
   #[case(false)]
   fn test_更新要求はcompletedの値を保持する(#[case] completed: bool) {
      let sut = CompletionUpdate::new(TaskId::from_i32(9), Some(completed)).unwrap();

      assert_eq!(sut.task_id(), TaskId::from_i32(9));
      assert_eq!(sut.completed(), completed);
   }
}
