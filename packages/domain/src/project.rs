//! # プロジェクト
//!
//! タスクをまとめる名前付きのコンテナ。
//!
//! ## ライフサイクル
//!
//! プロジェクトは 1 回の INSERT で作成され、この API から更新・削除されることはない。
//! 作成後の状態遷移は存在しない。
//!
//! ## 使用例
//!
//! ```rust
//! use taskboard_domain::project::NewProject;
//!
//! let new_project = NewProject::new(Some("Website".to_string()), None).unwrap();
//! assert_eq!(new_project.name().as_str(), "Website");
//! assert_eq!(new_project.description(), "");
//! ```

use chrono::NaiveDateTime;

use crate::DomainError;

/// プロジェクト名の最大文字数（`VARCHAR(255)` に対応）
pub const PROJECT_NAME_MAX_LENGTH: usize = 255;

define_serial_id! {
   /// プロジェクトの一意識別子（`projects.id`）
   pub struct ProjectId;
}

define_validated_string! {
   /// プロジェクト名（値オブジェクト）
   ///
   /// # バリデーション
   ///
   /// - 空文字列・空白のみではない（値は前後の空白も含めて受け取ったまま保持する）
   /// - 255 文字以内
   pub struct ProjectName {
      label: "name",
      max_length: PROJECT_NAME_MAX_LENGTH,
   }
}

/// 作成前のプロジェクト
///
/// リクエストボディから組み立て、検証済みの値だけをリポジトリに渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
   name:        ProjectName,
   description: String,
}

impl NewProject {
   /// リクエストのフィールドから作成前のプロジェクトを組み立てる
   ///
   /// `name` は必須。`description` は省略時に空文字列となる。
   pub fn new(name: Option<String>, description: Option<String>) -> Result<Self, DomainError> {
      let name = ProjectName::new(require_field!(name, "name")?)?;
      Ok(Self {
         name,
         description: description.unwrap_or_default(),
      })
   }

   pub fn name(&self) -> &ProjectName {
      &self.name
   }

   pub fn description(&self) -> &str {
      &self.description
   }
}

/// 永続化済みのプロジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
   id:          ProjectId,
   name:        ProjectName,
   description: String,
   created_at:  NaiveDateTime,
}

impl Project {
   /// データベースの行から復元する
   pub fn from_db(
      id: ProjectId,
      name: ProjectName,
      description: String,
      created_at: NaiveDateTime,
   ) -> Self {
      Self {
         id,
         name,
         description,
         created_at,
      }
   }

   /// 採番された ID と作成日時を付与して永続化済みのプロジェクトにする
   pub fn created(new_project: NewProject, id: ProjectId, created_at: NaiveDateTime) -> Self {
      Self {
         id,
         name: new_project.name,
         description: new_project.description,
         created_at,
      }
   }

   pub fn id(&self) -> ProjectId {
      self.id
   }

   pub fn name(&self) -> &ProjectName {
      &self.name
   }

   pub fn description(&self) -> &str {
      &self.description
   }

   pub fn created_at(&self) -> NaiveDateTime {
      self.created_at
   }
}
