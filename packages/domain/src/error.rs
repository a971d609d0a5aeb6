//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗や、参照先エンティティの不在を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須フィールドの欠落、文字数超過 |
//! | `NotFound` | 404 Not Found | 更新対象のタスクが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use taskboard_domain::DomainError;
//!
//! fn validate_name(name: &str) -> Result<(), DomainError> {
//!     if name.is_empty() {
//!         return Err(DomainError::Validation("name is required".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_name("").is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
/// ストアへのアクセス前に検出されるため、このエラーが返った時点で
/// データベースには何も書き込まれていない。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// リクエストボディの必須フィールドが欠けている、または値が不正な場合に使用する。
   /// メッセージはそのままクライアントに返される。
   #[error("{0}")]
   Validation(String),

   /// エンティティが見つからない
   ///
   /// # フィールド
   ///
   /// - `entity_type`: エンティティの種類（"Task" など）
   /// - `id`: 検索に使用した識別子
   #[error("{entity_type} not found: {id}")]
   NotFound {
      /// エンティティの種類
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}
