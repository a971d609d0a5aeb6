//! # エラーレスポンス（RFC 7807 Problem Details）
//!
//! すべてのエンドポイントで共通のエラーレスポンス構造体を提供する。
//! よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除する。

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://taskboard.example.com/errors";

/// エラーレスポンス（RFC 7807 Problem Details）
///
/// ```json
/// {
///   "type": "https://taskboard.example.com/errors/validation-error",
///   "title": "Validation Error",
///   "status": 400,
///   "detail": "name is required"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"not-found"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 400 Validation Error
   pub fn validation_error(detail: impl Into<String>) -> Self {
      Self::new("validation-error", "Validation Error", 400, detail)
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 500 Store Error
   ///
   /// ストアの接続失敗・文の実行失敗。detail には元のエラーメッセージを載せる。
   pub fn store_error(detail: impl Into<String>) -> Self {
      Self::new("store-error", "Store Error", 500, detail)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_newで全フィールドが正しく設定される() {
      let error = ErrorResponse::new("custom-error", "Custom Error", 418, "teapot");

      assert_eq!(
         error.error_type,
         "https://taskboard.example.com/errors/custom-error"
      );
      assert_eq!(error.title, "Custom Error");
      assert_eq!(error.status, 418);
      assert_eq!(error.detail, "teapot");
   }

   #[test]
   fn test_validation_errorが400を返す() {
      let error = ErrorResponse::validation_error("name is required");

      assert_eq!(error.status, 400);
      assert_eq!(error.detail, "name is required");
   }

   #[test]
   fn test_store_errorが500と元のメッセージを返す() {
      let error = ErrorResponse::store_error("database error: relation does not exist");

      assert_eq!(error.status, 500);
      assert_eq!(error.title, "Store Error");
      assert_eq!(error.detail, "database error: relation does not exist");
   }

   #[test]
   fn test_typeフィールドとしてシリアライズされる() {
      let json = serde_json::to_value(ErrorResponse::not_found("Task not found: 1")).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "type": "https://taskboard.example.com/errors/not-found",
            "title": "Not Found",
            "status": 404,
            "detail": "Task not found: 1"
         })
      );
   }
}
