//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError (Validation / NotFound) ─┐
//! InfraError (Connection / Database) ──┼─▶ ApiError ──▶ StatusCode + RFC 7807 JSON
//! JsonRejection / PathRejection ───────┘
//! ```
//!
//! ## 使用例
//!
//! ```rust,ignore
//! async fn handler(repo: impl TaskRepository) -> Result<Json<Dto>, ApiError> {
//!     let update = CompletionUpdate::new(task_id, request.completed)?; // 400
//!     let change = repo.update_completed(update).await?                // 500
//!         .ok_or(ApiError::NotFound(format!("Task not found: {task_id}")))?; // 404
//!     Ok(Json(dto))
//! }
//! ```

use axum::{
   Json,
   extract::rejection::{JsonRejection, PathRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use taskboard_domain::DomainError;
use taskboard_infra::InfraError;
use taskboard_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
///
/// ハンドラから返されるエラー型。`IntoResponse` を実装しているため、
/// axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
   /// バリデーションエラー（400 Bad Request）
   ///
   /// 必須フィールドの欠落、型の不一致、JSON として解釈できないボディ、
   /// 整数として解釈できないパスの ID。
   /// ストアへのアクセス前に検出される。
   #[error("{0}")]
   Validation(String),

   /// リソースが見つからない（404 Not Found）
   #[error("{0}")]
   NotFound(String),

   /// ストアエラー（500 Internal Server Error）
   ///
   /// 接続失敗・文の実行失敗。リトライせずにそのまま返す。
   #[error(transparent)]
   Store(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::Validation(msg),
         err @ DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
      }
   }
}

impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      ApiError::Validation(rejection.body_text())
   }
}

impl From<PathRejection> for ApiError {
   fn from(rejection: PathRejection) -> Self {
      ApiError::Validation(rejection.body_text())
   }
}

impl IntoResponse for ApiError {
   /// `ApiError` を axum の HTTP レスポンスに変換する
   ///
   /// | ApiError | HTTP Status |
   /// |----------|-------------|
   /// | Validation | 400 |
   /// | NotFound | 404 |
   /// | Store | 500 |
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_error(msg),
         ),
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
         ApiError::Store(err) => {
            tracing::error!(error = ?err, "ストアエラー: {}", err);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::store_error(err.to_string()),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_domainのvalidationは400になる() {
      let err: ApiError = DomainError::Validation("name is required".to_string()).into();

      let response = err.into_response();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   }

   #[test]
   fn test_domainのnot_foundは404になりメッセージを引き継ぐ() {
      let err: ApiError = DomainError::NotFound {
         entity_type: "Task",
         id:          "3".to_string(),
      }
      .into();

      assert!(matches!(&err, ApiError::NotFound(msg) if msg == "Task not found: 3"));
      assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
   }

   #[test]
   fn test_infraエラーは500になる() {
      let err: ApiError = InfraError::Database(sqlx::Error::RowNotFound).into();

      assert!(err.to_string().starts_with("database error: "));
      assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
   }
}
