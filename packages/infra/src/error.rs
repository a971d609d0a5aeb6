//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **失敗フェーズの区別**: 接続確立の失敗と、文の実行失敗を別バリアントにする。
//!   ヘルスチェックはこの区別をそのままレスポンスに反映する
//! - **リトライしない**: どのエラーも呼び出し元へ即座に返す

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// API 層でこのエラーを 500 Internal Server Error に変換する。
/// `Display` の内容はレスポンスの `detail` にそのまま載る。
#[derive(Debug, Error)]
pub enum InfraError {
   /// 接続エラー
   ///
   /// ホスト到達不能、認証失敗、データベース不在など、接続確立時の失敗。
   #[error("database connection failed: {0}")]
   Connection(#[source] sqlx::Error),

   /// データベースエラー
   ///
   /// SQL 文の実行失敗、制約違反（外部キー違反など）。
   #[error("database error: {0}")]
   Database(#[from] sqlx::Error),
}

impl InfraError {
   /// 接続確立フェーズの失敗かどうか
   pub fn is_connection(&self) -> bool {
      matches!(self, InfraError::Connection(_))
   }
}

#[cfg(test)]
mod tests {
   use std::error::Error;

   use super::*;

   #[test]
   fn test_sqlx_errorからの変換はdatabaseになる() {
      let err: InfraError = sqlx::Error::RowNotFound.into();

      assert!(matches!(err, InfraError::Database(_)));
      assert!(!err.is_connection());
   }

   #[test]
   fn test_connectionは接続フェーズの失敗として判定される() {
      let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
      let err = InfraError::Connection(sqlx::Error::Io(io));

      assert!(err.is_connection());
      assert!(err.to_string().starts_with("database connection failed: "));
   }

   #[test]
   fn test_sourceは元のsqlx_errorを返す() {
      let err: InfraError = sqlx::Error::RowNotFound.into();

      assert!(err.source().is_some());
   }
}
