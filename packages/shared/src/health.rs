//! # ヘルスチェックレスポンス
//!
//! `GET /health` が返すレスポンス型。
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "database": "connected",
//!   "response_time": 1.84,
//!   "version": "0.1.0"
//! }
//! ```
//!
//! ## status の値
//!
//! | 状況 | `status` | `database` |
//! |------|----------|------------|
//! | 接続・クエリとも成功 | `healthy` | `connected` |
//! | 接続に失敗 | `connection_failed` | `disconnected` |
//! | クエリに失敗 | `unhealthy: <detail>` | `error` |

use serde::{Deserialize, Serialize};

/// データベースの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
   /// 接続・クエリとも成功
   Connected,
   /// 接続に失敗
   Disconnected,
   /// 接続後のクエリに失敗
   Error,
}

/// ヘルスチェックレスポンス
///
/// 失敗時もエラーレスポンスにはせず、`status` と `database` で状態を表す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
   /// 稼働状態
   pub status:        String,
   /// データベースの状態
   pub database:      DatabaseStatus,
   /// 疎通確認にかかった時間（ミリ秒）
   pub response_time: f64,
   /// アプリケーションバージョン（Cargo.toml から取得）
   pub version:       String,
}

impl HealthResponse {
   pub fn healthy(response_time: f64, version: impl Into<String>) -> Self {
      Self {
         status: "healthy".to_string(),
         database: DatabaseStatus::Connected,
         response_time,
         version: version.into(),
      }
   }

   pub fn connection_failed(response_time: f64, version: impl Into<String>) -> Self {
      Self {
         status: "connection_failed".to_string(),
         database: DatabaseStatus::Disconnected,
         response_time,
         version: version.into(),
      }
   }

   pub fn unhealthy(detail: &str, response_time: f64, version: impl Into<String>) -> Self {
      Self {
         status: format!("unhealthy: {detail}"),
         database: DatabaseStatus::Error,
         response_time,
         version: version.into(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_healthyのserializeで正しいjson形状にする() {
      let json = serde_json::to_value(HealthResponse::healthy(1.5, "0.1.0")).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "status": "healthy",
            "database": "connected",
            "response_time": 1.5,
            "version": "0.1.0"
         })
      );
   }

   #[test]
   fn test_connection_failedはdisconnectedを返す() {
      let sut = HealthResponse::connection_failed(0.2, "0.1.0");

      assert_eq!(sut.status, "connection_failed");
      assert_eq!(sut.database, DatabaseStatus::Disconnected);
   }

   #[test]
   fn test_unhealthyは詳細をstatusに含める() {
      let sut = HealthResponse::unhealthy("database error: timeout", 3.0, "0.1.0");

      assert_eq!(sut.status, "unhealthy: database error: timeout");
      assert_eq!(sut.database, DatabaseStatus::Error);
   }
}
