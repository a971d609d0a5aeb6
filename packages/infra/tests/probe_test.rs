//! 疎通確認の統合テスト
//!
//! 到達できない接続先に対するプローブの振る舞いを確認する。
//! PostgreSQL サーバーは不要。

use sqlx::postgres::PgConnectOptions;
use taskboard_infra::{DatabaseProbe, InfraError, PgConnector, db};

fn unreachable_connector() -> PgConnector {
   PgConnector::new(
      PgConnectOptions::new()
         .host("127.0.0.1")
         .port(1)
         .database("projectdb")
         .username("postgres")
         .password("password"),
   )
}

#[tokio::test]
async fn test_到達できないストアへのpingは接続エラーを返す() {
   let sut = unreachable_connector();

   let result = sut.ping().await;

   let err = result.expect_err("接続に失敗すること");
   assert!(err.is_connection(), "接続フェーズの失敗であること: {err}");
}

#[tokio::test]
async fn test_到達できないストアではスキーマ初期化が接続エラーになる() {
   let sut = unreachable_connector();

   let result = db::init_schema(&sut).await;

   assert!(matches!(result, Err(InfraError::Connection(_))));
}
