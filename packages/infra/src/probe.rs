//! # データベース疎通確認
//!
//! ヘルスチェック用に、接続の確立と自明なクエリの実行を確認する。
//! 状態を変更する文は発行しない。

use async_trait::async_trait;

use crate::{db::PgConnector, error::InfraError};

/// データベースへの疎通を確認するプローブ
///
/// 失敗した場合は、接続フェーズの失敗なら [`InfraError::Connection`]、
/// クエリの失敗なら [`InfraError::Database`] を返す。
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
   /// 接続を取得し `SELECT 1` を実行する
   async fn ping(&self) -> Result<(), InfraError>;
}

#[async_trait]
impl DatabaseProbe for PgConnector {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn ping(&self) -> Result<(), InfraError> {
      let mut conn = self.acquire().await?;

      let result = sqlx::query_scalar::<_, i32>("SELECT 1")
         .fetch_one(&mut *conn)
         .await;
      conn.release().await;

      result?;
      Ok(())
   }
}
