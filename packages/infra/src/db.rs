//! # PostgreSQL 接続管理
//!
//! リクエストごとの接続取得・解放と、起動時のスキーマ初期化を行う。
//!
//! ## 設計方針
//!
//! - **接続プールを使わない**: 各リクエストが自分の接続を開き、処理が終わったら閉じる
//! - **明示的に渡すストアクライアント**: [`PgConnector`] を起動時に一度だけ構築し、
//!   各リポジトリに渡す。グローバルな接続ファクトリは持たない
//! - **スコープ付きの解放**: [`ScopedConnection`] は `release()` で正常に切断し、
//!   途中で `?` により早期リターンした場合も drop 時にソケットが閉じられる
//!
//! ## 接続のライフサイクル
//!
//! ```text
//! handler ──▶ repository ──▶ PgConnector::acquire() ──▶ ScopedConnection
//!                                                            │
//!                                 SQL 文を 1〜2 回実行 ◀──────┘
//!                                                            │
//!                          release()（成功・失敗どちらの経路でも）
//! ```

use std::ops::{Deref, DerefMut};

use sqlx::{
   Connection,
   PgConnection,
   postgres::PgConnectOptions,
};

use crate::error::InfraError;

/// `projects` テーブルの DDL
const CREATE_PROJECTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS projects (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        description TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// `tasks` テーブルの DDL
const CREATE_TASKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id SERIAL PRIMARY KEY,
        project_id INTEGER NOT NULL REFERENCES projects(id),
        title VARCHAR(255) NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// ストアクライアント
///
/// 接続先の情報だけを保持し、接続そのものは保持しない。
/// `Clone` してリポジトリやヘルスチェックに配る。
#[derive(Debug, Clone)]
pub struct PgConnector {
   options: PgConnectOptions,
}

impl PgConnector {
   /// 接続オプションからストアクライアントを作成する
   pub fn new(options: PgConnectOptions) -> Self {
      Self { options }
   }

   /// 新しい接続を開く
   ///
   /// 接続確立の失敗は [`InfraError::Connection`] として返す。
   pub async fn acquire(&self) -> Result<ScopedConnection, InfraError> {
      let conn = PgConnection::connect_with(&self.options)
         .await
         .map_err(InfraError::Connection)?;
      Ok(ScopedConnection { conn })
   }

   /// 接続先のホスト名
   pub fn host(&self) -> &str {
      self.options.get_host()
   }

   /// 接続先のデータベース名
   pub fn database(&self) -> Option<&str> {
      self.options.get_database()
   }
}

/// 1 リクエスト分の接続
///
/// `Deref<Target = PgConnection>` を実装しているため、
/// `query.fetch_all(&mut *conn)` のように sqlx の Executor として使える。
pub struct ScopedConnection {
   conn: PgConnection,
}

impl ScopedConnection {
   /// 接続を閉じる
   ///
   /// 終了メッセージを送ってから切断する。切断時の失敗は処理結果に影響させず、
   /// ログにだけ残す。
   pub async fn release(self) {
      if let Err(e) = self.conn.close().await {
         tracing::warn!(error = %e, "データベース接続のクローズに失敗しました");
      }
   }
}

// drop 時は PgConnection 自身がソケットを閉じる。
impl Deref for ScopedConnection {
   type Target = PgConnection;

   fn deref(&self) -> &Self::Target {
      &self.conn
   }
}

impl DerefMut for ScopedConnection {
   fn deref_mut(&mut self) -> &mut Self::Target {
      &mut self.conn
   }
}

/// テーブルが存在しなければ作成する
///
/// 起動時に一度だけ呼び出す。何度実行しても結果は変わらない。
pub async fn init_schema(connector: &PgConnector) -> Result<(), InfraError> {
   let mut conn = connector.acquire().await?;

   let result = create_tables(&mut conn).await;
   conn.release().await;
   result?;

   tracing::info!("スキーマを初期化しました");
   Ok(())
}

async fn create_tables(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
   sqlx::query(CREATE_PROJECTS_TABLE).execute(&mut *conn).await?;
   sqlx::query(CREATE_TASKS_TABLE).execute(&mut *conn).await?;
   Ok(())
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_connectorは接続先の情報を保持する() {
      let options = PgConnectOptions::new()
         .host("db.internal")
         .port(5432)
         .database("projectdb")
         .username("postgres")
         .password("secret");

      let sut = PgConnector::new(options);

      assert_eq!(sut.host(), "db.internal");
      assert_eq!(sut.database(), Some("projectdb"));
   }

   #[tokio::test]
   async fn test_到達できないホストへの接続はconnectionエラーになる() {
      // ポート 1 は通常 listen されていないため即座に拒否される
      let options = PgConnectOptions::new()
         .host("127.0.0.1")
         .port(1)
         .database("projectdb")
         .username("postgres")
         .password("password");
      let sut = PgConnector::new(options);

      let result = sut.acquire().await;

      assert!(matches!(result, Err(InfraError::Connection(_))));
   }

   #[test]
   fn test_ddlは冪等なcreate_table_if_not_existsである() {
      assert!(CREATE_PROJECTS_TABLE.contains("CREATE TABLE IF NOT EXISTS projects"));
      assert!(CREATE_TASKS_TABLE.contains("CREATE TABLE IF NOT EXISTS tasks"));
      assert!(CREATE_TASKS_TABLE.contains("REFERENCES projects(id)"));
   }
}
