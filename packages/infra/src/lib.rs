//! # TaskBoard インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **ストアクライアント**: リクエストごとの接続取得と確実な解放
//! - **スキーマ初期化**: 起動時の `CREATE TABLE IF NOT EXISTS`
//! - **リポジトリ実装**: プロジェクト・タスクの永続化
//! - **疎通確認**: ヘルスチェック用のプローブ
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続管理とスキーマ初期化
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - [`probe`] - データベース疎通確認
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use taskboard_infra::{db::{self, PgConnector}, repository::PostgresProjectRepository};
//!
//! async fn setup(options: sqlx::postgres::PgConnectOptions) -> Result<(), taskboard_infra::InfraError> {
//!     let connector = PgConnector::new(options);
//!     db::init_schema(&connector).await?;
//!     let projects = PostgresProjectRepository::new(connector.clone());
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod probe;
pub mod repository;

pub use db::{PgConnector, ScopedConnection};
pub use error::InfraError;
pub use probe::DatabaseProbe;
