//! # TaskBoard サーバー
//!
//! プロジェクト・タスク管理 API のエントリーポイント。
//!
//! ## 環境変数
//!
//! すべて任意。詳細は [`taskboard_api::config`] を参照。
//!
//! | 変数名 | デフォルト |
//! |--------|------------|
//! | `API_HOST` / `API_PORT` | `0.0.0.0` / `5000` |
//! | `DB_HOST` / `DB_PORT` | `localhost` / `5432` |
//! | `DB_NAME` / `DB_USER` / `DB_PASSWORD` | `projectdb` / `postgres` / `password` |
//! | `RUST_LOG` | `info,taskboard=debug` |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run --bin taskboard
//!
//! # 本番環境（環境変数を直接指定）
//! DB_HOST=db.internal DB_PASSWORD=... cargo run --bin taskboard --release
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use taskboard_api::{build_router, config::AppConfig};
use taskboard_infra::{
   PgConnector,
   db,
   repository::{PostgresProjectRepository, PostgresTaskRepository},
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. スキーマの初期化
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   // 例: RUST_LOG=debug,tower_http=trace
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,taskboard=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "TaskBoard サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );

   // ストアクライアントは接続先情報のみを持ち、接続はリクエストごとに開く
   let connector = PgConnector::new(config.database.connect_options());
   tracing::info!(
      host = connector.host(),
      database = connector.database().unwrap_or_default(),
      "データベースに接続してスキーマを初期化します"
   );
   db::init_schema(&connector)
      .await
      .context("スキーマの初期化に失敗しました")?;

   let app = build_router(
      PostgresProjectRepository::new(connector.clone()),
      PostgresTaskRepository::new(connector.clone()),
      connector,
   );

   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("TaskBoard サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
