//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。すべての変数にデフォルト値があるため、
//! ローカルの PostgreSQL に対しては何も設定せずに起動できる。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `API_HOST` | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | `5000` | ポート番号 |
//! | `DB_HOST` | `localhost` | PostgreSQL ホスト |
//! | `DB_PORT` | `5432` | PostgreSQL ポート |
//! | `DB_NAME` | `projectdb` | データベース名 |
//! | `DB_USER` | `postgres` | ユーザー名 |
//! | `DB_PASSWORD` | `password` | パスワード |
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use taskboard_api::config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("サーバー: {}:{}", config.server.host, config.server.port);
//! ```

use std::{env, fmt};

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// 設定の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   /// ポート番号として解釈できない値
   #[error("{name} must be a valid port number: {value:?}")]
   InvalidPort {
      /// 環境変数名
      name:  &'static str,
      /// 設定されていた値
      value: String,
   },
}

/// HTTP サーバー設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

/// データベース接続設定
///
/// `Debug` 出力ではパスワードをマスクする。
#[derive(Clone)]
pub struct DatabaseConfig {
   pub host:     String,
   pub port:     u16,
   pub name:     String,
   pub user:     String,
   pub password: String,
}

impl DatabaseConfig {
   /// sqlx の接続オプションに変換する
   pub fn connect_options(&self) -> PgConnectOptions {
      PgConnectOptions::new()
         .host(&self.host)
         .port(self.port)
         .database(&self.name)
         .username(&self.user)
         .password(&self.password)
   }
}

impl fmt::Debug for DatabaseConfig {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("DatabaseConfig")
         .field("host", &self.host)
         .field("port", &self.port)
         .field("name", &self.name)
         .field("user", &self.user)
         .field("password", &"[REDACTED]")
         .finish()
   }
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone)]
pub struct AppConfig {
   /// HTTP サーバー設定
   pub server:   ServerConfig,
   /// データベース接続設定
   pub database: DatabaseConfig,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 未設定の変数はデフォルト値を使用する。
   /// ポート番号として解釈できない値が設定されている場合はエラーを返す。
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストではプロセスの環境変数を汚さずに設定を与えるために使う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

      Ok(Self {
         server:   ServerConfig {
            host: var("API_HOST", "0.0.0.0"),
            port: parse_port("API_PORT", var("API_PORT", "5000"))?,
         },
         database: DatabaseConfig {
            host:     var("DB_HOST", "localhost"),
            port:     parse_port("DB_PORT", var("DB_PORT", "5432"))?,
            name:     var("DB_NAME", "projectdb"),
            user:     var("DB_USER", "postgres"),
            password: var("DB_PASSWORD", "password"),
         },
      })
   }
}

fn parse_port(name: &'static str, value: String) -> Result<u16, ConfigError> {
   value
      .parse()
      .map_err(|_| ConfigError::InvalidPort { name, value })
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      AppConfig::from_lookup(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_未設定の場合はデフォルト値を使う() {
      let sut = config_from(&[]).unwrap();

      assert_eq!(sut.server.host, "0.0.0.0");
      assert_eq!(sut.server.port, 5000);
      assert_eq!(sut.database.host, "localhost");
      assert_eq!(sut.database.port, 5432);
      assert_eq!(sut.database.name, "projectdb");
      assert_eq!(sut.database.user, "postgres");
      assert_eq!(sut.database.password, "password");
   }

   #[test]
   fn test_環境変数の値がデフォルトより優先される() {
      let sut = config_from(&[
         ("API_PORT", "8080"),
         ("DB_HOST", "db.internal"),
         ("DB_NAME", "tasks"),
         ("DB_USER", "app"),
         ("DB_PASSWORD", "s3cret"),
      ])
      .unwrap();

      assert_eq!(sut.server.port, 8080);
      assert_eq!(sut.database.host, "db.internal");
      assert_eq!(sut.database.name, "tasks");
      assert_eq!(sut.database.user, "app");
      assert_eq!(sut.database.password, "s3cret");
   }

   #[test]
   fn test_不正なポート番号はエラーになる() {
      let result = config_from(&[("API_PORT", "not-a-port")]);

      match result {
         Err(ConfigError::InvalidPort { name, value }) => {
            assert_eq!(name, "API_PORT");
            assert_eq!(value, "not-a-port");
         }
         other => panic!("InvalidPort を期待したが {other:?} だった"),
      }
   }

   #[test]
   fn test_debug出力でパスワードをマスクする() {
      let sut = config_from(&[("DB_PASSWORD", "s3cret")]).unwrap();

      let debug = format!("{:?}", sut.database);

      assert!(!debug.contains("s3cret"));
      assert!(debug.contains("[REDACTED]"));
   }

   #[test]
   fn test_接続オプションに設定値が反映される() {
      let sut = config_from(&[("DB_HOST", "db.internal"), ("DB_PORT", "6543")]).unwrap();

      let options = sut.database.connect_options();

      assert_eq!(options.get_host(), "db.internal");
      assert_eq!(options.get_port(), 6543);
      assert_eq!(options.get_database(), Some("projectdb"));
      assert_eq!(options.get_username(), "postgres");
   }
}
