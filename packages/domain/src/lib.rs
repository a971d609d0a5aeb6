//! # TaskBoard ドメイン層
//!
//! プロジェクトとタスクのエンティティ、識別子、入力値の検証ルールを定義する。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメインエラー定義
//! - [`project`] - プロジェクト（タスクをまとめる名前付きコンテナ）
//! - [`task`] - タスク（完了 / 未完了の 2 状態を持つ作業単位）
//!
//! ## 依存関係
//!
//! ドメイン層は HTTP やデータベースに依存しない。
//! 永続化は `taskboard_infra`、HTTP への変換は `taskboard_api` が担う。

#[macro_use]
mod macros;

pub mod error;
pub mod project;
pub mod task;

pub use error::DomainError;
