//! # リポジトリ実装
//!
//! プロジェクトとタスクの永続化を担当する。
//!
//! ## 設計方針
//!
//! - **トレイト境界**: ハンドラはトレイトにのみ依存し、テストではインメモリ実装に差し替える
//! - **1 操作 1 接続**: 各メソッドが接続を取得し、戻る前に必ず解放する
//! - **単一の文**: 書き込みは 1 文だけ発行するため、部分的なコミットは起こらない

pub mod project_repository;
pub mod task_repository;

pub use project_repository::{PostgresProjectRepository, ProjectRepository};
pub use task_repository::{PostgresTaskRepository, TaskRepository};
