//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラはリポジトリトレイトにのみ依存し、State 経由で実装を受け取る
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェック
//!     ├── project.rs  # プロジェクトの一覧・作成
//!     └── task.rs     # タスクの一覧・作成・完了状態の更新
//! ```

pub mod health;
pub mod project;
pub mod task;

pub use health::{HealthState, health_check};
pub use project::{ProjectState, create_project, list_projects};
pub use task::{TaskState, create_task, list_tasks, update_task};
