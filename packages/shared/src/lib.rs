//! # TaskBoard 共有型
//!
//! HTTP レスポンスとして返す、ビジネスロジックを含まないデータ構造を提供する。
//!
//! ## 設計方針
//!
//! - 純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務（shared に axum 依存を入れない）

pub mod error_response;
pub mod health;

pub use error_response::ErrorResponse;
pub use health::{DatabaseStatus, HealthResponse};
