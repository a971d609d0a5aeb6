//! # ヘルスチェックハンドラ
//!
//! データベースへの疎通を含めた稼働状態を返すエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## 振る舞い
//!
//! 接続の取得と `SELECT 1` の実行を行い、かかった時間を計測する。
//! 失敗してもエラーレスポンスにはせず、常に 200 OK で状態を返す。
//! ロードバランサーは `status` フィールドで可用性を判断する。

use std::{sync::Arc, time::Instant};

use axum::{Json, extract::State};
use taskboard_infra::DatabaseProbe;
use taskboard_shared::HealthResponse;

/// ヘルスチェックハンドラーの State
pub struct HealthState<D> {
   pub probe: D,
}

/// ヘルスチェックエンドポイント
///
/// # レスポンス
///
/// ```text
/// $ curl http://localhost:5000/health
/// {"status":"healthy","database":"connected","response_time":1.84,"version":"0.1.0"}
/// ```
pub async fn health_check<D>(State(state): State<Arc<HealthState<D>>>) -> Json<HealthResponse>
where
   D: DatabaseProbe,
{
   let started = Instant::now();
   let result = state.probe.ping().await;
   let response_time = round_millis(started.elapsed().as_secs_f64() * 1000.0);
   let version = env!("CARGO_PKG_VERSION");

   let response = match result {
      Ok(()) => HealthResponse::healthy(response_time, version),
      Err(e) if e.is_connection() => {
         tracing::warn!(error = %e, "ヘルスチェック: データベースに接続できません");
         HealthResponse::connection_failed(response_time, version)
      }
      Err(e) => {
         tracing::warn!(error = %e, "ヘルスチェック: クエリに失敗しました");
         HealthResponse::unhealthy(&e.to_string(), response_time, version)
      }
   };

   Json(response)
}

/// 小数点以下 2 桁に丸める
fn round_millis(millis: f64) -> f64 {
   (millis * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_round_millisは小数点以下2桁に丸める() {
      assert_eq!(round_millis(1.23456), 1.23);
      assert_eq!(round_millis(0.0), 0.0);
   }
}
