//! # 진단 핸들러
//!
//! ## 엔드포인트
//! - `GET /test` → `DiagnosticsReport`
//!
//! 데이터베이스 확인이 실패해도 HTTP 200으로 응답합니다.
//! 실패 내용은 응답 본문의 `database_status` 문자열에 담깁니다.

use crate::{config::DatabaseEnv, models::DiagnosticsReport, routes::AppState, services};
use axum::{extract::State, Json};

/// `GET /test` — 백엔드와 데이터베이스 상태를 보고합니다.
///
/// 환경변수는 요청마다 새로 읽습니다.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let env = DatabaseEnv::from_env();
    let report = services::diagnostics::build_report(&state.database, env).await;
    Json(report)
}
