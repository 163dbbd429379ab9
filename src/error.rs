//! # 에러 처리 모듈
//!
//! HTTP 계층에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 네 개의 엔드포인트는 모두 실패하지 않으므로(진단 실패도 200 응답 본문에 담김),
//! 여기서 다루는 것은 라우팅 단계의 에러뿐입니다.
//! - `AppError`: 에러 종류
//! - `IntoResponse` 구현: 에러를 JSON HTTP 응답으로 변환

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// HTTP 요청 처리 중 발생하는 에러
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 경로가 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,
}

impl IntoResponse for AppError {
    /// 결과: `{ "error": { "code": "not_found", "message": "Resource not found" } }`
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
