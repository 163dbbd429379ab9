//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! 어떤 핸들러도 요청 본문이나 쿼리 파라미터를 읽지 않습니다.
//!
//! 각 하위 모듈:
//! - `greeting`: 고정 메시지 (`/`, `/api/hello`)
//! - `diagnostics`: 데이터베이스 진단 (`/test`)
//! - `news`: 신문 문서 (`/api/news`)

pub mod diagnostics;
pub mod greeting;
pub mod news;

pub use diagnostics::*;
pub use greeting::*;
pub use news::*;

use crate::db::DatabaseSlot;

/// 모든 라우트 핸들러가 공유하는 애플리케이션 상태
///
/// 데이터베이스 핸들은 시작 시점(main.rs)에 한 번 만들어 주입합니다.
/// `DatabaseSlot` 안의 핸들은 `Arc`이므로 clone해도 같은 풀을 가리킵니다.
#[derive(Debug, Clone)]
pub struct AppState {
    pub database: DatabaseSlot,
}

impl AppState {
    pub fn new(database: DatabaseSlot) -> Self {
        Self { database }
    }
}

/// 등록되지 않은 경로에 대한 대체(fallback) 핸들러
pub async fn not_found() -> crate::error::AppError {
    crate::error::AppError::NotFound
}
