//! # Chronicle 백엔드
//!
//! 읽기 전용 엔드포인트 네 개를 제공하는 작은 HTTP 서비스입니다.
//! - `GET /`, `GET /api/hello`: 고정 인사 메시지
//! - `GET /test`: 백엔드/데이터베이스 진단 보고서
//! - `GET /api/news`: 옛날 신문 한 호(edition) 문서
//!
//! 진입점(main.rs)은 이 라이브러리의 `startup::build_router`로 서버를 띄우고,
//! `tests/`의 통합 테스트도 같은 라우터를 사용합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
