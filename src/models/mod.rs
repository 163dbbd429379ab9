//! # 데이터 모델 모듈
//!
//! API 응답으로 직렬화되는 구조체(struct)들을 정의합니다.
//! 모두 요청마다 새로 만들어지고 직렬화 후 버려지는 값 타입입니다.
//! - `message`: 단일 메시지 응답 (`/`, `/api/hello`)
//! - `diagnostics`: 진단 보고서 (`/test`)
//! - `edition`: 신문 한 호(edition) 문서 (`/api/news`)
//!
//! 사용하는 쪽에서 `models::Edition`처럼 짧게 쓸 수 있도록 재공개(re-export)합니다.

pub mod diagnostics;
pub mod edition;
pub mod message;

pub use diagnostics::*;
pub use edition::*;
pub use message::*;
