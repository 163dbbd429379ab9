//! # 서비스 모듈
//!
//! 라우트 핸들러가 호출하는 응답 생성 로직입니다.
//! HTTP와 무관한 순수 로직만 담아 단위 테스트하기 쉽게 만듭니다.
//! - `diagnostics`: 데이터베이스 진단 보고서 생성
//! - `edition`: 신문 문서 생성

pub mod diagnostics;
pub mod edition;
