//! # 신문 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/news` → `Edition`

use crate::{models::Edition, services};
use axum::Json;
use chrono::Utc;

/// `GET /api/news` — 오늘 날짜(UTC)의 신문 한 호를 반환합니다.
pub async fn get_news() -> Json<Edition> {
    let today = Utc::now().date_naive();
    Json(services::edition::build_edition(today))
}
