//! # 라우터 구성
//!
//! URL 경로와 핸들러를 연결하고 공통 미들웨어(CORS, 요청 로깅)를 씌웁니다.
//! main.rs와 통합 테스트가 같은 라우터를 사용합니다.

use crate::routes::{self, AppState};
use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 전체 라우터를 만듭니다.
///
/// | 메서드 | 경로 | 핸들러 |
/// |--------|------|--------|
/// | GET | / | `root` |
/// | GET | /api/hello | `hello` |
/// | GET | /test | `test_database` |
/// | GET | /api/news | `get_news` |
pub fn build_router(state: AppState) -> Router {
    // 브라우저 프론트엔드가 어느 출처에서든 호출할 수 있도록 모두 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/api/hello", get(routes::hello))
        .route("/test", get(routes::test_database))
        .route("/api/news", get(routes::get_news))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
