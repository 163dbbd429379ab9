//! # Chronicle 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 데이터베이스 핸들 준비 (선택)
//! 5. 라우터 설정
//! 6. HTTP 서버 시작

use anyhow::Result;
use chronicle::{config::Config, db, routes::AppState, startup::build_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 chronicle, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronicle=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();
    tracing::info!("Starting Chronicle server on {}:{}", config.host, config.port);

    // ── 4단계: 데이터베이스 핸들 준비 ──
    // 실패해도 서버는 시작합니다. 상태는 GET /test 로 확인할 수 있습니다.
    let database = db::acquire(&config);
    tracing::info!("Database collaborator: {}", database.label());

    // ── 5단계: 라우터 설정 ──
    let app = build_router(AppState::new(database));

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
