//! # SQLite 데이터베이스 핸들
//!
//! `DatabaseHandle` 트레이트의 SQLite 구현입니다.
//! 컬렉션 목록은 `sqlite_master` 카탈로그의 테이블 이름으로 대신합니다.

use super::{DatabaseHandle, DatabaseSlot, ProbeError};
use crate::config::Config;
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

/// 사용자 테이블 이름 조회 쿼리. `sqlite_` 로 시작하는 내부 테이블은 제외합니다.
const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master \
     WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
     ORDER BY name";

/// SQLite 연결 풀과 표시 이름을 묶은 핸들
pub struct SqliteDatabase {
    pool: SqlitePool,
    name: Option<String>,
}

impl SqliteDatabase {
    pub fn new(pool: SqlitePool, name: Option<String>) -> Self {
        Self { pool, name }
    }
}

#[async_trait]
impl DatabaseHandle for SqliteDatabase {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn list_collections(&self) -> Result<Vec<String>, ProbeError> {
        // query_scalar: 첫 번째 컬럼만 꺼내 Vec<String>으로 받습니다.
        let names: Vec<String> = sqlx::query_scalar(LIST_TABLES_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }
}

/// `DATABASE_URL`로 지연 연결(lazy) 풀을 만듭니다.
///
/// 실제 연결은 첫 쿼리 때 일어나므로, 서버 시작은 DB 상태와 무관하게 성공합니다.
/// 연결 문자열 자체가 잘못된 경우에만 `Broken`이 됩니다.
pub fn acquire(config: &Config) -> DatabaseSlot {
    let Some(url) = config.database_url.as_deref() else {
        return DatabaseSlot::Uninitialized;
    };

    match SqlitePoolOptions::new().max_connections(5).connect_lazy(url) {
        Ok(pool) => DatabaseSlot::Ready(Arc::new(SqliteDatabase::new(
            pool,
            config.database_name.clone(),
        ))),
        Err(err) => {
            tracing::warn!("Invalid DATABASE_URL: {}", err);
            DatabaseSlot::Broken(err.to_string())
        }
    }
}
