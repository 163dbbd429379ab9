//! # 데이터베이스 협력자(Collaborator) 경계
//!
//! 이 서비스는 데이터베이스에 아무것도 저장하지 않습니다.
//! `/test` 진단 엔드포인트가 "데이터베이스에 닿을 수 있는가"만 확인할 뿐입니다.
//!
//! 그래서 이 모듈은 구체적인 DB 대신 다음 세 가지를 정의합니다:
//! - `DatabaseHandle`: 이름 조회와 컬렉션(테이블) 목록 조회만 가진 트레이트
//! - `DatabaseSlot`: 시작 시점에 핸들을 얻으려 한 결과 (없음/미초기화/준비됨/고장)
//! - `ProbeError`: 핸들 조회 중 발생한 실패
//!
//! 실제 SQLite 구현은 `database` 기능이 켜졌을 때만 `sqlite` 하위 모듈로 컴파일됩니다.

#[cfg(feature = "database")]
pub mod sqlite;

use crate::config::Config;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// 데이터베이스 조회 중 발생할 수 있는 에러
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 컬렉션 목록 조회 실패 (연결 거부, 파일 없음 등)
    #[error("{0}")]
    Query(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for ProbeError {
    fn from(err: sqlx::Error) -> Self {
        ProbeError::Query(err.to_string())
    }
}

/// 진단 엔드포인트가 필요로 하는 데이터베이스 핸들의 최소 기능
///
/// `Send + Sync`: 여러 요청(태스크)이 동시에 같은 핸들을 참조하므로 필요합니다.
#[async_trait]
pub trait DatabaseHandle: Send + Sync {
    /// 핸들이 알고 있는 데이터베이스 이름 (없을 수 있음)
    fn name(&self) -> Option<&str>;

    /// 컬렉션(테이블) 이름 목록을 원래 순서대로 반환합니다.
    async fn list_collections(&self) -> Result<Vec<String>, ProbeError>;
}

/// 시작 시점에 데이터베이스 핸들을 얻으려 한 결과
///
/// main.rs에서 한 번 만들어 `AppState`에 담아 모든 요청이 공유합니다.
#[derive(Clone)]
pub enum DatabaseSlot {
    /// 데이터베이스 모듈 자체가 빌드에 포함되지 않음 (`database` 기능 꺼짐)
    Absent,
    /// 모듈은 있지만 핸들이 만들어지지 않음 (`DATABASE_URL` 미설정)
    Uninitialized,
    /// 사용 가능한 핸들
    Ready(Arc<dyn DatabaseHandle>),
    /// 핸들을 만드는 도중 예상치 못한 실패가 있었음
    Broken(String),
}

impl DatabaseSlot {
    /// 상태를 로그에 남기기 위한 짧은 이름
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseSlot::Absent => "absent",
            DatabaseSlot::Uninitialized => "uninitialized",
            DatabaseSlot::Ready(_) => "ready",
            DatabaseSlot::Broken(_) => "broken",
        }
    }
}

impl std::fmt::Debug for DatabaseSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseSlot::Broken(reason) => f.debug_tuple("Broken").field(reason).finish(),
            other => f.write_str(other.label()),
        }
    }
}

/// 설정을 바탕으로 데이터베이스 핸들을 얻습니다.
///
/// `database` 기능이 꺼져 있으면 항상 `Absent`를 반환합니다.
/// 실패해도 에러를 반환하지 않고 `DatabaseSlot`으로 상태를 표현합니다.
pub fn acquire(config: &Config) -> DatabaseSlot {
    #[cfg(feature = "database")]
    {
        sqlite::acquire(config)
    }

    #[cfg(not(feature = "database"))]
    {
        let _ = config;
        DatabaseSlot::Absent
    }
}
