//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 8000)
//! - `DATABASE_URL`: SQLite 데이터베이스 연결 문자열 (선택)
//! - `DATABASE_NAME`: 데이터베이스 표시 이름 (선택)

use std::env;

/// 데이터베이스 연결 문자열 환경변수 이름
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// 데이터베이스 이름 환경변수 이름
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 main.rs에서만 사용합니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    /// 데이터베이스 연결 문자열. 비어 있거나 없으면 None
    pub database_url: Option<String>,
    /// 데이터베이스 표시 이름. 비어 있거나 없으면 None
    pub database_name: Option<String>,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있거나 선택 항목이므로 실패하지 않습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 만듭니다. 테스트에서 환경변수 대신 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            // 파싱 실패 시에도 기본 포트로 되돌아갑니다.
            port: lookup("PORT")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url: non_empty(lookup(DATABASE_URL_VAR)),
            database_name: non_empty(lookup(DATABASE_NAME_VAR)),
        }
    }
}

/// 데이터베이스 관련 환경변수가 설정되어 있는지 여부
///
/// `/test` 진단 엔드포인트가 요청마다 새로 읽습니다.
/// 값의 내용은 해석하지 않고 존재 여부(비어 있지 않음)만 확인합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_configured: bool,
    pub name_configured: bool,
}

impl DatabaseEnv {
    /// 현재 프로세스 환경변수를 확인합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url_configured: non_empty(lookup(DATABASE_URL_VAR)).is_some(),
            name_configured: non_empty(lookup(DATABASE_NAME_VAR)).is_some(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
