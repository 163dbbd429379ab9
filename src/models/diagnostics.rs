//! # 진단 보고서 모델
//!
//! `GET /test` 응답 구조체와 상태 열거형들입니다.
//! 상태 값은 JSON에서 사람이 읽는 문자열(이모지 포함)로 직렬화됩니다.
//!
//! 예시 응답:
//! ```json
//! {
//!   "backend_status": "✅ Running",
//!   "database_status": "✅ Connected & Working",
//!   "database_url_configured": true,
//!   "database_name_configured": true,
//!   "connection_status": "Connected",
//!   "collections": ["ads", "wires"]
//! }
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// 상태 문자열에 포함되는 실패 사유의 최대 글자 수
pub const MAX_REASON_CHARS: usize = 50;

/// 보고서에 담는 컬렉션 이름의 최대 개수
pub const MAX_COLLECTIONS: usize = 10;

/// 실패 사유를 최대 `MAX_REASON_CHARS` 글자로 자릅니다.
///
/// 바이트가 아니라 문자(char) 단위로 자르므로 UTF-8 경계가 깨지지 않습니다.
pub fn truncate_reason(reason: &str) -> String {
    reason.chars().take(MAX_REASON_CHARS).collect()
}

/// 백엔드 상태. 응답을 돌려줄 수 있다면 언제나 실행 중입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Running,
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendStatus::Running => f.write_str("✅ Running"),
        }
    }
}

/// 데이터베이스 상태. 보고서에는 언제나 정확히 하나의 값이 들어갑니다.
///
/// 사유를 담는 variant는 `connected_with_error`, `error` 생성자로만 만들어
/// 사유가 항상 잘린 상태를 유지하도록 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatabaseStatus {
    /// 아직 아무것도 확인하지 않은 초기 상태
    #[default]
    NotAvailable,
    Available,
    AvailableUninitialized,
    ConnectedWorking,
    ConnectedWithError(String),
    ModuleNotFound,
    Error(String),
}

impl DatabaseStatus {
    pub fn connected_with_error(reason: &str) -> Self {
        DatabaseStatus::ConnectedWithError(truncate_reason(reason))
    }

    pub fn error(reason: &str) -> Self {
        DatabaseStatus::Error(truncate_reason(reason))
    }

    /// 실패 사유가 있으면 반환합니다.
    pub fn reason(&self) -> Option<&str> {
        match self {
            DatabaseStatus::ConnectedWithError(reason) | DatabaseStatus::Error(reason) => {
                Some(reason)
            }
            _ => None,
        }
    }
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::NotAvailable => f.write_str("❌ Not Available"),
            DatabaseStatus::Available => f.write_str("✅ Available"),
            DatabaseStatus::AvailableUninitialized => {
                f.write_str("⚠️  Available but not initialized")
            }
            DatabaseStatus::ConnectedWorking => f.write_str("✅ Connected & Working"),
            DatabaseStatus::ConnectedWithError(reason) => {
                write!(f, "⚠️  Connected but Error: {}", reason)
            }
            DatabaseStatus::ModuleNotFound => {
                f.write_str("❌ Database module not found (run enable-database first)")
            }
            DatabaseStatus::Error(reason) => write!(f, "❌ Error: {}", reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    Connected,
    #[default]
    NotConnected,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connected => f.write_str("Connected"),
            ConnectionStatus::NotConnected => f.write_str("Not Connected"),
        }
    }
}

// 세 상태 타입 모두 Display 문자열 그대로 JSON 문자열이 됩니다.
macro_rules! serialize_as_display {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_display!(BackendStatus, DatabaseStatus, ConnectionStatus);

/// `GET /test` 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiagnosticsReport {
    pub backend_status: BackendStatus,
    pub database_status: DatabaseStatus,
    pub database_url_configured: bool,
    pub database_name_configured: bool,
    pub connection_status: ConnectionStatus,
    /// 최대 `MAX_COLLECTIONS`개. 연결되어 조회에 성공했을 때만 채워집니다.
    pub collections: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncates_by_characters_not_bytes() {
        let reason = "데".repeat(60);
        let cut = truncate_reason(&reason);
        assert_eq!(cut.chars().count(), MAX_REASON_CHARS);

        assert_eq!(truncate_reason("short"), "short");
    }

    #[test]
    fn default_report_is_not_connected() {
        let value = serde_json::to_value(DiagnosticsReport::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "backend_status": "✅ Running",
                "database_status": "❌ Not Available",
                "database_url_configured": false,
                "database_name_configured": false,
                "connection_status": "Not Connected",
                "collections": []
            })
        );
    }

    #[test]
    fn error_statuses_embed_their_reason() {
        let status = DatabaseStatus::connected_with_error("no such table: wires");
        assert_eq!(status.to_string(), "⚠️  Connected but Error: no such table: wires");
        assert_eq!(status.reason(), Some("no such table: wires"));

        let status = DatabaseStatus::error("boom");
        assert_eq!(status.to_string(), "❌ Error: boom");
        assert!(DatabaseStatus::ConnectedWorking.reason().is_none());
    }
}
