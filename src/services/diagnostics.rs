//! # 진단 보고서 생성
//!
//! 데이터베이스 협력자의 상태를 단계적으로 확인해 `DiagnosticsReport`를 만듭니다.
//!
//! ## 확인 순서
//! 1. 모듈이 없으면 → `ModuleNotFound` (이후 확인 생략)
//! 2. 핸들이 없으면 → `AvailableUninitialized`
//! 3. 핸들이 있으면 → `Available` + `Connected`, 이어서 컬렉션 목록 조회
//!    - 성공: 앞의 10개만 담고 `ConnectedWorking`
//!    - 실패: `ConnectedWithError(사유)`, 재시도하지 않음
//! 4. 핸들 생성 자체가 실패했으면 → `Error(사유)`
//! 5. 위 결과와 무관하게 환경변수 설정 여부를 기록
//!
//! 어떤 경우에도 에러를 반환하지 않습니다. 모든 실패는 보고서의 상태 문자열이 됩니다.

use crate::{
    config::DatabaseEnv,
    db::DatabaseSlot,
    models::{ConnectionStatus, DatabaseStatus, DiagnosticsReport, MAX_COLLECTIONS},
};

/// 핸들에 이름이 없을 때 로그에 남기는 표시
const UNNAMED_DATABASE: &str = "✅ Connected";

/// 데이터베이스 상태를 확인해 진단 보고서를 만듭니다.
pub async fn build_report(slot: &DatabaseSlot, env: DatabaseEnv) -> DiagnosticsReport {
    let mut report = DiagnosticsReport::default();

    match slot {
        DatabaseSlot::Absent => {
            report.database_status = DatabaseStatus::ModuleNotFound;
        }
        DatabaseSlot::Uninitialized => {
            report.database_status = DatabaseStatus::AvailableUninitialized;
        }
        DatabaseSlot::Broken(reason) => {
            tracing::warn!("Database handle unusable: {}", reason);
            report.database_status = DatabaseStatus::error(reason);
        }
        DatabaseSlot::Ready(handle) => {
            report.database_status = DatabaseStatus::Available;
            report.connection_status = ConnectionStatus::Connected;

            let name = handle.name().unwrap_or(UNNAMED_DATABASE);
            tracing::debug!(database = name, "Probing database collections");

            match handle.list_collections().await {
                Ok(mut collections) => {
                    collections.truncate(MAX_COLLECTIONS);
                    report.collections = collections;
                    report.database_status = DatabaseStatus::ConnectedWorking;
                }
                Err(err) => {
                    tracing::warn!(database = name, "Listing collections failed: {}", err);
                    report.database_status = DatabaseStatus::connected_with_error(&err.to_string());
                }
            }
        }
    }

    report.database_url_configured = env.url_configured;
    report.database_name_configured = env.name_configured;

    tracing::debug!(
        status = %report.database_status,
        collections = report.collections.len(),
        "Diagnostics report built"
    );
    report
}
