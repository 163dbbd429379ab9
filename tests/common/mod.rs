//! 통합 테스트 공용 도우미

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use chronicle::{
    db::{DatabaseHandle, DatabaseSlot, ProbeError},
    routes::AppState,
    startup::build_router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// 정해 둔 결과를 돌려주는 가짜 데이터베이스
pub struct FakeDatabase {
    pub name: Option<String>,
    pub collections: Result<Vec<String>, String>,
}

#[async_trait]
impl DatabaseHandle for FakeDatabase {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn list_collections(&self) -> Result<Vec<String>, ProbeError> {
        self.collections.clone().map_err(ProbeError::Query)
    }
}

pub fn ready_slot(collections: Result<Vec<String>, String>) -> DatabaseSlot {
    DatabaseSlot::Ready(Arc::new(FakeDatabase {
        name: Some("chronicle".to_string()),
        collections,
    }))
}

/// 라우터에 GET 요청 하나를 보내고 응답을 받습니다.
pub async fn get(slot: DatabaseSlot, uri: &str) -> Response<Body> {
    build_router(AppState::new(slot))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// GET 요청 후 200인지 확인하고 JSON 본문을 반환합니다.
pub async fn get_json(slot: DatabaseSlot, uri: &str) -> Value {
    let response = get(slot, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
