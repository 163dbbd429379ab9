//! # 인사 메시지 핸들러
//!
//! ## 엔드포인트
//! - `GET /` → `{ "message": "Hello from FastAPI Backend!" }`
//! - `GET /api/hello` → `{ "message": "Hello from the backend API!" }`
//!
//! 서버가 살아 있는지 확인하는 용도로도 쓰입니다.

use crate::models::Message;
use axum::Json;

pub const ROOT_MESSAGE: &str = "Hello from FastAPI Backend!";
pub const HELLO_MESSAGE: &str = "Hello from the backend API!";

/// `GET /`
pub async fn root() -> Json<Message> {
    Json(Message::new(ROOT_MESSAGE))
}

/// `GET /api/hello`
pub async fn hello() -> Json<Message> {
    Json(Message::new(HELLO_MESSAGE))
}
