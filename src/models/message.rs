//! # 메시지 응답 모델

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` 형태의 고정 메시지 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
