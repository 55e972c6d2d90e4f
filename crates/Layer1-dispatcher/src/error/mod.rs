//! Error types for event-dispatcher
//!
//! 디스패처/레지스트리 연산은 실패하지 않으며, 에러는 설정 로드에서만 발생

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// event-dispatcher 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// 설정 에러 생성 헬퍼
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// 설정 파일 자체의 문제인지 확인 (IO 실패가 아닌 경우)
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Json(_) | Error::Toml(_))
    }
}
