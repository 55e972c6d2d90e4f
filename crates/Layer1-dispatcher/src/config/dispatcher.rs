//! Dispatcher Configuration - 디스패치 동작 설정
//!
//! TOML(기본) 또는 JSON 파일에서 로드할 수 있습니다.
//!
//! ```toml
//! stop_on_propagation = true
//! debug_mode = false
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 디스패처 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// 이벤트 전파가 중단되면 남은 리스너 호출을 건너뜀
    pub stop_on_propagation: bool,

    /// 디버그 모드 (리스너 호출마다 trace 로깅)
    pub debug_mode: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            stop_on_propagation: true,
            debug_mode: false,
        }
    }
}

impl DispatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 전파 중단 여부와 관계없이 모든 리스너를 호출
    pub fn ignore_propagation(mut self) -> Self {
        self.stop_on_propagation = false;
        self
    }

    /// 디버그 모드 설정
    pub fn with_debug(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// TOML 문자열에서 파싱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// JSON 문자열에서 파싱
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 파일에서 로드 (`.json` 확장자면 JSON, 그 외는 TOML)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        parsed.map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// 파일에서 로드 (없거나 잘못된 경우 기본값)
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) if e.is_invalid_config() => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid dispatcher config, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Dispatcher config not loaded, using defaults");
                Self::default()
            }
        }
    }
}
