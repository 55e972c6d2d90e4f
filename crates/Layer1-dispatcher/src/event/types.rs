//! Event Types - 디스패치 가능한 이벤트 정의
//!
//! 디스패처는 [`Event`] trait만 요구합니다. 기본 구현인 [`ParamsEvent`]는
//! 이름과 키/값 파라미터를 가진 단순 데이터 객체입니다.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// Event Trait
// ============================================================================

/// 디스패처가 전달할 수 있는 이벤트
///
/// 한 번의 디스패치 동안 모든 리스너가 같은 인스턴스를 `&mut`로 공유하므로,
/// 앞선 리스너의 변경 사항이 뒤의 리스너와 호출자에게 그대로 보입니다.
pub trait Event: Send {
    /// 이벤트 이름 (리스너 조회 키)
    fn name(&self) -> &str;

    /// 전파가 중단되었는지 여부
    fn is_propagation_stopped(&self) -> bool;

    /// 이후 리스너로의 전파 중단
    fn stop_propagation(&mut self);
}

// ============================================================================
// ParamsEvent - 기본 이벤트 구현
// ============================================================================

/// 이름 + 파라미터 맵을 가진 기본 이벤트
///
/// ```
/// use event_dispatcher::{Event, ParamsEvent};
///
/// let mut event = ParamsEvent::new("user.created");
/// event.set_param("id", 42).set_param("name", "alice");
///
/// assert_eq!(event.name(), "user.created");
/// assert_eq!(event.param_as::<u64>("id"), Some(42));
/// assert!(event.get_param("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsEvent {
    /// 이벤트 이름 (생성 후 변경 불가)
    name: String,

    /// 전파 중단 플래그
    #[serde(default)]
    propagation_stopped: bool,

    /// 이벤트 파라미터
    #[serde(default)]
    params: HashMap<String, Value>,
}

impl ParamsEvent {
    /// 새 이벤트 생성 (전파 중단 안 됨, 파라미터 없음)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            propagation_stopped: false,
            params: HashMap::new(),
        }
    }

    /// 파라미터 추가 (빌더)
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// 파라미터 설정 (기존 값 덮어씀)
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// 파라미터 삭제 (없으면 아무 일도 하지 않음)
    pub fn remove_param(&mut self, key: &str) -> &mut Self {
        self.params.remove(key);
        self
    }

    /// 파라미터 존재 여부
    pub fn has_param(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// 파라미터 조회
    pub fn get_param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// 파라미터를 지정한 타입으로 역직렬화하여 조회
    ///
    /// 키가 없거나 타입이 맞지 않으면 `None`.
    pub fn param_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.params.get(key)?;
        T::deserialize(value).ok()
    }

    /// 전체 파라미터
    pub fn params(&self) -> &HashMap<String, Value> {
        &self.params
    }
}

impl Event for ParamsEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_EVENT_NAME: &str = "test_name";

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestPayload {
        foo: String,
        bar: i64,
    }

    #[test]
    fn test_name() {
        let event = ParamsEvent::new(TEST_EVENT_NAME);
        assert_eq!(event.name(), TEST_EVENT_NAME);
    }

    #[test]
    fn test_stop_propagation() {
        let mut event = ParamsEvent::new(TEST_EVENT_NAME);
        assert!(!event.is_propagation_stopped());

        event.stop_propagation();
        assert!(event.is_propagation_stopped());
    }

    #[test]
    fn test_params() {
        let mut event = ParamsEvent::new(TEST_EVENT_NAME);
        let key = "test_key";

        // 없는 파라미터
        assert!(!event.has_param(key));
        assert_eq!(event.get_param(key), None);

        // 체이닝은 같은 인스턴스를 반환
        let event_ptr: *const ParamsEvent = &event;
        let returned: *const ParamsEvent = event.set_param(key, "test value");
        assert_eq!(event_ptr, returned);

        assert!(event.has_param(key));
        assert_eq!(event.get_param(key), Some(&json!("test value")));

        let returned: *const ParamsEvent = event.remove_param(key);
        assert_eq!(event_ptr, returned);
        assert!(!event.has_param(key));

        // 없는 키 삭제는 no-op
        event.remove_param(key);
        assert!(event.params().is_empty());
    }

    #[test]
    fn test_empty_string_is_distinct_from_missing() {
        let event = ParamsEvent::new(TEST_EVENT_NAME).with_param("empty", "");
        assert_eq!(event.get_param("empty"), Some(&json!("")));
        assert_eq!(event.get_param("other"), None);
    }

    #[test]
    fn test_structured_param() {
        let payload = TestPayload {
            foo: "test".to_string(),
            bar: 1,
        };

        let mut event = ParamsEvent::new(TEST_EVENT_NAME);
        event.set_param("payload", serde_json::to_value(&payload).unwrap());

        assert_eq!(event.param_as::<TestPayload>("payload"), Some(payload));
        // 타입 불일치는 None
        assert_eq!(event.param_as::<u32>("payload"), None);
    }
}
