//! Registry - 키별 디스패처 인스턴스 관리
//!
//! 문자열 키마다 하나의 [`Dispatcher`]를 지연 생성하여 공유합니다.
//! 명시적으로 소유하는 [`DispatcherRegistry`]를 주입해서 쓰거나,
//! 프로세스 전역 레지스트리([`global_registry`], [`get_dispatcher`])를 사용할 수 있습니다.

use crate::config::DispatcherConfig;
use crate::event::{Dispatcher, Event, ParamsEvent};
use crate::strings::DEFAULT_DISPATCHER_KEY;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

// ============================================================================
// DispatcherRegistry
// ============================================================================

/// 키 → 디스패처 레지스트리
///
/// 같은 키에 대해서는 레지스트리 수명 동안 단 하나의 인스턴스만 존재합니다.
///
/// ```
/// use event_dispatcher::DispatcherRegistry;
/// use std::sync::Arc;
///
/// let registry: DispatcherRegistry = DispatcherRegistry::new();
/// let a = registry.get_instance(None);
/// let b = registry.get_instance(None);
/// assert!(Arc::ptr_eq(&a, &b));
///
/// let foo = registry.get_instance(Some("foo"));
/// assert!(!Arc::ptr_eq(&a, &foo));
/// ```
pub struct DispatcherRegistry<E = ParamsEvent> {
    /// 새로 만드는 디스패처에 적용할 설정
    config: DispatcherConfig,

    dispatchers: RwLock<HashMap<String, Arc<Dispatcher<E>>>>,
}

impl<E: Event> DispatcherRegistry<E> {
    /// 기본 설정으로 레지스트리 생성
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    /// 생성되는 디스패처에 적용할 설정 지정
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            config,
            dispatchers: RwLock::new(HashMap::new()),
        }
    }

    /// 키에 해당하는 디스패처 (없으면 생성)
    ///
    /// `None`이면 [`DEFAULT_DISPATCHER_KEY`]를 사용합니다.
    pub fn get_instance(&self, key: Option<&str>) -> Arc<Dispatcher<E>> {
        let key = key.unwrap_or(DEFAULT_DISPATCHER_KEY);

        if let Some(dispatcher) = self.dispatchers.read().get(key) {
            return Arc::clone(dispatcher);
        }

        // 동시에 처음 접근한 스레드가 있어도 쓰기 락 안에서 한 번만 생성
        let mut dispatchers = self.dispatchers.write();
        let dispatcher = dispatchers.entry(key.to_string()).or_insert_with(|| {
            debug!(key, "Creating dispatcher instance");
            Arc::new(Dispatcher::with_config(self.config.clone()))
        });
        Arc::clone(dispatcher)
    }

    /// 키가 등록되어 있는지 확인
    pub fn contains(&self, key: &str) -> bool {
        self.dispatchers.read().contains_key(key)
    }

    /// 등록된 키 목록 (정렬됨)
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.dispatchers.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// 레지스트리에서 디스패처 제거
    ///
    /// 이미 받아간 `Arc`는 계속 유효하며, 이후 같은 키로 조회하면 새 인스턴스가 생성됩니다.
    pub fn remove(&self, key: &str) -> Option<Arc<Dispatcher<E>>> {
        let removed = self.dispatchers.write().remove(key);
        if removed.is_some() {
            debug!(key, "Removed dispatcher instance");
        }
        removed
    }

    /// 등록된 디스패처 수
    pub fn len(&self) -> usize {
        self.dispatchers.read().len()
    }

    /// 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.dispatchers.read().is_empty()
    }
}

impl<E: Event> Default for DispatcherRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DispatcherAware
// ============================================================================

/// 자신이 사용하는 디스패처를 노출하는 컴포넌트
pub trait DispatcherAware<E: Event = ParamsEvent> {
    /// 이 컴포넌트가 이벤트를 발행하는 디스패처
    fn dispatcher(&self) -> Arc<Dispatcher<E>>;
}

// ============================================================================
// 전역 Registry
// ============================================================================

static GLOBAL_REGISTRY: OnceLock<DispatcherRegistry> = OnceLock::new();

/// 전역 레지스트리 가져오기
pub fn global_registry() -> &'static DispatcherRegistry {
    GLOBAL_REGISTRY.get_or_init(DispatcherRegistry::new)
}

/// 전역 레지스트리에서 디스패처 가져오기 (편의 함수)
pub fn get_dispatcher(key: Option<&str>) -> Arc<Dispatcher> {
    global_registry().get_instance(key)
}

// ============================================================================
// 테스트
// ============================================================================
