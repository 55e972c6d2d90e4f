//! Dispatcher - 동기식 이벤트 디스패처
//!
//! 이벤트 이름별로 리스너 목록을 관리하고, 등록 순서대로 리스너를 호출합니다.

use super::listener::{Listener, ListenerId};
use super::types::{Event, ParamsEvent};
use crate::config::DispatcherConfig;
use crate::strings::event_names;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

// ============================================================================
// Registration
// ============================================================================

/// 이벤트 이름 하나에 대한 등록 정보
struct Registration<E> {
    listener: Listener<E>,

    /// once 등록이면 호출 여부 플래그
    fired: Option<Arc<AtomicBool>>,
}

impl<E> Clone for Registration<E> {
    fn clone(&self) -> Self {
        Self {
            listener: self.listener.clone(),
            fired: self.fired.clone(),
        }
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// 이벤트 디스패처
///
/// 모든 연산은 여러 스레드에서 동시에 호출할 수 있습니다. 등록/해제는 쓰기 락,
/// 조회와 디스패치는 읽기 락을 사용합니다. 디스패치는 리스너 목록의 스냅샷을
/// 뜬 뒤 락을 놓고 리스너를 호출하므로, 리스너 안에서 같은 디스패처에
/// `on`/`off`/`once`를 호출해도 교착되지 않습니다. 이렇게 바뀐 내용은 다음
/// 디스패치부터 적용됩니다.
///
/// ## 사용법
///
/// ```
/// use event_dispatcher::{Dispatcher, Event, ParamsEvent};
///
/// let dispatcher: Dispatcher = Dispatcher::new();
///
/// // 여러 이벤트에 한 번에 등록
/// let id = dispatcher.on("user.created user.updated", |event: &mut ParamsEvent| {
///     event.set_param("handled", true);
/// });
///
/// // 한 번만 호출되는 리스너
/// dispatcher.once("user.created", |event: &mut ParamsEvent| {
///     event.stop_propagation();
/// });
///
/// let mut event = ParamsEvent::new("user.created");
/// dispatcher.dispatch(&mut event);
/// assert!(event.has_param("handled"));
/// assert!(event.is_propagation_stopped());
///
/// dispatcher.off("user.created", id);
/// assert!(!dispatcher.has_listeners("user.created"));
/// assert!(dispatcher.has_listeners("user.updated"));
/// ```
pub struct Dispatcher<E = ParamsEvent> {
    /// 설정
    config: DispatcherConfig,

    /// 이벤트 이름 → 등록 순서대로 정렬된 리스너
    listeners: RwLock<HashMap<String, Vec<Registration<E>>>>,

    /// 처리한 디스패치 호출 수
    dispatch_count: AtomicU64,
}

impl<E: Event> Dispatcher<E> {
    /// 기본 설정으로 디스패처 생성
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    /// 커스텀 설정으로 디스패처 생성
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            config,
            listeners: RwLock::new(HashMap::new()),
            dispatch_count: AtomicU64::new(0),
        }
    }

    /// 설정
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    // ========================================================================
    // 등록
    // ========================================================================

    /// 리스너 등록
    ///
    /// `names`는 공백으로 구분된 이벤트 이름 목록입니다. 반환된 ID로 해제합니다.
    pub fn on<F>(&self, names: &str, callback: F) -> ListenerId
    where
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        self.on_listener(names, Listener::new(callback))
    }

    /// 이미 만들어진 리스너 등록 (같은 리스너를 여러 번 등록 가능)
    pub fn on_listener(&self, names: &str, listener: Listener<E>) -> ListenerId {
        let id = listener.id();
        for name in event_names(names) {
            self.register(name, listener.clone(), None);
        }
        id
    }

    /// 한 번만 호출되는 리스너 등록
    ///
    /// 이름마다 첫 호출 후 스스로 해제됩니다. 반환된 ID는 래퍼의 ID이며,
    /// 호출 전에 `off`로 취소할 수 있습니다.
    pub fn once<F>(&self, names: &str, callback: F) -> ListenerId
    where
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        self.once_listener(names, Listener::new(callback))
    }

    /// 이미 만들어진 리스너를 once로 등록
    pub fn once_listener(&self, names: &str, listener: Listener<E>) -> ListenerId {
        let wrapper = listener.rebind();
        let id = wrapper.id();
        // 같은 이름이 반복되어도 플래그는 이름당 하나
        let mut flags: HashMap<&str, Arc<AtomicBool>> = HashMap::new();
        for name in event_names(names) {
            let fired = flags
                .entry(name)
                .or_insert_with(|| Arc::new(AtomicBool::new(false)))
                .clone();
            self.register(name, wrapper.clone(), Some(fired));
        }
        id
    }

    fn register(&self, name: &str, listener: Listener<E>, fired: Option<Arc<AtomicBool>>) {
        debug!(
            event = name,
            listener_id = %listener.id(),
            listener_name = listener.name().unwrap_or("anonymous"),
            once = fired.is_some(),
            "Registering event listener"
        );

        let mut listeners = self.listeners.write();
        listeners
            .entry(name.to_string())
            .or_default()
            .push(Registration { listener, fired });
    }

    // ========================================================================
    // 해제
    // ========================================================================

    /// 리스너 해제
    ///
    /// `name`에 `id`로 등록된 모든 항목을 제거하고 제거된 개수를 반환합니다.
    pub fn off(&self, name: &str, id: ListenerId) -> usize {
        let mut listeners = self.listeners.write();
        let Some(registrations) = listeners.get_mut(name) else {
            return 0;
        };

        let before = registrations.len();
        registrations.retain(|r| r.listener.id() != id);
        let removed = before - registrations.len();

        if registrations.is_empty() {
            listeners.remove(name);
        }

        if removed > 0 {
            debug!(event = name, listener_id = %id, removed, "Unregistered event listener");
        }

        removed
    }

    /// 이벤트의 모든 리스너 해제
    pub fn off_all(&self, name: &str) {
        let mut listeners = self.listeners.write();
        if let Some(removed) = listeners.remove(name) {
            debug!(event = name, removed = removed.len(), "Unregistered all event listeners");
        }
    }

    /// 모든 이벤트의 리스너 해제
    pub fn clear(&self) {
        let mut listeners = self.listeners.write();
        listeners.clear();
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 이벤트에 등록된 리스너가 있는지 확인 (once 리스너 포함)
    pub fn has_listeners(&self, name: &str) -> bool {
        self.listener_count(name) > 0
    }

    /// 이벤트에 등록된 리스너 수
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.read().get(name).map_or(0, Vec::len)
    }

    /// 리스너가 등록된 이벤트 이름 목록 (정렬됨)
    pub fn event_names(&self) -> Vec<String> {
        let listeners = self.listeners.read();
        let mut names: Vec<String> = listeners
            .iter()
            .filter(|(_, registrations)| !registrations.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// 총 디스패치 호출 수
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count.load(Ordering::Relaxed)
    }

    // ========================================================================
    // 디스패치
    // ========================================================================

    /// 이벤트 디스패치
    ///
    /// 이벤트 이름으로 등록된 리스너를 등록 순서대로 호출하고, 모든 리스너가
    /// 끝난 뒤 같은 이벤트를 돌려줍니다. `stop_on_propagation`이 켜져 있으면
    /// 전파가 중단된 시점 이후의 리스너는 호출하지 않습니다.
    pub fn dispatch<'e>(&self, event: &'e mut E) -> &'e mut E {
        let dispatch_number = self.dispatch_count.fetch_add(1, Ordering::Relaxed) + 1;

        // 리스너가 이름을 바꿔도 once 해제는 디스패치된 채널에서
        let name = event.name().to_string();

        let snapshot: Vec<Registration<E>> = {
            let listeners = self.listeners.read();
            match listeners.get(&name) {
                Some(registrations) if !registrations.is_empty() => registrations.clone(),
                _ => return event,
            }
        };

        if self.config.debug_mode {
            trace!(
                event = %name,
                listeners = snapshot.len(),
                "Dispatching event #{}", dispatch_number
            );
        }

        for registration in &snapshot {
            if self.config.stop_on_propagation && event.is_propagation_stopped() {
                trace!(event = %name, "Propagation stopped, skipping remaining listeners");
                break;
            }

            if let Some(fired) = &registration.fired {
                // 동시 디스패치 중 다른 스레드가 이미 호출함
                if fired.swap(true, Ordering::AcqRel) {
                    continue;
                }
                // 호출 전에 해제해서 리스너가 패닉해도 등록이 남지 않음
                self.off(&name, registration.listener.id());
            }

            if self.config.debug_mode {
                trace!(
                    event = %name,
                    listener_id = %registration.listener.id(),
                    listener_name = registration.listener.name().unwrap_or("anonymous"),
                    "Delivering event to listener"
                );
            }

            registration.listener.call(event);
        }

        event
    }
}

impl<E: Event> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.read();
        let counts: HashMap<&str, usize> = listeners
            .iter()
            .map(|(name, registrations)| (name.as_str(), registrations.len()))
            .collect();

        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("listeners", &counts)
            .field("dispatch_count", &self.dispatch_count.load(Ordering::Relaxed))
            .finish()
    }
}

// ============================================================================
// 테스트
// ============================================================================
