//! Listener - 이벤트 콜백과 식별자
//!
//! 클로저는 주소 비교로 동일성을 판단할 수 없으므로, 모든 리스너는 생성 시
//! 고유한 [`ListenerId`]를 받습니다. 해제는 이 ID로만 이루어집니다.

use super::types::Event;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static LISTENER_COUNTER: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// ListenerId
// ============================================================================

/// 리스너 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// 프로세스 내에서 고유한 새 ID 발급
    pub(crate) fn next() -> Self {
        Self(LISTENER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

// ============================================================================
// Listener
// ============================================================================

type Callback<E> = dyn Fn(&mut E) + Send + Sync;

/// 등록 가능한 이벤트 리스너
///
/// `clone()`은 같은 ID를 유지합니다. 같은 리스너를 여러 번 등록하면
/// `off` 한 번으로 모든 등록이 해제됩니다.
///
/// ```
/// use event_dispatcher::{Dispatcher, Listener, ParamsEvent};
///
/// let dispatcher: Dispatcher = Dispatcher::new();
/// let listener = Listener::new(|event: &mut ParamsEvent| {
///     event.set_param("seen", true);
/// });
///
/// dispatcher.on_listener("a", listener.clone());
/// dispatcher.on_listener("a", listener.clone());
/// assert_eq!(dispatcher.listener_count("a"), 2);
///
/// dispatcher.off("a", listener.id());
/// assert!(!dispatcher.has_listeners("a"));
/// ```
pub struct Listener<E> {
    id: ListenerId,
    name: Option<Arc<str>>,
    callback: Arc<Callback<E>>,
}

impl<E: Event> Listener<E> {
    /// 클로저로 리스너 생성
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        Self {
            id: ListenerId::next(),
            name: None,
            callback: Arc::new(callback),
        }
    }

    /// 이름 있는 리스너 생성 (디버깅/로깅용)
    pub fn named<F>(name: impl Into<Arc<str>>, callback: F) -> Self
    where
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        let mut listener = Self::new(callback);
        listener.name = Some(name.into());
        listener
    }

    /// 리스너 ID
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// 리스너 이름
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 같은 콜백을 새 ID로 다시 묶음 (once 래퍼용)
    pub(crate) fn rebind(&self) -> Self {
        Self {
            id: ListenerId::next(),
            name: self.name.clone(),
            callback: Arc::clone(&self.callback),
        }
    }

    /// 리스너 호출
    pub fn call(&self, event: &mut E) {
        (self.callback)(event)
    }
}

impl<E> Clone for Listener<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<E> fmt::Debug for Listener<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
