//! # event-dispatcher
//!
//! 동기식 인프로세스 이벤트 디스패처:
//! - Event: 이벤트 계약 (`Event` trait) + 기본 구현 (`ParamsEvent`)
//! - Dispatcher: 이름별 리스너 등록/해제, once 리스너, 동기 디스패치
//! - Registry: 키별 디스패처 싱글턴 (주입형 + 전역)
//! - Config: 디스패치 정책 (전파 중단 처리, 디버그 로깅)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  DispatcherRegistry ("event_dispatcher", "foo", ...)    │
//! │                     │                                   │
//! │                     ▼                                   │
//! │               Dispatcher<E>                             │
//! │   on / once / off / off_all / has_listeners             │
//! │                     │                                   │
//! │                     ▼ dispatch(&mut E)                  │
//! │   Listener 1 ─▶ Listener 2 ─▶ ... (등록 순서)           │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod registry;
pub mod strings;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::DispatcherConfig;

// ============================================================================
// Event (이벤트 시스템)
// ============================================================================
pub use event::{
    // Dispatcher
    Dispatcher,
    // Types
    Event,
    // Listener
    Listener,
    ListenerId,
    ParamsEvent,
};

// ============================================================================
// Registry (디스패처 레지스트리)
// ============================================================================
pub use registry::{
    // Global
    get_dispatcher,
    global_registry,
    // Types
    DispatcherAware,
    DispatcherRegistry,
};

// ============================================================================
// Strings (상수)
// ============================================================================
pub use strings::{DEFAULT_DISPATCHER_KEY, DISPATCHER_CONFIG_FILE};
