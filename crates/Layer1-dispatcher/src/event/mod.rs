//! Event System - 동기식 이벤트 발행/구독
//!
//! 이름 붙은 이벤트 채널에 리스너를 등록하고, 이벤트를 디스패치하면 해당
//! 이름의 모든 리스너가 등록 순서대로 같은 이벤트를 받습니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Dispatcher                           │
//! │  "user.created" ─▶ [Listener 1] [Listener 2] [Once 3]       │
//! │  "user.deleted" ─▶ [Listener 4]                             │
//! │                                                             │
//! │  dispatch(&mut event)                                       │
//! │     1. 읽기 락으로 리스너 스냅샷                            │
//! │     2. 락 해제 후 순서대로 호출 (같은 &mut event 공유)      │
//! │     3. once 리스너는 호출 직후 스스로 off                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용법
//!
//! ```
//! use event_dispatcher::event::{Dispatcher, Event, ParamsEvent};
//!
//! let dispatcher: Dispatcher = Dispatcher::new();
//!
//! // 1. 리스너 등록
//! let id = dispatcher.on("order.placed", |event: &mut ParamsEvent| {
//!     event.set_param("confirmed", true);
//! });
//!
//! // 2. 이벤트 디스패치
//! let mut event = ParamsEvent::new("order.placed").with_param("order_id", 7);
//! dispatcher.dispatch(&mut event);
//! assert_eq!(event.param_as::<bool>("confirmed"), Some(true));
//!
//! // 3. 리스너 해제
//! dispatcher.off("order.placed", id);
//! ```

pub mod dispatcher;
pub mod listener;
pub mod types;

// Re-exports
pub use dispatcher::Dispatcher;
pub use listener::{Listener, ListenerId};
pub use types::{Event, ParamsEvent};
