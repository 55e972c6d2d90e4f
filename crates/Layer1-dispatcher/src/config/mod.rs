//! Config - 디스패처 설정 관리
//!
//! - `dispatcher.rs` - DispatcherConfig (전파 정책, 디버그 로깅)

mod dispatcher;

pub use dispatcher::DispatcherConfig;
