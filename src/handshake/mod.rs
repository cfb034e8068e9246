//! The handshake state machine and its retry scheduling.

pub mod controller;
pub mod retry;

pub use controller::{Phase, WebSessionHandshake};
pub use retry::{FailureKind, RetryScheduler};
