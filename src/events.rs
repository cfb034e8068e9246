use tokio::sync::mpsc;

/// Events the handshake delivers to its owner.
///
/// `WebSession` transfers ownership of the session to the receiver; the
/// handshake keeps no copy. `Debug` carries diagnostics for retryable
/// failures; a caller watching only `WebSession` cannot tell how many
/// retries happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    WebSession {
        session_id: String,
        cookies: Vec<String>,
    },
    Debug(String),
}

pub type SessionEventSender = mpsc::UnboundedSender<SessionEvent>;
pub type SessionEventReceiver = mpsc::UnboundedReceiver<SessionEvent>;
