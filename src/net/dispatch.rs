//! Message dispatch from the binary connection to interested components.
//!
//! Components register a handler per message type once at startup; the
//! connection's read loop then hands every decoded message to
//! [`Dispatcher::dispatch`]. One handler per tag; later registrations
//! replace earlier ones.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::net::message::{EMsg, EResult};

/// A decoded protocol message as delivered by the connection's read loop.
#[derive(Debug, Clone)]
pub struct NetMessage {
    pub kind: EMsg,
    pub eresult: EResult,
    pub payload: Vec<u8>,
}

type Handler = Box<dyn Fn(NetMessage) + Send + Sync>;

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EMsg, Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: EMsg, handler: F)
    where
        F: Fn(NetMessage) + Send + Sync + 'static,
    {
        if self.handlers.insert(kind, Box::new(handler)).is_some() {
            warn!(?kind, "replaced existing message handler");
        }
    }

    /// Routes one message to its handler. Returns whether a handler was
    /// registered for the tag.
    pub fn dispatch(&self, message: NetMessage) -> bool {
        match self.handlers.get(&message.kind) {
            Some(handler) => {
                handler(message);
                true
            }
            None => {
                trace!(kind = ?message.kind, "no handler for message");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_dispatch_routes_by_tag() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = Dispatcher::new();

        let counter = hits.clone();
        dispatcher.register(
            EMsg::ClientRequestWebAPIAuthenticateUserNonceResponse,
            move |msg| {
                assert_eq!(msg.eresult, EResult::Ok);
                assert_eq!(msg.payload, vec![0xAA, 0xBB]);
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        let handled = dispatcher.dispatch(NetMessage {
            kind: EMsg::ClientRequestWebAPIAuthenticateUserNonceResponse,
            eresult: EResult::Ok,
            payload: vec![0xAA, 0xBB],
        });
        assert!(handled);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let unhandled = dispatcher.dispatch(NetMessage {
            kind: EMsg::ClientRequestWebAPIAuthenticateUserNonce,
            eresult: EResult::Ok,
            payload: Vec::new(),
        });
        assert!(!unhandled);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
