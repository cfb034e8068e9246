use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::crypto::{CryptoError, NonceEncryptor};
use crate::error::HandshakeError;
use crate::events::{SessionEvent, SessionEventReceiver, SessionEventSender};
use crate::handshake::retry::{FailureKind, RetryScheduler};
use crate::net::{Connection, Dispatcher, EMsg, EResult};
use crate::steamid::SteamId;
use crate::web::{WebApiTransport, WebAuthClient, WebSession};

/// Retry delay in milliseconds when the nonce request itself is refused.
/// Independent of the web auth backoff.
const NONCE_RETRY_MS: u64 = 500;

/// Where the handshake currently stands. `Succeeded` is not sticky;
/// calling [`WebSessionHandshake::web_log_on`] again renews the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    NonceRequested,
    Authenticating,
    Succeeded,
}

/// Anything that can sink one web auth attempt after the nonce arrived.
#[derive(Debug, Error)]
enum AttemptError {
    #[error("{0}")]
    Crypto(#[from] CryptoError),
    #[error("{0}")]
    Api(#[from] crate::web::WebApiError),
}

impl AttemptError {
    fn is_rate_limited(&self) -> bool {
        matches!(self, AttemptError::Api(e) if e.is_rate_limited())
    }
}

/// Drives the whole web logon sequence for one logical session.
///
/// The flow: [`web_log_on`](Self::web_log_on) sends the nonce request
/// over the binary connection; the connection's dispatch loop feeds the
/// response back through
/// [`handle_nonce_response`](Self::handle_nonce_response); on an OK
/// status the nonce is encrypted and exchanged for cookies via the web
/// API, and the resulting session is emitted as a
/// [`SessionEvent::WebSession`]. Every failure after the initial request
/// is retried internally; callers only ever see the event.
///
/// Known limitation: calling `web_log_on` while an authentication is
/// already in flight races two attempts; the handshake does not guard
/// against it.
pub struct WebSessionHandshake<C, T> {
    inner: Arc<Inner<C, T>>,
}

impl<C, T> Clone for WebSessionHandshake<C, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct Inner<C, T> {
    conn: Arc<C>,
    web: WebAuthClient<T>,
    encryptor: NonceEncryptor,
    state: Mutex<State>,
    events: SessionEventSender,
}

#[derive(Debug)]
struct State {
    phase: Phase,
    retry: RetryScheduler,
}

impl<C: Connection, T: WebApiTransport> WebSessionHandshake<C, T> {
    /// Handshake wrapping session keys under the Steam system public key.
    pub fn new(conn: Arc<C>, transport: T) -> Result<(Self, SessionEventReceiver), CryptoError> {
        Ok(Self::with_encryptor(conn, transport, NonceEncryptor::new()?))
    }

    pub fn with_encryptor(
        conn: Arc<C>,
        transport: T,
        encryptor: NonceEncryptor,
    ) -> (Self, SessionEventReceiver) {
        let (events, receiver) = tokio::sync::mpsc::unbounded_channel();
        let handshake = Self {
            inner: Arc::new(Inner {
                conn,
                web: WebAuthClient::new(transport),
                encryptor,
                state: Mutex::new(State {
                    phase: Phase::Idle,
                    retry: RetryScheduler::new(),
                }),
                events,
            }),
        };
        (handshake, receiver)
    }

    /// Wire the nonce-response handler into the connection's dispatch
    /// table. Call once at startup.
    pub fn register(&self, dispatcher: &mut Dispatcher) {
        let this = self.clone();
        dispatcher.register(
            EMsg::ClientRequestWebAPIAuthenticateUserNonceResponse,
            move |msg| {
                let this = this.clone();
                tokio::spawn(async move {
                    this.handle_nonce_response(msg.eresult, msg.payload).await;
                });
            },
        );
    }

    pub fn phase(&self) -> Phase {
        self.state().phase
    }

    /// Request a web logon nonce from the network service.
    ///
    /// Errors with [`HandshakeError::NotConnected`] when there is no
    /// logon, and [`HandshakeError::InvalidIdentityKind`] when the logon
    /// is anonymous. Nothing is transmitted in either case.
    pub fn web_log_on(&self) -> Result<(), HandshakeError> {
        let steam_id = self
            .inner
            .conn
            .steam_id()
            .ok_or(HandshakeError::NotConnected)?;
        if !steam_id.is_individual() {
            return Err(HandshakeError::InvalidIdentityKind);
        }

        self.inner
            .conn
            .send(EMsg::ClientRequestWebAPIAuthenticateUserNonce, Vec::new());
        self.state().phase = Phase::NonceRequested;
        Ok(())
    }

    /// Same as [`web_log_on`](Self::web_log_on) but a no-op when the
    /// preconditions do not hold. Retry timers use this, since they may
    /// fire after a disconnect.
    pub fn web_log_on_silent(&self) {
        match self.inner.conn.steam_id() {
            Some(id) if id.is_individual() => {}
            _ => return,
        }
        let _ = self.web_log_on();
    }

    /// Feed the nonce response delivered by the binary connection.
    pub async fn handle_nonce_response(&self, eresult: EResult, nonce: Vec<u8>) {
        if eresult != EResult::Ok {
            debug!(%eresult, "nonce request rejected, retrying");
            self.emit_debug(format!(
                "Got response {} from ClientRequestWebAPIAuthenticateUserNonceResponse, retrying",
                eresult
            ));
            self.schedule_retry(Duration::from_millis(NONCE_RETRY_MS));
            return;
        }

        let Some(steam_id) = self.inner.conn.steam_id() else {
            // connection dropped between the request and the response;
            // the next logon will start over
            return;
        };
        self.state().phase = Phase::Authenticating;

        match self.try_authenticate(steam_id, &nonce).await {
            Ok(session) => {
                self.state().phase = Phase::Succeeded;
                let WebSession {
                    session_id,
                    cookies,
                } = session;
                let _ = self.inner.events.send(SessionEvent::WebSession {
                    session_id,
                    cookies,
                });
            }
            Err(err) => {
                warn!(error = %err, "web authentication failed");
                self.emit_debug(format!("Webauth failed: {}", err));

                let kind = if err.is_rate_limited() {
                    FailureKind::RateLimited
                } else {
                    FailureKind::Other
                };
                let delay = self.state().retry.on_failure(kind);
                debug!(delay_ms = delay.as_millis() as u64, "scheduling web logon retry");
                self.schedule_retry(delay);
            }
        }
    }

    async fn try_authenticate(
        &self,
        steam_id: SteamId,
        nonce: &[u8],
    ) -> Result<WebSession, AttemptError> {
        let sealed = self.inner.encryptor.encrypt(nonce)?;
        let session = self
            .inner
            .web
            .authenticate(steam_id, &sealed.encrypted_nonce, &sealed.encrypted_session_key)
            .await?;
        Ok(session)
    }

    /// Timers are fire-and-forget: a stale one firing after a success
    /// just re-runs the silent entry, which the precondition checks keep
    /// safe.
    fn schedule_retry(&self, delay: Duration) {
        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            this.web_log_on_silent();
        });
    }

    fn emit_debug(&self, message: String) {
        let _ = self.inner.events.send(SessionEvent::Debug(message));
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner
            .state
            .lock()
            .expect("handshake state lock poisoned")
    }
}
