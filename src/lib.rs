//! Web session bootstrap handshake for clients connected to the Steam network.
//!
//! A client that is already logged onto the Steam binary network holds a
//! single-use nonce it can exchange for a browser-usable web session: a
//! CSRF session id plus one or two login cookies. This crate implements
//! that exchange: requesting the nonce over the binary connection,
//! encrypting it under a fresh session key, posting it to the
//! `ISteamUserAuth/AuthenticateUser` web API, and delivering the resulting
//! session to the caller as an event. Failures after the initial request
//! are retried internally with exponential backoff.
//!
//! The binary connection and the web API transport are consumed through
//! the [`net::Connection`] and [`web::WebApiTransport`] traits; this crate
//! does not implement protocol framing or connection management.

pub mod crypto;
pub mod error;
pub mod events;
pub mod handshake;
pub mod net;
pub mod steamid;
pub mod web;

pub use crypto::{CryptoError, NonceEncryptor, SealedNonce};
pub use error::HandshakeError;
pub use events::{SessionEvent, SessionEventReceiver, SessionEventSender};
pub use handshake::{FailureKind, Phase, RetryScheduler, WebSessionHandshake};
pub use net::{Connection, Dispatcher, EMsg, EResult, NetMessage};
pub use steamid::{AccountType, SteamId};
pub use web::{HttpApiTransport, WebApiError, WebApiTransport, WebAuthClient, WebSession};
