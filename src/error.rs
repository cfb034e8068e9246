use thiserror::Error;

/// Precondition failures surfaced by [`crate::WebSessionHandshake::web_log_on`].
///
/// Everything that can go wrong after the nonce request has been sent is
/// recovered internally and reported only through the
/// [`crate::SessionEvent::Debug`] channel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeError {
    #[error("cannot log onto steamcommunity.com without first being connected to the Steam network")]
    NotConnected,

    #[error("web logon requires an individual account, not an anonymous one")]
    InvalidIdentityKind,
}
