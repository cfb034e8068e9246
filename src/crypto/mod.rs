//! Cryptographic transforms for the web logon handshake.
//!
//! The web API will not accept the logon nonce in the clear: it expects
//! the nonce encrypted under a fresh symmetric session key, together with
//! that key wrapped under Steam's fixed system public key. Both transforms
//! live here and are pure: no state survives a handshake attempt.

pub mod encryptor;
pub mod session_key;

pub use encryptor::{NonceEncryptor, SealedNonce};
pub use session_key::SessionKey;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("failed to parse system public key: {0}")]
    PublicKey(#[from] rsa::pkcs8::spki::Error),

    #[error("failed to wrap session key: {0}")]
    KeyWrap(#[from] rsa::Error),

    #[error("failed to encrypt nonce")]
    NonceEncrypt,
}
