use chacha20poly1305::aead::{Aead, AeadCore, KeyInit};
use chacha20poly1305::{Key, XChaCha20Poly1305};
use rand::rngs::OsRng;
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;

use super::session_key::SessionKey;
use super::CryptoError;

/// Steam's fixed system public key. Session keys are wrapped under this
/// key so only Steam can recover them.
const SYSTEM_PUBLIC_KEY_PEM: &str = "-----BEGIN PUBLIC KEY-----
MIGdMA0GCSqGSIb3DQEBAQUAA4GLADCBhwKBgQDf7BrWLBBmLBc1OhSwfFkRf53T
2Ct64+AVzRkeRuh7h3SiGEYxqQMUeYKO6UWiSRKpI2hzic9pobFhRr3Bvr/WARvY
gdTckPv+T1JzZsuVcNfFjrocejN1oWI0Rrtgt4Bo+hOneoo3S57G9F1fOpn5nsQ6
6WOiu4gZKODnFMBCiQIBEQ==
-----END PUBLIC KEY-----";

/// Output of one encryption pass: everything the web API call needs.
pub struct SealedNonce {
    /// Random 24-byte nonce followed by the XChaCha20-Poly1305 ciphertext
    /// of the logon nonce.
    pub encrypted_nonce: Vec<u8>,
    /// RSA-wrapped copy of the session key.
    pub encrypted_session_key: Vec<u8>,
}

/// Stateless nonce encryptor.
///
/// Every [`encrypt`](NonceEncryptor::encrypt) call draws a fresh session
/// key and a fresh random nonce; nothing is reused across attempts.
pub struct NonceEncryptor {
    wrap_key: RsaPublicKey,
}

impl NonceEncryptor {
    /// Encryptor wrapping session keys under the Steam system public key.
    pub fn new() -> Result<Self, CryptoError> {
        Ok(Self {
            wrap_key: RsaPublicKey::from_public_key_pem(SYSTEM_PUBLIC_KEY_PEM)?,
        })
    }

    /// Encryptor with a caller-supplied wrapping key.
    pub fn with_public_key(wrap_key: RsaPublicKey) -> Self {
        Self { wrap_key }
    }

    pub fn encrypt(&self, nonce: &[u8]) -> Result<SealedNonce, CryptoError> {
        let session_key = SessionKey::generate(&self.wrap_key)?;

        let cipher = XChaCha20Poly1305::new(Key::from_slice(session_key.plain()));
        let iv = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&iv, nonce)
            .map_err(|_| CryptoError::NonceEncrypt)?;

        let mut encrypted_nonce = Vec::with_capacity(iv.len() + ciphertext.len());
        encrypted_nonce.extend_from_slice(&iv);
        encrypted_nonce.extend_from_slice(&ciphertext);

        Ok(SealedNonce {
            encrypted_nonce,
            encrypted_session_key: session_key.into_encrypted(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chacha20poly1305::XNonce;
    use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};

    use super::*;

    fn test_keypair() -> (RsaPrivateKey, RsaPublicKey) {
        let private = RsaPrivateKey::new(&mut OsRng, 1024).expect("keygen");
        let public = RsaPublicKey::from(&private);
        (private, public)
    }

    #[test]
    fn test_round_trip() {
        let (private, public) = test_keypair();
        let encryptor = NonceEncryptor::with_public_key(public);

        let sealed = encryptor.encrypt(&[0xAA, 0xBB]).expect("encrypt");

        let key = private
            .decrypt(Pkcs1v15Encrypt, &sealed.encrypted_session_key)
            .expect("unwrap session key");
        let cipher = XChaCha20Poly1305::new(Key::from_slice(&key));
        let (iv, ciphertext) = sealed.encrypted_nonce.split_at(24);
        let plain = cipher
            .decrypt(XNonce::from_slice(iv), ciphertext)
            .expect("decrypt nonce");
        assert_eq!(plain, vec![0xAA, 0xBB]);
    }

    #[test]
    fn test_fresh_material_per_call() {
        let (_, public) = test_keypair();
        let encryptor = NonceEncryptor::with_public_key(public);

        let a = encryptor.encrypt(b"nonce").expect("encrypt");
        let b = encryptor.encrypt(b"nonce").expect("encrypt");
        assert_ne!(a.encrypted_nonce, b.encrypted_nonce);
        assert_ne!(a.encrypted_session_key, b.encrypted_session_key);
    }
}
