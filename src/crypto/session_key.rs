use rand::rngs::OsRng;
use rand::RngCore;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};

use super::CryptoError;

/// Session key length in bytes (256-bit symmetric key).
pub const SESSION_KEY_LEN: usize = 32;

/// An ephemeral symmetric key, generated fresh for every handshake attempt.
///
/// The plaintext form encrypts the nonce locally; the encrypted form is
/// the RSA-wrapped copy sent to the web API. Neither form is ever
/// persisted; the key lives exactly as long as one attempt.
pub struct SessionKey {
    plain: [u8; SESSION_KEY_LEN],
    encrypted: Vec<u8>,
}

impl SessionKey {
    /// Generate a fresh key and wrap it under `wrap_key`.
    pub fn generate(wrap_key: &RsaPublicKey) -> Result<Self, CryptoError> {
        let mut plain = [0u8; SESSION_KEY_LEN];
        OsRng.fill_bytes(&mut plain);
        let encrypted = wrap_key.encrypt(&mut OsRng, Pkcs1v15Encrypt, &plain)?;
        Ok(Self { plain, encrypted })
    }

    pub fn plain(&self) -> &[u8; SESSION_KEY_LEN] {
        &self.plain
    }

    pub fn encrypted(&self) -> &[u8] {
        &self.encrypted
    }

    pub fn into_encrypted(self) -> Vec<u8> {
        self.encrypted
    }
}

#[cfg(test)]
mod tests {
    use rsa::RsaPrivateKey;

    use super::*;

    #[test]
    fn test_generate_is_fresh_and_wrapped() {
        let private = RsaPrivateKey::new(&mut OsRng, 1024).expect("keygen");
        let public = RsaPublicKey::from(&private);

        let a = SessionKey::generate(&public).expect("generate");
        let b = SessionKey::generate(&public).expect("generate");
        assert_ne!(a.plain(), b.plain());
        assert_ne!(a.encrypted(), b.encrypted());

        // 1024-bit modulus -> 128-byte ciphertext
        assert_eq!(a.encrypted().len(), 128);

        let unwrapped = private
            .decrypt(Pkcs1v15Encrypt, a.encrypted())
            .expect("unwrap");
        assert_eq!(unwrapped, a.plain());
    }
}
