//! Password-based authenticated encryption.
//!
//! PBKDF2-SHA256 stretches the passphrase into an AES-256 key, AES-GCM
//! provides confidentiality plus integrity. The result is one
//! self-describing blob:
//!
//! ```text
//! base64( salt[16] || nonce[12] || ciphertext+tag )
//! ```
//!
//! Consumers slice at fixed byte offsets 16 and 28; the salt and nonce
//! lengths are wire-format constants, not encoded in the payload.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::codec;
use crate::kdf::{self, SALT_SIZE};
use sealbox_common::{Error, Result};

/// AES-GCM nonce size (12 bytes). Wire-format constant.
pub const NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size (16 bytes), appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

/// Bytes preceding the ciphertext region: salt || nonce.
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;

/// Encrypt a plaintext under a passphrase.
///
/// # Postconditions
/// - Output decodes to `salt[16] || nonce[12] || ciphertext+tag`
/// - Salt and nonce are fresh random per call, so identical inputs
///   never produce identical payloads
pub fn encrypt_with_password(password: &[u8], plaintext: &[u8]) -> Result<String> {
    encrypt_with_password_from_rng(&mut OsRng, password, plaintext)
}

/// [`encrypt_with_password`] with an injected random source.
pub fn encrypt_with_password_from_rng<R>(
    rng: &mut R,
    password: &[u8],
    plaintext: &[u8],
) -> Result<String>
where
    R: CryptoRng + RngCore,
{
    let salt = kdf::generate_salt_with_rng(rng);
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);

    let key = kdf::derive_key(password, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| Error::AlgorithmFailure("AES-GCM encryption failed".to_string()))?;

    let mut payload = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);

    Ok(codec::b64_encode(&payload))
}

/// Decrypt a payload produced by [`encrypt_with_password`].
///
/// # Errors
/// - Returns `MalformedEncoding` for invalid base64 or a payload shorter
///   than the 28-byte header
/// - Returns `AuthenticationFailed` when the tag check fails; a wrong
///   password and a tampered ciphertext are indistinguishable
pub fn decrypt_with_password(password: &[u8], payload_b64: &str) -> Result<Vec<u8>> {
    let payload = codec::b64_decode(payload_b64)?;
    if payload.len() < HEADER_SIZE {
        return Err(Error::MalformedEncoding(format!(
            "Payload is {} bytes, minimum is {}",
            payload.len(),
            HEADER_SIZE
        )));
    }

    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&payload[..SALT_SIZE]);
    let nonce = &payload[SALT_SIZE..HEADER_SIZE];
    let ciphertext = &payload[HEADER_SIZE..];

    let key = kdf::derive_key(password, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let payload = encrypt_with_password(b"test-pass", b"secret").unwrap();
        let decrypted = decrypt_with_password(b"test-pass", &payload).unwrap();
        assert_eq!(decrypted, b"secret");
    }

    #[test]
    fn test_empty_plaintext() {
        let payload = encrypt_with_password(b"pw", b"").unwrap();
        assert_eq!(decrypt_with_password(b"pw", &payload).unwrap(), b"");
    }

    #[test]
    fn test_payload_layout() {
        let payload = encrypt_with_password(b"pw", b"0123456789").unwrap();
        let raw = codec::b64_decode(&payload).unwrap();
        // salt || nonce || ciphertext || tag
        assert_eq!(raw.len(), HEADER_SIZE + 10 + TAG_SIZE);
    }

    #[test]
    fn test_distinct_payloads_each_call() {
        let p1 = encrypt_with_password(b"pw", b"same plaintext").unwrap();
        let p2 = encrypt_with_password(b"pw", b"same plaintext").unwrap();
        assert_ne!(p1, p2);
    }

    #[test]
    fn test_wrong_password_fails() {
        let payload = encrypt_with_password(b"test-pass", b"secret").unwrap();
        assert!(matches!(
            decrypt_with_password(b"wrong-pass", &payload),
            Err(Error::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let payload = encrypt_with_password(b"pw", b"important data").unwrap();
        let mut raw = codec::b64_decode(&payload).unwrap();

        // Flip one bit in every byte position of the ciphertext region;
        // each variant must fail authentication, never return garbage
        for i in HEADER_SIZE..raw.len() {
            raw[i] ^= 0x01;
            let tampered = codec::b64_encode(&raw);
            assert!(matches!(
                decrypt_with_password(b"pw", &tampered),
                Err(Error::AuthenticationFailed)
            ));
            raw[i] ^= 0x01;
        }
    }

    #[test]
    fn test_tampered_salt_fails() {
        let payload = encrypt_with_password(b"pw", b"data").unwrap();
        let mut raw = codec::b64_decode(&payload).unwrap();
        raw[0] ^= 0xFF;
        let tampered = codec::b64_encode(&raw);
        assert!(matches!(
            decrypt_with_password(b"pw", &tampered),
            Err(Error::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_short_payload_fails() {
        let short = codec::b64_encode(&[0u8; HEADER_SIZE - 1]);
        assert!(matches!(
            decrypt_with_password(b"pw", &short),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_header_only_payload_fails_authentication() {
        // Exactly 28 bytes: well-formed header, empty ciphertext region.
        // The missing tag surfaces as an authentication failure, not a
        // framing error
        let header_only = codec::b64_encode(&[0u8; HEADER_SIZE]);
        assert!(matches!(
            decrypt_with_password(b"pw", &header_only),
            Err(Error::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_bad_base64_fails() {
        assert!(matches!(
            decrypt_with_password(b"pw", "***"),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_deterministic_under_seeded_rng() {
        let mut rng1 = StdRng::seed_from_u64(11);
        let mut rng2 = StdRng::seed_from_u64(11);

        let p1 = encrypt_with_password_from_rng(&mut rng1, b"pw", b"payload").unwrap();
        let p2 = encrypt_with_password_from_rng(&mut rng2, b"pw", b"payload").unwrap();
        assert_eq!(p1, p2);
    }
}
