//! RSA-PSS signing and verification.
//!
//! SHA-256 digest, 32-byte PSS salt. Signatures travel as base64 of the
//! raw signature bytes; the caller keeps the pairing with the original
//! message.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::Pss;
use sha2::{Digest, Sha256};

use crate::codec;
use crate::keys::{KeyPurpose, PrivateKey, PublicKey};
use sealbox_common::{Error, Result};

/// PSS salt length in bytes (matches the SHA-256 digest size).
const PSS_SALT_LEN: usize = 32;

/// Sign a message under a signing-purpose private key.
///
/// # Errors
/// - Returns `AlgorithmMismatch` unless the key was imported for signing
pub fn sign(private: &PrivateKey, message: &[u8]) -> Result<String> {
    sign_with_rng(&mut OsRng, private, message)
}

/// [`sign`] with an injected random source for the PSS salt.
pub fn sign_with_rng<R>(rng: &mut R, private: &PrivateKey, message: &[u8]) -> Result<String>
where
    R: CryptoRng + RngCore,
{
    let key = private.expect_purpose(KeyPurpose::Sign)?;
    let digest = Sha256::digest(message);

    let signature = key
        .sign_with_rng(rng, Pss::new_with_salt::<Sha256>(PSS_SALT_LEN), digest.as_slice())
        .map_err(|e| Error::AlgorithmFailure(format!("PSS signing failed: {}", e)))?;

    Ok(codec::b64_encode(&signature))
}

/// Verify a base64 signature over a message.
///
/// Returns `Ok(false)` for any cryptographic mismatch: a well-formed but
/// invalid signature never raises an error.
///
/// # Errors
/// - Returns `AlgorithmMismatch` unless the key was imported for signing
/// - Returns `MalformedEncoding` for invalid base64
pub fn verify(public: &PublicKey, message: &[u8], signature_b64: &str) -> Result<bool> {
    let key = public.expect_purpose(KeyPurpose::Sign)?;
    let signature = codec::b64_decode(signature_b64)?;
    let digest = Sha256::digest(message);

    Ok(key
        .verify(
            Pss::new_with_salt::<Sha256>(PSS_SALT_LEN),
            digest.as_slice(),
            &signature,
        )
        .is_ok())
}
