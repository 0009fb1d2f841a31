//! RSA-OAEP encryption for short payloads.
//!
//! OAEP with SHA-256 bounds the plaintext by the key modulus: a 2048-bit
//! key carries at most 190 bytes. Larger payloads are a hard error; callers
//! needing more must layer hybrid encryption on top (out of scope here).

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::Oaep;
use sha2::Sha256;

use crate::codec;
use crate::keys::{KeyPurpose, PrivateKey, PublicKey};
use sealbox_common::{Error, Result};

/// OAEP-SHA256 padding overhead in bytes: two digest lengths plus two.
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// Largest plaintext this key can encrypt in a single OAEP block.
///
/// # Errors
/// - Returns `AlgorithmMismatch` unless the key was imported for
///   encryption
/// - Returns `PayloadTooLarge` when the modulus is too small to hold
///   even an empty OAEP-SHA256 block
pub fn max_plaintext_len(public: &PublicKey) -> Result<usize> {
    let key = public.expect_purpose(KeyPurpose::Encrypt)?;
    oaep_limit(key.size())
}

/// Plaintext capacity of a modulus, without assuming the modulus can
/// hold the padding at all. Imported keys can be arbitrarily small.
fn oaep_limit(modulus_len: usize) -> Result<usize> {
    modulus_len.checked_sub(OAEP_OVERHEAD).ok_or_else(|| {
        Error::PayloadTooLarge(format!(
            "Key modulus of {} bytes cannot hold any OAEP-SHA256 plaintext",
            modulus_len
        ))
    })
}

/// Encrypt a short plaintext under an encryption-purpose public key.
///
/// # Postconditions
/// - Output is base64 of one OAEP-SHA256 block
/// - Fresh OAEP randomness per call: identical plaintexts encrypt to
///   different ciphertexts
///
/// # Errors
/// - Returns `AlgorithmMismatch` for a key not imported for encryption
/// - Returns `PayloadTooLarge` when the plaintext exceeds the
///   modulus-derived limit
pub fn encrypt(public: &PublicKey, plaintext: &[u8]) -> Result<String> {
    encrypt_with_rng(&mut OsRng, public, plaintext)
}

/// [`encrypt`] with an injected random source.
pub fn encrypt_with_rng<R>(rng: &mut R, public: &PublicKey, plaintext: &[u8]) -> Result<String>
where
    R: CryptoRng + RngCore,
{
    let key = public.expect_purpose(KeyPurpose::Encrypt)?;

    let limit = oaep_limit(key.size())?;
    if plaintext.len() > limit {
        return Err(Error::PayloadTooLarge(format!(
            "Plaintext is {} bytes, limit for this key is {}",
            plaintext.len(),
            limit
        )));
    }

    let ciphertext = key
        .encrypt(rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| Error::AlgorithmFailure(format!("OAEP encryption failed: {}", e)))?;

    Ok(codec::b64_encode(&ciphertext))
}

/// Decrypt a base64 OAEP ciphertext under an encryption-purpose private key.
///
/// # Errors
/// - Returns `AlgorithmMismatch` for a key not imported for encryption
/// - Returns `MalformedEncoding` for invalid base64
/// - Returns `DecryptionFailed` for any cryptographic failure; wrong key,
///   wrong-size ciphertext and padding errors are indistinguishable
pub fn decrypt(private: &PrivateKey, ciphertext_b64: &str) -> Result<Vec<u8>> {
    let key = private.expect_purpose(KeyPurpose::Encrypt)?;
    let ciphertext = codec::b64_decode(ciphertext_b64)?;

    key.decrypt(Oaep::new::<Sha256>(), &ciphertext)
        .map_err(|_| Error::DecryptionFailed)
}
