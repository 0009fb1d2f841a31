//! PBKDF2-SHA256 key derivation for the password cipher.
//!
//! The iteration count, salt size and key size are protocol constants
//! baked into the payload wire format. Changing any of them breaks
//! decryption of previously produced payloads; the format carries no
//! version byte, so they must stay fixed.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// PBKDF2 iteration count. Wire-format constant.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// Salt size in bytes. Wire-format constant.
pub const SALT_SIZE: usize = 16;

/// Derived key size in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// AES-256 key derived from a passphrase.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    key: [u8; KEY_SIZE],
}

impl SymmetricKey {
    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey([REDACTED])")
    }
}

/// Derive an AES-256 key from a passphrase and salt.
///
/// # Postconditions
/// - Deterministic given the same passphrase and salt
/// - The derived key is zeroized on drop
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE]) -> SymmetricKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ROUNDS, &mut key);
    SymmetricKey { key }
}

/// Generate a random salt using the OS random source.
pub fn generate_salt() -> [u8; SALT_SIZE] {
    generate_salt_with_rng(&mut OsRng)
}

/// Generate a random salt from an injected random source.
pub fn generate_salt_with_rng<R>(rng: &mut R) -> [u8; SALT_SIZE]
where
    R: CryptoRng + RngCore,
{
    let mut salt = [0u8; SALT_SIZE];
    rng.fill_bytes(&mut salt);
    salt
}
