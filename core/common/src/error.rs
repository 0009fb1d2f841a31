//! Common error types for Sealbox.

use thiserror::Error;

/// Top-level error type for Sealbox crypto operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Base64 or PEM structure could not be parsed.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A key was used with an operation other than the one it was
    /// imported for.
    #[error("Algorithm mismatch: {0}")]
    AlgorithmMismatch(String),

    /// RSA plaintext exceeds the modulus-derived limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// RSA decryption failed.
    ///
    /// Carries no detail: padding failures, wrong keys and size
    /// mismatches are indistinguishable to the caller.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Authenticated decryption failed the tag check.
    ///
    /// Wrong password and tampered ciphertext are indistinguishable
    /// to the caller.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Unexpected failure inside the cryptographic provider.
    #[error("Algorithm failure: {0}")]
    AlgorithmFailure(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
