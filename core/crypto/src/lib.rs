//! Cryptographic core for Sealbox.
//!
//! This module provides:
//! - Base64 and PEM codecs for DER key material
//! - RSA key-pair generation with purpose-tagged import/export
//! - RSA-OAEP encryption for short payloads
//! - Password-based authenticated encryption (PBKDF2 + AES-256-GCM)
//! - RSA-PSS signing and verification
//!
//! Every operation is stateless: inputs and injected randomness fully
//! determine the output, there is no module-level state and no cache, so
//! concurrent calls need no synchronization.
//!
//! # Security Guarantees
//! - Fresh salt and nonce on every password encryption
//! - Derived symmetric keys are zeroized on drop
//! - No key material or plaintext is ever logged
//! - Decryption and authentication failures carry no distinguishing
//!   detail, so they cannot be used as padding or password oracles

pub mod cipher;
pub mod codec;
pub mod kdf;
pub mod keys;
pub mod password;
pub mod sign;

pub use cipher::{decrypt, encrypt, max_plaintext_len};
pub use codec::{b64_decode, b64_encode, pem_decode, pem_encode, KeyKind};
pub use kdf::{derive_key, SymmetricKey, KEY_SIZE, PBKDF2_ROUNDS, SALT_SIZE};
pub use keys::{
    generate_key_pair_bundle, KeyPair, KeyPairBundle, KeyPurpose, PrivateKey, PublicKey,
};
pub use password::{decrypt_with_password, encrypt_with_password};
pub use sign::{sign, verify};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::test_bundle;

    // End-to-end flow as a caller would drive it: generate a bundle,
    // route each PEM into the right service.
    #[test]
    fn test_full_caller_flow() {
        let bundle = test_bundle();

        let enc_public =
            PublicKey::import(&bundle.encryption.public_pem, KeyPurpose::Encrypt).unwrap();
        let enc_private =
            PrivateKey::import(&bundle.encryption.private_pem, KeyPurpose::Encrypt).unwrap();
        let ciphertext = encrypt(&enc_public, b"Hello world").unwrap();
        assert_eq!(decrypt(&enc_private, &ciphertext).unwrap(), b"Hello world");

        let sig_public = PublicKey::import(&bundle.signing.public_pem, KeyPurpose::Sign).unwrap();
        let sig_private =
            PrivateKey::import(&bundle.signing.private_pem, KeyPurpose::Sign).unwrap();
        let signature = sign(&sig_private, b"Hello world").unwrap();
        assert!(verify(&sig_public, b"Hello world", &signature).unwrap());

        let payload = encrypt_with_password(b"test-pass", b"secret").unwrap();
        assert_eq!(
            decrypt_with_password(b"test-pass", &payload).unwrap(),
            b"secret"
        );
        assert!(decrypt_with_password(b"wrong-pass", &payload).is_err());
    }
}
