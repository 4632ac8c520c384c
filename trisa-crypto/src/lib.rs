//! # trisa-crypto
//!
//! Asymmetric encryption of secure envelope payloads exchanged between the parties of a transaction.
//! Payloads are sealed with RSA-OAEP (SHA-512) under the recipient's public key, and the key is identified
//! by a SHA-256 public key signature so that the recipient can pick the matching private key.
//!
//! Ciphers are used through the [`Cipher`](prelude::Cipher) and [`KeyIdentifier`](prelude::KeyIdentifier)
//! traits, so another scheme can be swapped in without touching callers.
//! Ciphertexts carry no metadata: record [`Cipher::encryption_algorithm`](prelude::Cipher::encryption_algorithm)
//! and the key signature alongside them.

mod crypto;
mod error;
mod trace;

pub mod prelude {
  pub use crate::{
    crypto::{AlgorithmName, AsymmetricKey, Cipher, KeyIdentifier, RsaOaep},
    error::{CipherError, CipherResult},
  };
  pub use rsa::{RsaPrivateKey, RsaPublicKey};
}

/* ----------------------------------------------------------------- */
