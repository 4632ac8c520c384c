mod asymmetric;
mod rsa_oaep;

use crate::error::{CipherError, CipherResult};

pub use asymmetric::AsymmetricKey;
pub use rsa_oaep::RsaOaep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Algorithm names recorded alongside a sealed payload
pub enum AlgorithmName {
  RsaOaepSha512,
}

impl AlgorithmName {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlgorithmName::RsaOaepSha512 => "RSA-OAEP-SHA512",
    }
  }
}

impl std::fmt::Display for AlgorithmName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for AlgorithmName {
  type Err = CipherError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "RSA-OAEP-SHA512" => Ok(Self::RsaOaepSha512),
      _ => Err(CipherError::InvalidAlgorithmName(s.to_string())),
    }
  }
}

/// Cipher trait
///
/// Ciphertexts carry no algorithm or key metadata, so callers record
/// [`Cipher::encryption_algorithm`] and the key signature next to them.
pub trait Cipher {
  fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>>;
  fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>>;
  fn alg(&self) -> AlgorithmName;

  /// Name of the scheme, independent of the key in use
  fn encryption_algorithm(&self) -> &'static str {
    self.alg().as_str()
  }
}

/// KeyIdentifier trait
pub trait KeyIdentifier {
  fn public_key_signature(&self) -> CipherResult<String>;
}
