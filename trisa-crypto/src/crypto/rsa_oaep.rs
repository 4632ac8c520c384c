//! RSA-OAEP cipher as specified in PKCS #1 v2.2.
//!
//! SHA-512 is used both as the OAEP digest and as the MGF1 hash, with an empty label.
//! Payloads are encrypted with the public key and can only be decrypted with the private key.

use super::{AlgorithmName, AsymmetricKey, Cipher, KeyIdentifier};
use crate::error::{CipherError, CipherResult};
use base64::{engine::general_purpose, Engine as _};
use rand::{
  rngs::{OsRng, StdRng},
  SeedableRng,
};
use rsa::{pkcs8::EncodePublicKey, traits::PublicKeyParts, Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha512};

/* -------------------------------- */
/// RSA-OAEP-SHA512 cipher.
/// Always holds a public key; the private key is only required for decryption.
#[derive(Clone)]
pub struct RsaOaep {
  public_key: RsaPublicKey,
  private_key: Option<RsaPrivateKey>,
}

impl RsaOaep {
  /// Build from a tagged key
  pub fn new(key: AsymmetricKey) -> Self {
    match key {
      AsymmetricKey::Public(pk) => Self::from_public_key(pk),
      AsymmetricKey::Private(sk) => Self::from_private_key(sk),
    }
  }

  /// Encryption-only cipher
  pub fn from_public_key(public_key: RsaPublicKey) -> Self {
    Self {
      public_key,
      private_key: None,
    }
  }

  /// Cipher for both directions, the public key is derived from the private key
  pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
    Self {
      public_key: private_key.to_public_key(),
      private_key: Some(private_key),
    }
  }

  /// Build from DER encoded PKCS#8 private key or SubjectPublicKeyInfo
  pub fn from_der(der: &[u8]) -> CipherResult<Self> {
    AsymmetricKey::from_der(der).map(Self::new)
  }

  pub fn public_key(&self) -> &RsaPublicKey {
    &self.public_key
  }

  pub fn has_private_key(&self) -> bool {
    self.private_key.is_some()
  }

  /// Largest plaintext accepted by [`Cipher::encrypt`]: `k - 2 * hLen - 2`
  pub fn max_plaintext_len(&self) -> usize {
    self.public_key.size().saturating_sub(2 * <Sha512 as Digest>::output_size() + 2)
  }
}

fn padding() -> Oaep {
  Oaep::new::<Sha512>()
}

/// Fresh CSPRNG per operation, seeded from the OS.
/// Seeding is the only fallible step, so entropy failures surface as errors instead of panics.
fn rng() -> Result<StdRng, rand::Error> {
  StdRng::from_rng(OsRng)
}

impl Cipher for RsaOaep {
  /// Encrypt with the public key
  fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
    let mut rng = rng().map_err(|e| CipherError::EncryptionError(format!("entropy source unavailable: {e}")))?;
    self
      .public_key
      .encrypt(&mut rng, padding(), plaintext)
      .map_err(|e| CipherError::EncryptionError(e.to_string()))
  }

  /// Decrypt with the private key.
  /// All failures collapse into [`CipherError::DecryptionError`].
  fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
    let Some(sk) = &self.private_key else {
      return Err(CipherError::MissingPrivateKey);
    };
    let mut rng = rng().map_err(|_| CipherError::DecryptionError)?;
    sk.decrypt_blinded(&mut rng, padding(), ciphertext)
      .map_err(|_| CipherError::DecryptionError)
  }

  fn alg(&self) -> AlgorithmName {
    AlgorithmName::RsaOaepSha512
  }
}

impl KeyIdentifier for RsaOaep {
  /// `SHA256:` followed by the unpadded base64 SHA-256 digest of the DER SubjectPublicKeyInfo.
  /// Not guaranteed to match fingerprints printed by OpenSSH or other tools.
  fn public_key_signature(&self) -> CipherResult<String> {
    let doc = self
      .public_key
      .to_public_key_der()
      .map_err(|e| CipherError::SerializationError(e.to_string()))?;
    let mut hasher = <Sha256 as Digest>::new();
    hasher.update(doc.as_bytes());
    let hash = hasher.finalize();
    Ok(format!("SHA256:{}", general_purpose::STANDARD_NO_PAD.encode(hash)))
  }
}

impl std::fmt::Debug for RsaOaep {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RsaOaep")
      .field("public_key", &self.public_key)
      .field("has_private_key", &self.has_private_key())
      .finish()
  }
}
