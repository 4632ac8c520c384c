use crate::{
  error::{CipherError, CipherResult},
  trace::*,
};
use pkcs8::{der::Decode, PrivateKeyInfo};
use rsa::{RsaPrivateKey, RsaPublicKey};
use spki::SubjectPublicKeyInfoRef;

#[allow(non_upper_case_globals, dead_code)]
/// Algorithm OIDs
mod algorithm_oids {
  /// OID for `rsaEncryption` (PKCS #1)
  pub const Rsa: &str = "1.2.840.113549.1.1.1";
}

/* -------------------------------- */
/// Key material a cipher is built from.
/// A private key always carries its public half, so there is no private-only variant.
#[derive(Clone)]
pub enum AsymmetricKey {
  /// Encryption only
  Public(RsaPublicKey),
  /// Encryption and decryption
  Private(RsaPrivateKey),
}

impl AsymmetricKey {
  /// Decode DER bytes holding either a PKCS#8 PrivateKeyInfo or a SubjectPublicKeyInfo.
  /// Anything that is not an RSA key of either kind is rejected as an invalid key type.
  pub fn from_der(der: &[u8]) -> CipherResult<Self> {
    if let Ok(pki) = PrivateKeyInfo::from_der(der) {
      return match pki.algorithm.oid.to_string().as_ref() {
        algorithm_oids::Rsa => {
          debug!("Read RSA private key");
          let sk = RsaPrivateKey::try_from(pki).map_err(|e| CipherError::ParsePrivateKeyError(e.to_string()))?;
          Ok(Self::Private(sk))
        }
        oid => Err(CipherError::InvalidKeyType(format!("private key with algorithm {oid}"))),
      };
    }

    let spki_ref = SubjectPublicKeyInfoRef::from_der(der)
      .map_err(|e| CipherError::InvalidKeyType(format!("unrecognized key encoding ({e})")))?;
    match spki_ref.algorithm.oid.to_string().as_ref() {
      algorithm_oids::Rsa => {
        debug!("Read RSA public key");
        let pk = RsaPublicKey::try_from(spki_ref).map_err(|e| CipherError::ParsePublicKeyError(e.to_string()))?;
        Ok(Self::Public(pk))
      }
      oid => Err(CipherError::InvalidKeyType(format!("public key with algorithm {oid}"))),
    }
  }

  /// Get public key, deriving it from the private key if needed
  pub fn public_key(&self) -> RsaPublicKey {
    match self {
      Self::Public(pk) => pk.clone(),
      Self::Private(sk) => sk.to_public_key(),
    }
  }
}

impl From<RsaPublicKey> for AsymmetricKey {
  fn from(pk: RsaPublicKey) -> Self {
    Self::Public(pk)
  }
}

impl From<RsaPrivateKey> for AsymmetricKey {
  fn from(sk: RsaPrivateKey) -> Self {
    Self::Private(sk)
  }
}

impl std::fmt::Debug for AsymmetricKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Public(pk) => f.debug_tuple("Public").field(pk).finish(),
      Self::Private(_) => f.write_str("Private(..)"),
    }
  }
}
