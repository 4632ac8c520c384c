use thiserror::Error;

/// Result type for envelope cipher operations
pub type CipherResult<T> = std::result::Result<T, CipherError>;

/// Error type for envelope cipher operations
#[derive(Error, Debug)]
pub enum CipherError {
  /* ----- Construction errors ----- */
  /// Key material is neither an RSA public key nor an RSA private key
  #[error("Could not create RSA cipher from {0}")]
  InvalidKeyType(String),
  /// Invalid RSA private key body
  #[error("Failed to parse private key: {0}")]
  ParsePrivateKeyError(String),
  /// Invalid RSA public key body
  #[error("Failed to parse public key: {0}")]
  ParsePublicKeyError(String),

  /* ----- Cipher errors ----- */
  /// Decryption was attempted by an encrypt-only cipher
  #[error("Private key required for decryption")]
  MissingPrivateKey,
  /// Plaintext too long for the key and padding, or no entropy available
  #[error("Encryption failed: {0}")]
  EncryptionError(String),
  /// Ciphertext rejected. Never carries the underlying cause.
  #[error("Decryption failed")]
  DecryptionError,

  /* ----- Key identification errors ----- */
  /// Public key could not be encoded as SubjectPublicKeyInfo
  #[error("Failed to serialize public key: {0}")]
  SerializationError(String),
  /// Unknown encryption algorithm identifier
  #[error("Invalid algorithm name: {0}")]
  InvalidAlgorithmName(String),
}
