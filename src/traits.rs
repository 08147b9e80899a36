//! Capability traits implemented by native key stores.

use alloc::vec::Vec;

use crate::errors::Result;
use crate::key::{KeyHandle, KeyType};

/// Imports prepared key material into a native key store.
pub trait KeyImporter {
    /// Import a bare PKCS#1 key, returning a handle to the stored key.
    ///
    /// Callers are expected to route keys through
    /// [`import_key_pem`](crate::import_key_pem) or
    /// [`import_key_der`](crate::import_key_der), which strip any X.509 or
    /// PKCS#8 wrapper before the bytes reach this method.
    fn import_key(&self, der: &[u8], key_type: KeyType) -> Result<KeyHandle>;
}

/// Executes RSA primitives over imported keys.
///
/// Implementations typically wrap a platform keychain or an HSM session;
/// methods take `&self` so one provider can serve many callers.
pub trait CryptoProvider {
    /// Encrypt `plaintext` under the key behind `key`.
    fn encrypt(&self, key: KeyHandle, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt `ciphertext` with the key behind `key`.
    fn decrypt(&self, key: KeyHandle, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Sign `message` with the key behind `key`.
    fn sign(&self, key: KeyHandle, message: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` over `message` with the key behind `key`.
    ///
    /// `Ok(false)` means the signature is well-formed but does not match;
    /// [`Error::Verification`](crate::Error::Verification) is reserved for
    /// failures of the verification operation itself.
    fn verify(&self, key: KeyHandle, message: &[u8], signature: &[u8]) -> Result<bool>;
}
