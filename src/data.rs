//! Tagged byte payloads exchanged with a [`CryptoProvider`].
//!
//! The payload kind travels with the bytes, and every operation checks it
//! before touching the provider: encrypting ciphertext or verifying a
//! plaintext is an [`Error::KindMismatch`], not a silent misuse.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use base64ct::{Base64, Encoding};

use crate::errors::{Error, Result};
use crate::key::KeyHandle;
use crate::traits::CryptoProvider;

/// Classification of the bytes a [`Payload`] carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DataKind {
    /// Unprotected bytes.
    Plaintext,

    /// RSA ciphertext.
    Encrypted,

    /// An RSA signature.
    Signed,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataKind::Plaintext => "plaintext",
            DataKind::Encrypted => "encrypted",
            DataKind::Signed => "signed",
        })
    }
}

/// Bytes tagged with the [`DataKind`] governing their use.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Payload {
    kind: DataKind,
    bytes: Vec<u8>,
}

impl Payload {
    /// Builds a plaintext payload.
    pub fn plaintext(bytes: impl Into<Vec<u8>>) -> Self {
        Payload {
            kind: DataKind::Plaintext,
            bytes: bytes.into(),
        }
    }

    /// Builds a payload from RSA ciphertext.
    pub fn encrypted(bytes: impl Into<Vec<u8>>) -> Self {
        Payload {
            kind: DataKind::Encrypted,
            bytes: bytes.into(),
        }
    }

    /// Builds a payload from an RSA signature.
    pub fn signed(bytes: impl Into<Vec<u8>>) -> Self {
        Payload {
            kind: DataKind::Signed,
            bytes: bytes.into(),
        }
    }

    /// Decodes a Base64 string received over a text boundary.
    pub fn from_base64(kind: DataKind, base64: &str) -> Result<Self> {
        let bytes = Base64::decode_vec(base64)?;
        Ok(Payload { kind, bytes })
    }

    /// The payload's kind tag.
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// The payload's raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the payload, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Encodes the payload's bytes as Base64 for a text boundary.
    pub fn to_base64(&self) -> String {
        Base64::encode_string(&self.bytes)
    }

    /// Encrypts a plaintext payload, yielding an encrypted one.
    pub fn encrypt<P>(&self, provider: &P, key: KeyHandle) -> Result<Payload>
    where
        P: CryptoProvider + ?Sized,
    {
        self.require(DataKind::Plaintext)?;
        Ok(Payload::encrypted(provider.encrypt(key, &self.bytes)?))
    }

    /// Decrypts an encrypted payload, yielding a plaintext one.
    pub fn decrypt<P>(&self, provider: &P, key: KeyHandle) -> Result<Payload>
    where
        P: CryptoProvider + ?Sized,
    {
        self.require(DataKind::Encrypted)?;
        Ok(Payload::plaintext(provider.decrypt(key, &self.bytes)?))
    }

    /// Signs a plaintext payload, yielding a signature payload.
    pub fn sign<P>(&self, provider: &P, key: KeyHandle) -> Result<Payload>
    where
        P: CryptoProvider + ?Sized,
    {
        self.require(DataKind::Plaintext)?;
        Ok(Payload::signed(provider.sign(key, &self.bytes)?))
    }

    /// Verifies a signature payload over `message`.
    pub fn verify<P>(&self, provider: &P, key: KeyHandle, message: &[u8]) -> Result<bool>
    where
        P: CryptoProvider + ?Sized,
    {
        self.require(DataKind::Signed)?;
        provider.verify(key, message, &self.bytes)
    }

    fn require(&self, expected: DataKind) -> Result<()> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(Error::KindMismatch {
                expected,
                actual: self.kind,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Toy provider: XOR "encryption" and reversed-bytes "signatures".
    struct Flipper;

    impl CryptoProvider for Flipper {
        fn encrypt(&self, _key: KeyHandle, plaintext: &[u8]) -> Result<Vec<u8>> {
            Ok(plaintext.iter().map(|b| b ^ 0xa5).collect())
        }

        fn decrypt(&self, _key: KeyHandle, ciphertext: &[u8]) -> Result<Vec<u8>> {
            Ok(ciphertext.iter().map(|b| b ^ 0xa5).collect())
        }

        fn sign(&self, _key: KeyHandle, message: &[u8]) -> Result<Vec<u8>> {
            Ok(message.iter().rev().copied().collect())
        }

        fn verify(&self, _key: KeyHandle, message: &[u8], signature: &[u8]) -> Result<bool> {
            let expected: Vec<u8> = message.iter().rev().copied().collect();
            Ok(expected == signature)
        }
    }

    const KEY: KeyHandle = KeyHandle(42);

    #[test]
    fn encrypt_decrypt_round_trip() {
        let plain = Payload::plaintext(*b"attack at dawn");
        let encrypted = plain.encrypt(&Flipper, KEY).unwrap();
        assert_eq!(encrypted.kind(), DataKind::Encrypted);
        assert_ne!(encrypted.as_bytes(), plain.as_bytes());

        let decrypted = encrypted.decrypt(&Flipper, KEY).unwrap();
        assert_eq!(decrypted, plain);
    }

    #[test]
    fn sign_verify_round_trip() {
        let message = Payload::plaintext(*b"attack at dawn");
        let signature = message.sign(&Flipper, KEY).unwrap();
        assert_eq!(signature.kind(), DataKind::Signed);
        assert!(signature.verify(&Flipper, KEY, message.as_bytes()).unwrap());
        assert!(!signature.verify(&Flipper, KEY, b"attack at dusk").unwrap());
    }

    #[test]
    fn operations_check_the_kind() {
        let encrypted = Payload::encrypted([1, 2, 3]);
        assert_eq!(
            encrypted.encrypt(&Flipper, KEY),
            Err(Error::KindMismatch {
                expected: DataKind::Plaintext,
                actual: DataKind::Encrypted,
            })
        );

        let plain = Payload::plaintext([1, 2, 3]);
        assert_eq!(
            plain.decrypt(&Flipper, KEY),
            Err(Error::KindMismatch {
                expected: DataKind::Encrypted,
                actual: DataKind::Plaintext,
            })
        );
        assert_eq!(
            plain.verify(&Flipper, KEY, &[]),
            Err(Error::KindMismatch {
                expected: DataKind::Signed,
                actual: DataKind::Plaintext,
            })
        );
    }

    #[test]
    fn base64_round_trip() {
        let payload = Payload::encrypted([0xde, 0xad, 0xbe, 0xef]);
        let text = payload.to_base64();
        assert_eq!(text, "3q2+7w==");
        assert_eq!(
            Payload::from_base64(DataKind::Encrypted, &text).unwrap(),
            payload
        );
    }

    #[test]
    fn from_base64_rejects_garbage() {
        assert!(matches!(
            Payload::from_base64(DataKind::Plaintext, "!not base64!"),
            Err(Error::InvalidBase64(_))
        ));
    }
}
