//! Key classification and the native import pipeline.

use zeroize::Zeroizing;

use crate::der::strip_x509_header;
use crate::errors::Result;
use crate::pem;
use crate::traits::KeyImporter;

/// Which half of an RSA key pair a byte payload holds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum KeyType {
    /// PKCS#1 `RSAPublicKey` material.
    Public,

    /// PKCS#1 `RSAPrivateKey` material.
    Private,
}

/// Opaque handle to a key held by a native key store.
///
/// Handles are minted by a [`KeyImporter`] and only meaningful to the
/// store that issued them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct KeyHandle(pub u64);

/// Imports a PEM-encoded key into `importer`'s key store.
///
/// The Base64 body is decoded, any X.509 or PKCS#8 wrapper is stripped,
/// and the bare PKCS#1 body is handed to the importer. The decoded buffer
/// is zeroized on drop since it may hold private key material.
pub fn import_key_pem<I>(importer: &I, pem: &str, key_type: KeyType) -> Result<KeyHandle>
where
    I: KeyImporter + ?Sized,
{
    let decoded = Zeroizing::new(pem::decode(pem)?);
    importer.import_key(strip_x509_header(&decoded)?, key_type)
}

/// Imports a DER-encoded key into `importer`'s key store, stripping any
/// X.509 or PKCS#8 wrapper first.
pub fn import_key_der<I>(importer: &I, der: &[u8], key_type: KeyType) -> Result<KeyHandle>
where
    I: KeyImporter + ?Sized,
{
    importer.import_key(strip_x509_header(der)?, key_type)
}
