#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! # Usage
//!
//! Keys arrive as PEM text or DER blobs, usually wrapped in an X.509
//! `SubjectPublicKeyInfo` or PKCS#8 envelope that native key-store
//! importers reject. [`import_key_pem`] and [`import_key_der`] normalize
//! such material to the bare PKCS#1 encoding before it crosses the
//! [`KeyImporter`] boundary; [`pem::encode`] converts exported keys and
//! signatures back to text.
//!
//! ```
//! use rsa_keyprep::{import_key_der, KeyHandle, KeyImporter, KeyType, Result};
//!
//! struct Importer; // a native key store would live here
//!
//! impl KeyImporter for Importer {
//!     fn import_key(&self, der: &[u8], _key_type: KeyType) -> Result<KeyHandle> {
//!         assert_eq!(der[0], 0x30); // bare PKCS#1 SEQUENCE
//!         Ok(KeyHandle(1))
//!     }
//! }
//!
//! # fn main() -> rsa_keyprep::Result<()> {
//! // SubjectPublicKeyInfo around the PKCS#1 body 30 06 02 01 03 02 01 05
//! let spki = [
//!     0x30, 0x1a, 0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7,
//!     0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x03, 0x09, 0x00, 0x30, 0x06,
//!     0x02, 0x01, 0x03, 0x02, 0x01, 0x05,
//! ];
//! let handle = import_key_der(&Importer, &spki, KeyType::Public)?;
//! assert_eq!(handle, KeyHandle(1));
//! # Ok(())
//! # }
//! ```
//!
//! Payloads exchanged with a [`CryptoProvider`] are tagged with a
//! [`DataKind`] so ciphertext, signatures and plaintext cannot be mixed
//! up; see [`Payload`].

#[cfg(doctest)]
pub struct ReadmeDoctests;

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use base64ct;

pub mod chunk;
pub mod data;
pub mod der;
pub mod errors;
pub mod pem;
pub mod traits;

mod key;

pub use crate::{
    data::{DataKind, Payload},
    der::{strip_x509_header, RSA_ALGORITHM_ID},
    errors::{Error, Result},
    key::{import_key_der, import_key_pem, KeyHandle, KeyType},
    traits::{CryptoProvider, KeyImporter},
};

use const_oid::ObjectIdentifier;

/// OID of the `rsaEncryption` algorithm: `1.2.840.113549.1.1.1`.
pub const ALGORITHM_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
