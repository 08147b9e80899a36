//! Byte-level DER handling for RSA keys.
//!
//! Native key-store importers consume the bare PKCS#1 `RSAPublicKey` /
//! `RSAPrivateKey` encoding, while keys in the wild usually arrive wrapped
//! in an X.509 `SubjectPublicKeyInfo`:
//!
//! ```text
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!     algorithm        AlgorithmIdentifier,
//!     subjectPublicKey BIT STRING
//! }
//! ```
//!
//! or in a PKCS#8 `PrivateKeyInfo` envelope. [`strip_x509_header`] removes
//! either wrapper with a fixed byte walk instead of a general ASN.1
//! parser, returning the inner PKCS#1 body untouched.

use crate::errors::{Error, Result};

/// ASN.1 SEQUENCE tag.
const TAG_SEQUENCE: u8 = 0x30;

/// ASN.1 INTEGER tag.
const TAG_INTEGER: u8 = 0x02;

/// ASN.1 BIT STRING tag.
const TAG_BIT_STRING: u8 = 0x03;

/// ASN.1 OCTET STRING tag.
const TAG_OCTET_STRING: u8 = 0x04;

/// DER encoding of the rsaEncryption `AlgorithmIdentifier`: a SEQUENCE of
/// [`ALGORITHM_OID`](crate::ALGORITHM_OID) and NULL parameters.
pub const RSA_ALGORITHM_ID: [u8; 15] = [
    0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00,
];

/// Offset of the inner PKCS#1 body in a PKCS#8 `PrivateKeyInfo` whose
/// outer length takes the two-byte form (RSA keys of 512 bits and up).
const PKCS8_BODY_OFFSET: usize = 26;

/// Strips the X.509 `SubjectPublicKeyInfo` or PKCS#8 `PrivateKeyInfo`
/// wrapper from `key`, returning the bare PKCS#1 body as a sub-slice.
///
/// Keys already carrying a bare PKCS#1 body come back unchanged, so the
/// function is safe to apply to keys of unknown provenance. The walk never
/// reads past the end of `key`; missing bytes surface as
/// [`Error::TruncatedKey`].
///
/// ```
/// use rsa_keyprep::strip_x509_header;
///
/// // SubjectPublicKeyInfo around the PKCS#1 body 30 06 02 01 03 02 01 05
/// let spki = [
///     0x30, 0x1a, 0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7,
///     0x0d, 0x01, 0x01, 0x01, 0x05, 0x00, 0x03, 0x09, 0x00, 0x30, 0x06,
///     0x02, 0x01, 0x03, 0x02, 0x01, 0x05,
/// ];
/// let body = strip_x509_header(&spki)?;
/// assert_eq!(body, &spki[20..]);
/// # Ok::<(), rsa_keyprep::Error>(())
/// ```
pub fn strip_x509_header(key: &[u8]) -> Result<&[u8]> {
    // PKCS#8 private keys carry the PKCS#1 body at a fixed offset.
    if let Some(body) = pkcs8_body(key) {
        return Ok(body);
    }

    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    if key[0] != TAG_SEQUENCE {
        return Err(Error::InvalidAsn1Header);
    }

    let mut offset = skip_length(key, 1)?;
    match read(key, offset)? {
        // A bare PKCS#1 key opens directly with its first INTEGER.
        TAG_INTEGER => return Ok(key),
        TAG_SEQUENCE => {}
        _ => return Err(Error::MissingX509Header),
    }

    // The rsaEncryption AlgorithmIdentifier has a fixed-length encoding.
    offset += RSA_ALGORITHM_ID.len();

    match read(key, offset)? {
        TAG_BIT_STRING => {}
        byte => return Err(Error::InvalidBitStringTag { byte, offset }),
    }
    offset = skip_length(key, offset + 1)?;

    match read(key, offset)? {
        0x00 => {}
        byte => return Err(Error::InvalidPaddingByte { byte, offset }),
    }
    Ok(&key[offset + 1..])
}

/// Matches the fixed prefix of a PKCS#8 `PrivateKeyInfo` holding an RSA
/// key: two-byte outer length, zero version INTEGER, AlgorithmIdentifier
/// SEQUENCE, and the OCTET STRING whose contents start at byte 26.
fn pkcs8_body(key: &[u8]) -> Option<&[u8]> {
    if key.len() <= PKCS8_BODY_OFFSET {
        return None;
    }
    let shape = key[0] == TAG_SEQUENCE
        && key[1] == 0x82
        && key[4..7] == [TAG_INTEGER, 0x01, 0x00]
        && key[7] == TAG_SEQUENCE
        && key[22] == TAG_OCTET_STRING
        && key[PKCS8_BODY_OFFSET] == TAG_SEQUENCE;
    shape.then(|| &key[PKCS8_BODY_OFFSET..])
}

fn read(key: &[u8], offset: usize) -> Result<u8> {
    key.get(offset)
        .copied()
        .ok_or(Error::TruncatedKey { offset })
}

/// Returns the offset just past the DER length field starting at `offset`.
///
/// The returned offset may point past the end of `key` for truncated
/// input; the next [`read`] reports it.
fn skip_length(key: &[u8], offset: usize) -> Result<usize> {
    let len_byte = read(key, offset)?;
    // Long form: the low bits of the leading byte count the length octets.
    if len_byte > 0x80 {
        Ok(offset + usize::from(len_byte - 0x80) + 1)
    } else {
        Ok(offset + 1)
    }
}
