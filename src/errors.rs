//! Error types.

use core::fmt;

use crate::data::DataKind;

/// Result type with the `rsa-keyprep` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Key preparation errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// PEM input contained no Base64 body once marker lines were removed.
    EmptyPemData,

    /// Base64 decoding failed.
    InvalidBase64(base64ct::Error),

    /// Key contained no bytes.
    EmptyKey,

    /// Key did not open with an ASN.1 SEQUENCE.
    InvalidAsn1Header,

    /// Wrapped key carried neither an X.509 header nor a bare PKCS#1 body.
    MissingX509Header,

    /// Expected the BIT STRING holding the public key.
    InvalidBitStringTag {
        /// Byte found in place of the BIT STRING tag.
        byte: u8,

        /// Offset of the unexpected byte.
        offset: usize,
    },

    /// Expected the zero unused-bits byte opening the BIT STRING contents.
    InvalidPaddingByte {
        /// Byte found in place of the padding byte.
        byte: u8,

        /// Offset of the unexpected byte.
        offset: usize,
    },

    /// Key ended before the header walk completed.
    TruncatedKey {
        /// Offset of the first missing byte.
        offset: usize,
    },

    /// Payload kind does not permit the requested operation.
    KindMismatch {
        /// Kind the operation requires.
        expected: DataKind,

        /// Kind the payload carries.
        actual: DataKind,
    },

    /// Native key store rejected the imported key.
    KeyRejected {
        /// Importer-supplied reason.
        reason: &'static str,
    },

    /// Decryption error.
    Decryption,

    /// Verification error.
    Verification,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::EmptyPemData => f.write_str("PEM data is empty"),
            Error::InvalidBase64(err) => write!(f, "invalid Base64: {}", err),
            Error::EmptyKey => f.write_str("key is empty"),
            Error::InvalidAsn1Header => f.write_str("invalid ASN.1 header"),
            Error::MissingX509Header => f.write_str("missing X.509 key header"),
            Error::InvalidBitStringTag { byte, offset } => {
                write!(f, "invalid BIT STRING tag {:#04x} at offset {}", byte, offset)
            }
            Error::InvalidPaddingByte { byte, offset } => write!(
                f,
                "invalid BIT STRING padding byte {:#04x} at offset {}",
                byte, offset
            ),
            Error::TruncatedKey { offset } => write!(f, "key truncated at offset {}", offset),
            Error::KindMismatch { expected, actual } => write!(
                f,
                "operation requires {} data, payload holds {} data",
                expected, actual
            ),
            Error::KeyRejected { reason } => write!(f, "key rejected by importer: {}", reason),
            Error::Decryption => f.write_str("decryption error"),
            Error::Verification => f.write_str("verification error"),
        }
    }
}

impl core::error::Error for Error {}

impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Error {
        Error::InvalidBase64(err)
    }
}
