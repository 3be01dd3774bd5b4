use core::fmt;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use log::error;

pub const HASH_LEN: usize = 32;

/// A fixed 32-byte identity value.
///
/// Only stores and renders the bytes, it never computes a digest.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hash([u8; HASH_LEN]);

pub enum HashError {
    LengthMismatch { actual: usize, expected: usize },
}

impl Debug for HashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for HashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HashError::LengthMismatch { actual, expected } => write!(
                f,
                "given bytes with length {} should be {}",
                actual, expected
            ),
        }
    }
}

impl Error for HashError {}

impl Hash {
    pub const ZERO: Hash = Hash([0u8; HASH_LEN]);

    pub fn zero() -> Self {
        Self::ZERO
    }

    ///
    /// Copies exactly 32 bytes out of `b`.
    /// Panics if `b` is any other length, nothing is truncated or padded.
    ///
    pub fn from_bytes(b: &[u8]) -> Self {
        match Self::try_from_bytes(b) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Refusing to build hash ({}).", e);
                panic!("{}", e)
            }
        }
    }

    pub fn try_from_bytes(b: &[u8]) -> Result<Self, HashError> {
        let value: [u8; HASH_LEN] = b.try_into().map_err(|_| HashError::LengthMismatch {
            actual: b.len(),
            expected: HASH_LEN,
        })?;
        Ok(Self(value))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns an owned copy, writes to it never reach the hash.
    pub fn to_slice(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; HASH_LEN]> for Hash {
    fn from(value: [u8; HASH_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = HashError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_bytes(value)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}
