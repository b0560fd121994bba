use std::io::Write;

use thiserror::Error;

/// Errors related to constructing marked digests.
#[derive(Debug, Error)]
pub enum HashError {
    /// The input did not have the digest's length.
    #[error("Bad digest length. Expected {expected} bytes. Got {got}.")]
    BadLength {
        /// The digest length
        expected: usize,
        /// The input length
        got: usize,
    },

    /// `from_hex` encountered an error on its input.
    #[error("Error deserializing hex string")]
    FromHexError(#[from] hex::FromHexError),
}

/// A fixed-length digest newtype. Implementations are produced by the `mark_digest!` macro.
pub trait MarkedDigest: Copy + Default + AsRef<[u8]> + AsMut<[u8]> {
    /// The length of the digest in bytes
    const LENGTH: usize;

    /// Return a reference to the digest bytes
    fn as_slice(&self) -> &[u8] {
        self.as_ref()
    }

    /// Instantiate the digest from a slice of exactly `LENGTH` bytes.
    fn from_slice(buf: &[u8]) -> Result<Self, HashError> {
        if buf.len() != Self::LENGTH {
            return Err(HashError::BadLength {
                expected: Self::LENGTH,
                got: buf.len(),
            });
        }
        let mut digest = Self::default();
        digest.as_mut().copy_from_slice(buf);
        Ok(digest)
    }

    /// Return the hex-encoded digest
    fn to_hex(&self) -> String {
        hex::encode(self.as_ref())
    }

    /// Decode a hex string and instantiate the digest from the result.
    fn from_hex(s: &str) -> Result<Self, HashError> {
        let buf = hex::decode(s)?;
        Self::from_slice(&buf)
    }
}

/// A hasher exposing a `Write` interface that produces a marked digest.
pub trait MarkedDigestWriter<D: MarkedDigest>: Default + Write {
    /// Consume the writer and produce the digest.
    fn finish(self) -> D;
}
