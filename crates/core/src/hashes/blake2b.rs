use std::io::{Result as IOResult, Write};

use blake2::Blake2b;
use digest::{
    consts::{U20, U4},
    Digest,
};

use crate::hashes::marked::{MarkedDigest, MarkedDigestWriter};

mark_digest!(
    /// A blake2b digest with a 20-byte output. Used as the payload of key-derived and actor
    /// addresses.
    Blake2b160Digest,
    20
);

mark_digest!(
    /// A blake2b digest with a 4-byte output. Used as the checksum of textual addresses.
    Blake2b32Digest,
    4
);

/// A struct that exposes a blake2b160 `Write` interface.
///
/// ```
/// # use std::io::{Result};
/// use std::io::Write;
/// use filaddr_core::hashes::{Blake2b160Writer, MarkedDigestWriter};
///
/// # fn main() -> Result<()> {
/// let mut w = Blake2b160Writer::default();
/// # let data = [0u8; 32];
///
/// // Writing more than once will update the hasher.
/// w.write_all(&data)?;
///
/// // Call finish to consume the hasher and produce the digest.
/// let digest = w.finish();
/// # Ok(())
/// }
/// ```
#[derive(Default)]
pub struct Blake2b160Writer {
    internal: Blake2b<U20>,
}

impl Write for Blake2b160Writer {
    fn write(&mut self, buf: &[u8]) -> IOResult<usize> {
        self.internal.update(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> IOResult<()> {
        Ok(())
    }
}

impl MarkedDigestWriter<Blake2b160Digest> for Blake2b160Writer {
    fn finish(self) -> Blake2b160Digest {
        let result = self.internal.finalize();
        let mut digest = Blake2b160Digest::default();
        digest.as_mut().copy_from_slice(&result[..]);
        digest
    }
}

/// A struct that exposes a blake2b32 `Write` interface. See `Blake2b160Writer`.
#[derive(Default)]
pub struct Blake2b32Writer {
    internal: Blake2b<U4>,
}

impl Write for Blake2b32Writer {
    fn write(&mut self, buf: &[u8]) -> IOResult<usize> {
        self.internal.update(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> IOResult<()> {
        Ok(())
    }
}

impl MarkedDigestWriter<Blake2b32Digest> for Blake2b32Writer {
    fn finish(self) -> Blake2b32Digest {
        let result = self.internal.finalize();
        let mut digest = Blake2b32Digest::default();
        digest.as_mut().copy_from_slice(&result[..]);
        digest
    }
}

/// Hash data with blake2b160
pub fn blake2b160(preimage: &[u8]) -> Blake2b160Digest {
    let mut w = Blake2b160Writer::default();
    w.internal.update(preimage);
    w.finish()
}

/// Hash data with blake2b32
pub fn blake2b32(preimage: &[u8]) -> Blake2b32Digest {
    let mut w = Blake2b32Writer::default();
    w.internal.update(preimage);
    w.finish()
}
