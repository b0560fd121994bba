//! Holds utilites for working with cryptographic digests, and disambiguating digests via marker
//! traits.
//!
//! We want to wrap hashes in marked newtypes in order to prevent type-confusion between address
//! payload digests and checksums, which come out of the same hash function.

/// Marked digests
pub mod marked;

/// Tooling for blake2b160 and blake2b32
pub mod blake2b;

pub use blake2b::*;
pub use marked::*;
