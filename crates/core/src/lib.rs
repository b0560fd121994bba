//! # Filaddr Core
//!
//! `filaddr-core` contains the digest utilities consumed by the `filaddr`
//! address codec.
//!
//! ## Crate Layout
//!
//! ### Hashes
//!
//! The hashes module provides newtypes for blake2b outputs of a fixed length.
//! These newtypes are called marked digests and are intended to be used for a
//! specific purpose. E.g. `Blake2b160Digest` is the 20-byte digest used as the
//! payload of key-derived and actor addresses, while `Blake2b32Digest` is the
//! 4-byte digest used as the checksum of textual addresses.
//!
//! #### Writers
//!
//! Each digest has a matching writer implementing `std::io::Write`. Writing
//! more than once updates the hasher, and `MarkedDigestWriter::finish`
//! consumes the writer to produce the marked digest.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

#[macro_use]
pub mod macros;

pub mod hashes;

pub use hashes::*;
