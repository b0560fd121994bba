//! # Filaddr
//!
//! `filaddr` implements self-describing account and actor addresses. An address records which
//! protocol produced it and the protocol's payload: an actor ID, the blake2b160 digest of a
//! secp256k1 public key, a 20-byte actor digest, or a raw 48-byte BLS public key.
//!
//! Addresses have two interconvertible representations:
//!
//! - the binary form, `[protocol tag] || payload`, used for storage. It carries no network
//!   and no checksum.
//! - the textual form, `<network><protocol digit><payload>`, where the payload is the decimal
//!   ID or the lowercase unpadded base32 encoding of `payload || checksum`. The checksum is the
//!   4-byte blake2b digest of the binary form.
//!
//! The network is never part of an `Address`. It only selects the first character of the
//! textual form. A caller that wants to keep the network next to an address uses
//! `NetworkAddress`.
//!
//! ```
//! use filaddr::{Address, Network, Protocol};
//!
//! let addr = Address::new_id(1024);
//! assert_eq!(addr.encode(Network::Testnet), "t01024");
//!
//! let parsed = Address::decode("f01024").unwrap();
//! assert_eq!(parsed, addr);
//! assert_eq!(parsed.protocol(), Some(Protocol::ID));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// The address value type and its binary codec
pub mod address;

/// Feature-selected default network, `Display`, `FromStr` and serde
pub mod defaults;

/// The textual codec: base32, checksums and string (de)serialization
pub mod enc;

/// Rendering networks
pub mod network;

/// Protocol-specific payloads
pub mod payload;

/// The closed set of address protocols
pub mod protocol;

pub use address::Address;
pub use defaults::DEFAULT_NETWORK;
pub use network::{Network, NetworkAddress};
pub use payload::{Payload, BLS_PUB_LEN, PAYLOAD_HASH_LEN};
pub use protocol::Protocol;

use thiserror::Error;

/// Errors for this library
#[derive(Debug, Error)]
pub enum AddressError {
    /// The payload byte count does not match the protocol's shape
    #[error("Invalid payload length. Got {0} bytes.")]
    InvalidPayloadLength(usize),

    /// A protocol tag or digit outside the defined protocols
    #[error("Unknown address protocol {0}")]
    UnknownProtocol(u8),

    /// A textual address starting with something other than a network prefix
    #[error("Unknown network prefix {0:?}")]
    UnknownNetwork(char),

    /// Malformed textual input
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),

    /// An ID payload that is not the minimal encoding of its value
    #[error("Non-canonical ID encoding")]
    NonCanonicalEncoding,

    /// The checksum embedded in a textual address does not match its payload
    #[error("Checksum mismatch. Expected {expected:02x?}. Got {got:02x?}.")]
    ChecksumMismatch {
        /// The checksum computed from the decoded payload
        expected: [u8; 4],
        /// The checksum found in the string
        got: [u8; 4],
    },

    /// The public key could not be parsed or serialized
    #[error("Invalid public key")]
    InvalidKey(#[from] k256::elliptic_curve::Error),
}

/// Type alias for address results
pub type AddressResult<T> = Result<T, AddressError>;
