use integer_encoding::VarInt;
use tracing::trace;

use crate::{protocol::Protocol, AddressError, AddressResult};

/// Hash length of payload for Secp256k1 and Actor addresses.
pub const PAYLOAD_HASH_LEN: usize = 20;

/// BLS public key length used for validation of BLS addresses.
pub const BLS_PUB_LEN: usize = 48;

/// Longest LEB128 encoding of a u64.
const MAX_ID_VARINT_LEN: usize = 10;

/// Payload is the data of the Address. Variants are the supported Address protocols.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Payload {
    /// f0: ID protocol address.
    ID(u64),
    /// f1: SECP256K1 key address, 20 byte hash of PublicKey.
    Secp256k1([u8; PAYLOAD_HASH_LEN]),
    /// f2: Actor protocol address, 20 byte hash of actor data.
    Actor([u8; PAYLOAD_HASH_LEN]),
    /// f3: BLS key address, full 48 byte public key.
    BLS([u8; BLS_PUB_LEN]),
}

impl Payload {
    /// The protocol of the payload
    pub fn protocol(&self) -> Protocol {
        match self {
            Payload::ID(_) => Protocol::ID,
            Payload::Secp256k1(_) => Protocol::Secp256k1,
            Payload::Actor(_) => Protocol::Actor,
            Payload::BLS(_) => Protocol::BLS,
        }
    }

    /// Serialize the payload without its protocol tag. IDs are written as minimal unsigned
    /// LEB128 varints.
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        match self {
            Payload::ID(id) => id.encode_var_vec(),
            Payload::Secp256k1(hash) | Payload::Actor(hash) => hash.to_vec(),
            Payload::BLS(key) => key.to_vec(),
        }
    }

    /// Parse the raw payload bytes of a protocol. Fixed-length payloads must have exactly
    /// their length, and ID payloads must be the canonical varint of their value.
    pub fn new(protocol: Protocol, payload: &[u8]) -> AddressResult<Self> {
        match protocol {
            Protocol::ID => decode_id(payload).map(Payload::ID),
            Protocol::Secp256k1 => fixed(payload).map(Payload::Secp256k1),
            Protocol::Actor => fixed(payload).map(Payload::Actor),
            Protocol::BLS => fixed(payload).map(Payload::BLS),
        }
    }
}

fn fixed<const N: usize>(payload: &[u8]) -> AddressResult<[u8; N]> {
    if payload.len() != N {
        return Err(AddressError::InvalidPayloadLength(payload.len()));
    }
    let mut buf = [0u8; N];
    buf.copy_from_slice(payload);
    Ok(buf)
}

fn decode_id(payload: &[u8]) -> AddressResult<u64> {
    // a full-length varint whose last byte carries bits past the 64th
    if payload.len() == MAX_ID_VARINT_LEN
        && payload[..MAX_ID_VARINT_LEN - 1].iter().all(|b| b & 0x80 != 0)
        && payload[MAX_ID_VARINT_LEN - 1] > 1
    {
        trace!(?payload, "rejecting overflowing ID payload");
        return Err(AddressError::NonCanonicalEncoding);
    }
    let (id, read) =
        u64::decode_var(payload).ok_or(AddressError::InvalidPayloadLength(payload.len()))?;
    if read != payload.len() {
        return Err(AddressError::InvalidPayloadLength(payload.len()));
    }
    // rejects padded continuation bytes and overflowing final bytes
    if id.encode_var_vec() != payload {
        trace!(?payload, id, "rejecting non-canonical ID payload");
        return Err(AddressError::NonCanonicalEncoding);
    }
    Ok(id)
}
