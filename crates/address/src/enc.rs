//! Contains the textual address codec. Non-ID payloads are written as lowercase, unpadded
//! RFC 4648 base32 of `payload || checksum`, where the checksum is the blake2b32 digest of
//! the binary address. The 8-to-5 bit regrouping is done by the `bech32` crate, only the
//! alphabet differs.

use bech32::{u5, FromBase32, ToBase32};
use filaddr_core::hashes::blake2b32;
use tracing::debug;

use crate::{
    address::Address,
    network::{Network, NetworkAddress},
    payload::{Payload, BLS_PUB_LEN},
    protocol::Protocol,
    AddressError, AddressResult,
};

/// Length of the checksum appended to non-ID payloads
pub const CHECKSUM_LEN: usize = 4;

/// The longest valid textual address: the two marker characters and the base32 encoding of a
/// BLS key and its checksum.
pub const MAX_ADDRESS_LEN: usize = 2 + 84;

/// The textual form of `Address::UNDEF`
pub const UNDEF_ADDRESS_STRING: &str = "<empty>";

const BASE32_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

// the max length must fit a BLS key and checksum
const _: () = assert!((BLS_PUB_LEN + CHECKSUM_LEN) * 8 <= (MAX_ADDRESS_LEN - 2) * 5);

/// Encode bytes as lowercase, unpadded base32.
pub fn encode_base32(data: &[u8]) -> String {
    data.to_base32()
        .into_iter()
        .map(|c| BASE32_ALPHABET[c.to_u8() as usize] as char)
        .collect()
}

/// Decode lowercase, unpadded base32. Characters outside the alphabet, non-zero trailing bits
/// and impossible lengths are errors.
pub fn decode_base32(s: &str) -> AddressResult<Vec<u8>> {
    let data = s
        .bytes()
        .map(|b| {
            let value = match b {
                b'a'..=b'z' => b - b'a',
                b'2'..=b'7' => b - b'2' + 26,
                _ => {
                    return Err(AddressError::InvalidFormat(format!(
                        "invalid base32 character {:?}",
                        b as char
                    )))
                }
            };
            u5::try_from_u8(value).map_err(|e| AddressError::InvalidFormat(e.to_string()))
        })
        .collect::<AddressResult<Vec<u5>>>()?;

    Vec::<u8>::from_base32(&data)
        .map_err(|e| AddressError::InvalidFormat(format!("invalid base32 padding: {}", e)))
}

/// Compute the checksum of a binary address
pub fn checksum(ingest: &[u8]) -> [u8; CHECKSUM_LEN] {
    blake2b32(ingest).to_array()
}

/// Check a claimed checksum against a binary address
pub fn validate_checksum(ingest: &[u8], expect: &[u8]) -> bool {
    checksum(ingest)[..] == *expect
}

/// Render an address with the prefix of a network. `Address::UNDEF` renders as `<empty>`.
pub fn encode_address(addr: &Address, network: Network) -> String {
    let payload = match addr.payload() {
        None => return UNDEF_ADDRESS_STRING.to_owned(),
        Some(payload) => payload,
    };
    let protocol = payload.protocol();

    match payload {
        Payload::ID(id) => format!("{}{}{}", network.prefix(), protocol, id),
        _ => {
            let mut ingest = payload.to_raw_bytes();
            ingest.extend_from_slice(&checksum(&addr.to_bytes()));
            format!(
                "{}{}{}",
                network.prefix(),
                protocol,
                encode_base32(&ingest)
            )
        }
    }
}

/// Parse a textual address, keeping the network it was rendered for.
pub fn decode_address(s: &str) -> AddressResult<NetworkAddress> {
    if s.len() < 2 {
        return Err(AddressError::InvalidFormat(format!(
            "address too short: {:?}",
            s
        )));
    }

    let bytes = s.as_bytes();
    let network = Network::from_prefix(bytes[0] as char).map_err(|e| {
        debug!(address = s, "unknown address network");
        e
    })?;
    let protocol = Protocol::from_digit(bytes[1] as char)?;

    if s.len() > MAX_ADDRESS_LEN {
        return Err(AddressError::InvalidFormat(format!(
            "address too long: {} characters",
            s.len()
        )));
    }

    // both markers are ASCII, so this is a char boundary
    let raw = &s[2..];

    let address = match protocol {
        Protocol::ID => Address::new_id(parse_id(raw)?),
        _ => {
            let decoded = decode_base32(raw)?;
            if decoded.len() < CHECKSUM_LEN {
                return Err(AddressError::InvalidPayloadLength(decoded.len()));
            }
            let (payload, got) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
            let address = Address::from_payload(Payload::new(protocol, payload)?);

            let expected = checksum(&address.to_bytes());
            if expected[..] != *got {
                debug!(address = s, "address checksum mismatch");
                let mut claimed = [0u8; CHECKSUM_LEN];
                claimed.copy_from_slice(got);
                return Err(AddressError::ChecksumMismatch {
                    expected,
                    got: claimed,
                });
            }
            address
        }
    };

    Ok(NetworkAddress::new(network, address))
}

fn parse_id(raw: &str) -> AddressResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidFormat(format!(
            "invalid actor ID {:?}",
            raw
        )));
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return Err(AddressError::NonCanonicalEncoding);
    }
    raw.parse::<u64>()
        .map_err(|e| AddressError::InvalidFormat(format!("invalid actor ID {:?}: {}", raw, e)))
}
