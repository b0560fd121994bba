use std::{convert::TryFrom, fmt};

use crate::{AddressError, AddressResult};

/// The protocol of an address. The tag is the first byte of the binary form and the second
/// character of the textual form.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Protocol {
    /// `0`: actor ID, a varint encoded integer
    ID = 0,
    /// `1`: blake2b160 digest of an uncompressed secp256k1 public key
    Secp256k1 = 1,
    /// `2`: 20-byte actor digest
    Actor = 2,
    /// `3`: raw 48-byte BLS public key
    BLS = 3,
}

impl Protocol {
    /// The protocol tag
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// The ASCII digit representing the protocol in textual addresses
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Look up a protocol by its tag.
    pub fn from_tag(tag: u8) -> AddressResult<Self> {
        match tag {
            0 => Ok(Protocol::ID),
            1 => Ok(Protocol::Secp256k1),
            2 => Ok(Protocol::Actor),
            3 => Ok(Protocol::BLS),
            _ => Err(AddressError::UnknownProtocol(tag)),
        }
    }

    /// Look up a protocol by its textual digit. Other ASCII characters are reported with their
    /// byte value, and non-ASCII characters are a format error.
    pub fn from_digit(c: char) -> AddressResult<Self> {
        if !c.is_ascii() {
            return Err(AddressError::InvalidFormat(format!(
                "non-ASCII protocol marker {:?}",
                c
            )));
        }
        match c.to_digit(10) {
            Some(d) => Self::from_tag(d as u8),
            None => Err(AddressError::UnknownProtocol(c as u8)),
        }
    }
}

impl TryFrom<u8> for Protocol {
    type Error = AddressError;

    fn try_from(tag: u8) -> AddressResult<Self> {
        Self::from_tag(tag)
    }
}

impl From<Protocol> for u8 {
    fn from(protocol: Protocol) -> u8 {
        protocol.tag()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}
