use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{address::Address, enc, AddressError, AddressResult};

/// The network an address is rendered for. It selects the first character of the textual
/// form and nothing else.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Network {
    /// Mainnet, prefix `f`
    Mainnet,
    /// Testnet, prefix `t`
    Testnet,
}

impl Network {
    /// The textual address prefix of the network
    pub const fn prefix(self) -> char {
        match self {
            Network::Mainnet => 'f',
            Network::Testnet => 't',
        }
    }

    /// Look up a network by its textual address prefix.
    pub fn from_prefix(c: char) -> AddressResult<Self> {
        match c {
            'f' => Ok(Network::Mainnet),
            't' => Ok(Network::Testnet),
            _ => Err(AddressError::UnknownNetwork(c)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = AddressError;

    fn from_str(s: &str) -> AddressResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(AddressError::InvalidFormat(format!("unknown network {:?}", s))),
        }
    }
}

/// An address together with the network it is rendered for.
///
/// Equality and hashing only consider the address, so the same address parsed from a mainnet
/// and a testnet string compares equal.
#[derive(Copy, Clone, Debug)]
pub struct NetworkAddress {
    network: Network,
    address: Address,
}

impl NetworkAddress {
    /// Bind an address to a network
    pub const fn new(network: Network, address: Address) -> Self {
        Self { network, address }
    }

    /// The network the address renders for
    pub fn network(&self) -> Network {
        self.network
    }

    /// The address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Rebind the address to another network
    pub fn set_network(&mut self, network: Network) -> &mut Self {
        self.network = network;
        self
    }
}

impl PartialEq for NetworkAddress {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for NetworkAddress {}

impl Hash for NetworkAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state)
    }
}

impl From<NetworkAddress> for Address {
    fn from(addr: NetworkAddress) -> Address {
        addr.address
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&enc::encode_address(&self.address, self.network))
    }
}

impl FromStr for NetworkAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> AddressResult<Self> {
        enc::decode_address(s)
    }
}

impl serde::Serialize for NetworkAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for NetworkAddress {
    fn deserialize<D>(deserializer: D) -> Result<NetworkAddress, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(|e: AddressError| serde::de::Error::custom(e.to_string()))
    }
}
