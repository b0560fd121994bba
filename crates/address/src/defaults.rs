use crate::{address::Address, network::Network, AddressError};

/// The default network, selected by feature flag
#[cfg(not(all(feature = "testnet", not(feature = "mainnet"))))]
pub const DEFAULT_NETWORK: Network = Network::Mainnet;

/// The default network, selected by feature flag
#[cfg(all(feature = "testnet", not(feature = "mainnet")))]
pub const DEFAULT_NETWORK: Network = Network::Testnet;

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode(DEFAULT_NETWORK))
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::decode(s)
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serde::Serialize::serialize(&self.to_bytes(), serializer)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s: String = serde::Deserialize::deserialize(deserializer)?;
            Address::decode(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
        } else {
            let bz: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
            Address::from_bytes(&bz).map_err(|e| serde::de::Error::custom(e.to_string()))
        }
    }
}
